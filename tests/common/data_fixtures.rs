//! 测试数据生成模块
//!
//! 按数据服务的响应结构生成负载和元数据

use fmdata_relation::{DataInfo, QueryMetadata};
use serde_json::{json, Value};

/// 单条联系人记录，带 Orders 门户
pub fn contact_record(id: u64, name: &str, orders: usize) -> Value {
    let rows: Vec<Value> = (1..=orders)
        .map(|n| {
            json!({
                "recordId": format!("{}", id * 100 + n as u64),
                "Orders::number": format!("ORD-{}-{}", id, n),
                "Orders::amount": n * 10,
                "modId": "0"
            })
        })
        .collect();

    json!({
        "fieldData": {
            "id": id,
            "name": name,
            "photo": format!("https://fms.example.com/Streaming_SSL/MainDB/{}.jpg", id),
            "Orders::latest": format!("ORD-{}-{}", id, orders)
        },
        "portalData": {
            "Orders": rows
        },
        "portalDataInfo": [
            {"database": "Sales", "table": "Orders", "foundCount": orders, "returnedCount": orders}
        ],
        "recordId": format!("{}", id),
        "modId": format!("{}", id % 3)
    })
}

/// 联系人记录列表
pub fn contact_list(count: u64) -> Value {
    Value::Array(
        (1..=count)
            .map(|id| contact_record(id, &format!("Contact{}", id), (id % 4) as usize))
            .collect(),
    )
}

/// 顶层查询元数据
pub fn contacts_info(found: u64, returned: u64) -> DataInfo {
    let mut metadata = QueryMetadata::new("Contacts").with_total_count(500).with_counts(found, returned);
    metadata.database = Some("Sales".to_string());
    metadata.layout = Some("ContactDetail".to_string());
    DataInfo::from(metadata)
}

/// 联合两个关系的扁平门户行
pub fn joined_rows() -> Value {
    json!([
        {"A::x": "from A", "B::x": "from B", "recordId": "7", "modId": "1"},
        {"A::x": "second A", "B::x": "second B", "recordId": "8", "modId": "2"}
    ])
}
