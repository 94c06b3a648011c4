//! 查询元数据
//!
//! 对应数据服务返回的 `dataInfo` / `portalDataInfo` 描述符，
//! 在视图构造时按关系名绑定

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 单个查询元数据描述符
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// 目标表（表实例）名
    #[serde(default)]
    pub table: String,
    /// 门户对象名，存在时优先于表名参与匹配
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portal_object_name: Option<String>,
    /// 总记录数，门户元数据没有此项
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_record_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned_count: Option<u64>,
}

impl QueryMetadata {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    pub fn with_portal_object_name(mut self, name: impl Into<String>) -> Self {
        self.portal_object_name = Some(name.into());
        self
    }

    pub fn with_counts(mut self, found: u64, returned: u64) -> Self {
        self.found_count = Some(found);
        self.returned_count = Some(returned);
        self
    }

    pub fn with_total_count(mut self, total: u64) -> Self {
        self.total_record_count = Some(total);
        self
    }

    /// 判断描述符是否对应给定的关系名
    ///
    /// 带门户对象名的描述符只按对象名匹配，否则按表名匹配
    pub fn matches_relation(&self, name: &str) -> bool {
        match &self.portal_object_name {
            Some(object_name) => object_name == name,
            None => self.table == name,
        }
    }

    /// 派生收窄到单条记录后的元数据，返回数固定为 1
    pub fn narrowed(&self) -> Self {
        Self {
            returned_count: Some(1),
            ..self.clone()
        }
    }
}

/// 视图绑定的元数据
///
/// 外部查询层可能提供单个描述符，也可能提供一组候选描述符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataInfo {
    Single(QueryMetadata),
    Candidates(Vec<QueryMetadata>),
}

impl DataInfo {
    /// 从原始 JSON 值构建，无法识别的结构返回 None
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => Self::parse_descriptor(value).map(DataInfo::Single),
            // 逐项解析，个别描述符损坏时保留其余候选
            Value::Array(items) => Some(DataInfo::Candidates(
                items.iter().filter_map(Self::parse_descriptor).collect(),
            )),
            _ => None,
        }
    }

    fn parse_descriptor(value: &Value) -> Option<QueryMetadata> {
        match QueryMetadata::deserialize(value) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                log::debug!("忽略无法解析的元数据: {}", e);
                None
            }
        }
    }

    /// 单个描述符；候选列表尚未绑定时返回 None
    pub fn metadata(&self) -> Option<&QueryMetadata> {
        match self {
            DataInfo::Single(metadata) => Some(metadata),
            DataInfo::Candidates(_) => None,
        }
    }

    /// 按关系名从候选列表中选出描述符
    ///
    /// 多个候选同时匹配时取最后一个；没有匹配或本身就是单个描述符时保持不变
    pub fn bind(self, relation_name: &str) -> Self {
        match self {
            DataInfo::Candidates(candidates) => {
                match candidates
                    .iter()
                    .rposition(|candidate| candidate.matches_relation(relation_name))
                {
                    Some(index) => {
                        log::debug!(
                            "关系 {} 绑定到元数据 #{} (表 {})",
                            relation_name,
                            index,
                            candidates[index].table
                        );
                        DataInfo::Single(candidates[index].clone())
                    }
                    None => {
                        log::debug!("关系 {} 没有匹配的元数据", relation_name);
                        DataInfo::Candidates(candidates)
                    }
                }
            }
            single => single,
        }
    }

    /// 收窄到单条记录时使用的元数据
    pub fn narrowed(&self) -> Option<Self> {
        self.metadata().map(|m| DataInfo::Single(m.narrowed()))
    }
}

impl From<QueryMetadata> for DataInfo {
    fn from(metadata: QueryMetadata) -> Self {
        DataInfo::Single(metadata)
    }
}

impl From<Vec<QueryMetadata>> for DataInfo {
    fn from(candidates: Vec<QueryMetadata>) -> Self {
        DataInfo::Candidates(candidates)
    }
}
