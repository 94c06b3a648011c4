//! 查询结果视图
//!
//! 对外部查询层已取回的负载提供只读、可移动游标的访问，
//! 收窄（取单条记录、进入门户）总是产生新的视图，父视图不受影响

use super::cursor::{Cursor, Records};
use super::kind::ResultKind;
use crate::api::provider::CommunicationProvider;
use crate::core::DataInfo;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// 过滤掉 JSON null，与数据服务“字段已设置”的语义一致
pub(crate) fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// 查询结果视图
///
/// # 示例
///
/// ```rust
/// use fmdata_relation::api::{ResultKind, ResultView};
/// use serde_json::json;
///
/// let data = json!([
///     {"fieldData": {"name": "Alice"}, "portalData": {}, "recordId": "1", "modId": "0"},
///     {"fieldData": {"name": "Bob"}, "portalData": {}, "recordId": "2", "modId": "3"}
/// ]);
/// let view = ResultView::builder(&data, ResultKind::RecordList).build();
///
/// for record in &view {
///     let name = record.field("name", None).expect("field exists");
///     println!("{}", name.as_str().unwrap_or_default());
/// }
/// ```
#[derive(Clone)]
pub struct ResultView<'a> {
    data: Option<&'a Value>,
    data_info: Option<DataInfo>,
    kind: ResultKind,
    error_code: i32,
    portal_name: Option<String>,
    provider: Option<Arc<dyn CommunicationProvider>>,
    cursor: Cursor,
}

/// ResultView 构建器
///
/// 元数据按关系名的绑定在 `build` 时完成
pub struct ResultViewBuilder<'a> {
    data: Option<&'a Value>,
    data_info: Option<DataInfo>,
    kind: ResultKind,
    error_code: i32,
    portal_name: Option<String>,
    provider: Option<Arc<dyn CommunicationProvider>>,
}

impl<'a> ResultViewBuilder<'a> {
    /// 没有负载的视图，例如查询层报错时
    pub fn empty(kind: ResultKind) -> Self {
        Self {
            data: None,
            data_info: None,
            kind,
            error_code: 0,
            portal_name: None,
            provider: None,
        }
    }

    pub fn data_info(mut self, data_info: impl Into<DataInfo>) -> Self {
        self.data_info = Some(data_info.into());
        self
    }

    pub fn maybe_data_info(mut self, data_info: Option<DataInfo>) -> Self {
        self.data_info = data_info;
        self
    }

    /// 查询层返回的错误码，非 0 时跳过元数据绑定
    pub fn error_code(mut self, error_code: i32) -> Self {
        self.error_code = error_code;
        self
    }

    pub fn portal_name(mut self, name: impl Into<String>) -> Self {
        self.portal_name = Some(name.into());
        self
    }

    pub fn maybe_portal_name(mut self, name: Option<String>) -> Self {
        self.portal_name = name;
        self
    }

    pub fn provider(mut self, provider: Arc<dyn CommunicationProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn maybe_provider(mut self, provider: Option<Arc<dyn CommunicationProvider>>) -> Self {
        self.provider = provider;
        self
    }

    pub fn build(self) -> ResultView<'a> {
        let mut data_info = self.data_info;
        if self.error_code == 0 && self.kind.is_related() {
            if let Some(name) = self.portal_name.as_deref() {
                data_info = data_info.map(|info| info.bind(name));
            }
        }

        ResultView {
            data: self.data,
            data_info,
            kind: self.kind,
            error_code: self.error_code,
            portal_name: self.portal_name,
            provider: self.provider,
            cursor: Cursor::default(),
        }
    }
}

impl<'a> ResultView<'a> {
    pub fn builder(data: &'a Value, kind: ResultKind) -> ResultViewBuilder<'a> {
        ResultViewBuilder {
            data: present(Some(data)),
            data_info: None,
            kind,
            error_code: 0,
            portal_name: None,
            provider: None,
        }
    }

    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    pub fn data(&self) -> Option<&'a Value> {
        self.data
    }

    pub fn data_info(&self) -> Option<&DataInfo> {
        self.data_info.as_ref()
    }

    pub fn error_code(&self) -> i32 {
        self.error_code
    }

    pub fn portal_name(&self) -> Option<&str> {
        self.portal_name.as_deref()
    }

    /// 门户的引用名与查询时使用的名字不同时，可以在这里覆盖
    pub fn set_portal_name(&mut self, name: impl Into<String>) {
        self.portal_name = Some(name.into());
    }

    pub(crate) fn provider(&self) -> Option<&Arc<dyn CommunicationProvider>> {
        self.provider.as_ref()
    }

    // ---------------------------------------------------------------------
    // 游标操作
    // ---------------------------------------------------------------------

    pub fn next(&mut self) {
        self.cursor.next();
    }

    pub fn previous(&mut self) {
        self.cursor.previous();
    }

    /// 移动到指定位置，之后的读取落在 `position` 上（内部指针为 position - 1）
    pub fn move_to(&mut self, position: i64) {
        self.cursor.set(position.saturating_sub(1));
    }

    pub fn last(&mut self) {
        self.cursor.set(self.count() as i64 - 1);
    }

    pub fn rewind(&mut self) {
        self.cursor.rewind();
    }

    pub fn key(&self) -> i64 {
        self.cursor.position()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn valid(&self) -> bool {
        self.element_at(self.cursor.index()).is_some()
    }

    /// 当前指针处的单条记录视图
    pub fn current(&self) -> Option<ResultView<'a>> {
        self.numbered_record(self.cursor.index())
    }

    /// 列表形态的元素个数，单条形态或无负载时为 0
    pub fn count(&self) -> usize {
        if !self.kind.is_list() {
            return 0;
        }
        self.data
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn first_record(&self) -> Option<ResultView<'a>> {
        self.record_at(0)
    }

    pub fn last_record(&self) -> Option<ResultView<'a>> {
        self.count().checked_sub(1).and_then(|index| self.record_at(index))
    }

    /// 与游标无关的前向迭代
    pub fn records(&self) -> Records<'_, 'a> {
        Records::new(self)
    }

    /// 把全部记录收集成单条记录视图列表
    pub fn get_records(&self) -> Vec<ResultView<'a>> {
        self.records().collect()
    }

    pub(crate) fn record_at(&self, index: usize) -> Option<ResultView<'a>> {
        self.numbered_record(Some(index))
    }

    fn numbered_record(&self, index: Option<usize>) -> Option<ResultView<'a>> {
        let element = self.element_at(index)?;
        log::trace!("收窄到第 {:?} 条记录 ({:?})", index, self.kind);
        Some(
            ResultView::builder(element, self.kind.singular())
                .maybe_data_info(self.data_info.as_ref().and_then(DataInfo::narrowed))
                .error_code(self.error_code)
                .maybe_portal_name(self.portal_name.clone())
                .maybe_provider(self.provider.clone())
                .build(),
        )
    }

    fn element_at(&self, index: Option<usize>) -> Option<&'a Value> {
        if !self.kind.is_list() {
            return None;
        }
        let items = self.data?.as_array()?;
        present(items.get(index?))
    }

    /// 当前可寻址的元素：列表形态取指针处元素，单条形态取负载本身
    pub(crate) fn current_element(&self) -> Option<&'a Value> {
        match self.kind {
            ResultKind::RecordList | ResultKind::RelatedList => {
                self.element_at(self.cursor.index())
            }
            ResultKind::Record | ResultKind::RelatedRecord => self.data,
        }
    }

    // ---------------------------------------------------------------------
    // 元数据
    // ---------------------------------------------------------------------

    /// 查询目标的表实例名
    pub fn target_table(&self) -> Option<&str> {
        self.metadata().map(|m| m.table.as_str())
    }

    /// 总记录数，门户视图返回 None
    pub fn total_count(&self) -> Option<u64> {
        self.metadata().and_then(|m| m.total_record_count)
    }

    pub fn found_count(&self) -> Option<u64> {
        self.metadata().and_then(|m| m.found_count)
    }

    /// 返回记录数，单条记录视图为 1
    pub fn returned_count(&self) -> Option<u64> {
        self.metadata().and_then(|m| m.returned_count)
    }

    pub fn database(&self) -> Option<&str> {
        self.metadata().and_then(|m| m.database.as_deref())
    }

    pub fn layout(&self) -> Option<&str> {
        self.metadata().and_then(|m| m.layout.as_deref())
    }

    fn metadata(&self) -> Option<&crate::core::QueryMetadata> {
        self.data_info.as_ref().and_then(DataInfo::metadata)
    }

    pub fn record_id(&self) -> Option<&'a Value> {
        present(self.current_element()?.get("recordId"))
    }

    pub fn mod_id(&self) -> Option<&'a Value> {
        present(self.current_element()?.get("modId"))
    }

    /// 当前位置可见的字段名
    pub fn field_names(&self) -> Vec<&'a str> {
        self.field_map()
            .map(|fields| fields.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// 当前位置可见的门户名，门户形态没有嵌套门户
    pub fn portal_names(&self) -> Vec<&'a str> {
        if self.kind.is_related() {
            return Vec::new();
        }
        self.current_element()
            .and_then(|record| record.get("portalData"))
            .and_then(Value::as_object)
            .map(|portals| portals.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// 导出当前位置的字段映射快照
    pub fn to_array(&self) -> Value {
        self.field_map()
            .map(|fields| Value::Object(fields.clone()))
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    fn field_map(&self) -> Option<&'a Map<String, Value>> {
        let element = self.current_element()?;
        match self.kind {
            ResultKind::RecordList | ResultKind::Record => element.get("fieldData")?.as_object(),
            ResultKind::RelatedList | ResultKind::RelatedRecord => element.as_object(),
        }
    }
}

impl fmt::Debug for ResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultView")
            .field("kind", &self.kind)
            .field("cursor", &self.cursor)
            .field("count", &self.count())
            .field("portal_name", &self.portal_name)
            .field("error_code", &self.error_code)
            .field("data_info", &self.data_info)
            .field("has_provider", &self.provider.is_some())
            .finish()
    }
}
