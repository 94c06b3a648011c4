//! 对外 API
//!
//! - `relation`：查询结果视图、游标与字段解析
//! - `provider`：视图调用的外部通信协作者

pub mod provider;
pub mod relation;

pub use provider::{CommunicationProvider, ConfiguredProvider};
pub use relation::{
    qualified_name, Cursor, FieldValue, Records, ResultKind, ResultView, ResultViewBuilder,
    CONTAINER_URL_PREFIX,
};
