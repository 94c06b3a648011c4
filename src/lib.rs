//! fmdata-relation - 数据服务查询结果的只读关系视图
//!
//! 外部查询层取回负载和元数据后，由 `ResultView` 提供游标移动、
//! 字段与门户解析、记录元数据读取和导出，不复制也不重新请求数据。

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::api::{
    CommunicationProvider, ConfiguredProvider, FieldValue, ResultKind, ResultView,
    ResultViewBuilder,
};
pub use crate::core::{DataInfo, QueryMetadata, RelationError, RelationResult, TransportError};
