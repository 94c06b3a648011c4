//! 关系视图错误处理
//!
//! 所有错误都同步返回给直接调用者，视图内部不做恢复、重试或吞掉错误：
//! - 字段解析失败使用 `FieldNotFound`，不会静默返回空值
//! - 容器字段的值不是可下载的 URL 时使用 `InvalidContainerField`
//! - 容器下载失败时原样透传 `TransportError`

use thiserror::Error;

/// 关系视图错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    #[error("字段不存在: {0}")]
    FieldNotFound(String),

    #[error("不是字段名或容器字段: {0}")]
    InvalidContainerField(String),

    #[error("容器传输错误: {0}")]
    Transport(#[from] TransportError),
}

/// 容器传输层错误
///
/// 由外部传输实现产生，视图只负责透传
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 关系视图结果类型
pub type RelationResult<T> = Result<T, RelationError>;
