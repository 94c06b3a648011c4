//! 通信提供者接口
//!
//! 视图本身不做任何网络访问。字段后处理策略和容器数据下载都委托给
//! 外部的 `CommunicationProvider` 实现

use crate::config::Config;
use crate::core::TransportError;

/// 外部通信协作者
///
/// 超时、重试和证书校验等策略都由实现方负责
pub trait CommunicationProvider: Send + Sync {
    /// 读取标量字段时是否做 HTML 转义
    fn field_html_encoding(&self) -> bool {
        false
    }

    /// 下载容器字段 URL 指向的二进制内容
    fn access_to_container(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

/// 由配置和下载函数组装的提供者
///
/// # 示例
///
/// ```rust
/// use fmdata_relation::api::ConfiguredProvider;
/// use fmdata_relation::config::Config;
///
/// let provider = ConfiguredProvider::new(&Config::default(), |url: &str| {
///     Ok(url.as_bytes().to_vec())
/// });
/// ```
pub struct ConfiguredProvider<F> {
    field_html_encoding: bool,
    fetch: F,
}

impl<F> ConfiguredProvider<F>
where
    F: Fn(&str) -> Result<Vec<u8>, TransportError> + Send + Sync,
{
    pub fn new(config: &Config, fetch: F) -> Self {
        Self {
            field_html_encoding: config.field_html_encoding,
            fetch,
        }
    }
}

impl<F> CommunicationProvider for ConfiguredProvider<F>
where
    F: Fn(&str) -> Result<Vec<u8>, TransportError> + Send + Sync,
{
    fn field_html_encoding(&self) -> bool {
        self.field_html_encoding
    }

    fn access_to_container(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        log::debug!("下载容器数据: {}", url);
        (self.fetch)(url)
    }
}
