// 日志初始化
//
// 库代码只依赖 `log` 门面；这里为没有自己日志后端的调用方提供 flexi_logger 实现

use crate::config::{Config, LogConfig};
use flexi_logger::{
    detailed_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 日志输出目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// 未配置日志目录时输出到 stderr
    Stderr,
    /// 按大小轮转的日志文件
    File { dir: String, basename: String },
}

impl LogTarget {
    pub fn from_config(log: &LogConfig) -> Self {
        if log.dir.trim().is_empty() {
            LogTarget::Stderr
        } else {
            LogTarget::File {
                dir: log.dir.clone(),
                basename: if log.file.trim().is_empty() {
                    "fmdata".to_string()
                } else {
                    log.file.clone()
                },
            }
        }
    }
}

/// 初始化日志系统
///
/// # Examples
/// ```no_run
/// use fmdata_relation::config::Config;
/// use fmdata_relation::utils::logging;
///
/// let mut config = Config::default();
/// config.log.dir.clear(); // 输出到 stderr
/// logging::init(&config).expect("日志初始化失败");
/// ```
pub fn init(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let target = LogTarget::from_config(&config.log);
    let logger = Logger::try_with_str(&config.log.level)?.format(detailed_format);

    let handle = match &target {
        LogTarget::Stderr => logger.log_to_stderr().start()?,
        LogTarget::File { dir, basename } => logger
            .log_to_file(FileSpec::default().basename(basename).directory(dir))
            .rotate(
                Criterion::Size(config.log.max_file_size),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.log.max_files),
            )
            .write_mode(WriteMode::Async)
            .append()
            .start()?,
    };

    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    log::info!("日志系统初始化完成: {:?} (级别 {})", target, config.log.level);
    Ok(())
}

/// 刷新并关闭日志系统，阻塞直到异步日志线程写完当前内容
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
