//! 集成测试共享工具模块
//!
//! 提供测试数据和提供者替身，供所有集成测试使用

#![allow(dead_code)]

pub mod data_fixtures;

use fmdata_relation::{CommunicationProvider, TransportError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 记录调用情况的通信提供者替身
pub struct RecordingProvider {
    pub html_encoding: bool,
    pub fail_with: Option<String>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            html_encoding: false,
            fail_with: None,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn encoding() -> Arc<Self> {
        Arc::new(Self {
            html_encoding: true,
            fail_with: None,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            html_encoding: false,
            fail_with: Some(message.to_string()),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().map(|urls| urls.clone()).unwrap_or_default()
    }
}

impl CommunicationProvider for RecordingProvider {
    fn field_html_encoding(&self) -> bool {
        self.html_encoding
    }

    fn access_to_container(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut urls) = self.urls.lock() {
            urls.push(url.to_string());
        }
        match &self.fail_with {
            Some(message) => Err(TransportError::new(message.clone())),
            None => Ok(url.as_bytes().to_vec()),
        }
    }
}
