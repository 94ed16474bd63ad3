use crate::utils::error::{DashboardError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 一段由呈現層產生的 HTML 標記
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// 將原始位元組轉為文字；非 UTF-8 內容回傳錯誤
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let text = String::from_utf8(bytes).map_err(DashboardError::FragmentEncodingError)?;
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Fragment {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for Fragment {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl TryFrom<Vec<u8>> for Fragment {
    type Error = DashboardError;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        Self::from_bytes(value)
    }
}

impl TryFrom<&[u8]> for Fragment {
    type Error = DashboardError;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_bytes(value.to_vec())
    }
}

/// 渲染原語的附帶參數，由 session 原封不動轉交給 renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub unsafe_allow_html: bool,
    pub help: Option<String>,
}

impl RenderOptions {
    pub fn html() -> Self {
        Self {
            unsafe_allow_html: true,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// 單次渲染的摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderReport {
    pub output_path: String,
    pub fragments_rendered: usize,
    pub placeholders_substituted: usize,
    pub asset_count: usize,
    pub generated_at: DateTime<Utc>,
}
