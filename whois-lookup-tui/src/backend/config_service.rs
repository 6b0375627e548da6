//! 配置服务
//!
//! 配置文件为可选的 JSON：`<config dir>/whois-lookup/config.json`。
//! 只读不写；缺失或格式错误时使用默认配置。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use whois_lookup_core::LookupConfig;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    /// 查询端点配置（与顶层字段平铺）
    #[serde(flatten)]
    pub lookup: LookupConfig,
}

impl AppConfig {
    /// 解析语言代码，未知代码回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
            lookup: LookupConfig::default(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 获取默认配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("whois-lookup")
        .join("config.json")
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("配置文件不存在，使用默认配置: {}", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("配置文件格式错误，使用默认配置 ({}): {e}", self.path.display());
                Ok(AppConfig::default())
            }
        }
    }
}
