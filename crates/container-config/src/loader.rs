//! 配置文件加载
//!
//! 将 TOML / JSON 注册文件反序列化为配置节

use crate::elements::ContainersSection;
use container_common::{ConfigError, ConfigResult};
use std::path::Path;
use tracing::debug;

/// 配置节加载器
#[derive(Debug, Default)]
pub struct SectionLoader;

impl SectionLoader {
    /// 从文件加载配置节, 按扩展名选择格式
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<ContainersSection> {
        let path = path.as_ref();
        debug!("加载注册配置文件: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::FileReadError { source })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// 从 TOML 文本加载配置节
    pub fn from_toml_str(content: &str) -> ConfigResult<ContainersSection> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })
    }

    /// 从 JSON 文本加载配置节
    pub fn from_json_str(content: &str) -> ConfigResult<ContainersSection> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })
    }
}
