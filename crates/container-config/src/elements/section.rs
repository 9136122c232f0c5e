//! 配置节元素

use crate::context::{AliasTable, ResolutionContext};
use crate::elements::container::ContainerElement;
use container_abstractions::ContainerRegistry;
use container_common::{ConfigError, ConfigResult, TypeRegistry, ValueConverterRegistry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 别名配置元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasElement {
    /// 别名
    pub alias: String,
    /// 目标类型名称
    #[serde(rename = "type")]
    pub type_name: String,
}

/// 容器配置节
///
/// 一个配置文件的根元素: 别名表、命名空间前缀与一个或多个容器,
/// 容器保持文件书写顺序
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainersSection {
    /// 别名配置（文件顺序, 后写入者覆盖先写入者）
    #[serde(default)]
    pub aliases: Vec<AliasElement>,
    /// 命名空间前缀（短类型名查找时依次限定）
    #[serde(default)]
    pub namespaces: Vec<String>,
    /// 容器配置列表（文件顺序）
    #[serde(default)]
    pub containers: Vec<ContainerElement>,
}

impl ContainersSection {
    /// 构建别名表（内置别名 + 配置别名）
    pub fn alias_table(&self) -> AliasTable {
        let mut table = AliasTable::new();
        for alias in &self.aliases {
            table.add(alias.alias.clone(), alias.type_name.clone());
        }
        table
    }

    /// 按名称查找容器元素; 空名称返回默认容器
    pub fn container(&self, name: &str) -> Option<&ContainerElement> {
        if name.is_empty() {
            return self.default_container();
        }
        self.containers.iter().find(|c| c.name == name)
    }

    /// 默认容器: 首个未命名容器, 若全部具名则取首个
    pub fn default_container(&self) -> Option<&ContainerElement> {
        self.containers
            .iter()
            .find(|c| c.name.is_empty())
            .or_else(|| self.containers.first())
    }

    /// 将默认容器的配置应用到注册表
    pub fn configure(
        &self,
        registry: &mut dyn ContainerRegistry,
        types: &TypeRegistry,
        converters: &ValueConverterRegistry,
    ) -> ConfigResult<()> {
        self.configure_named(registry, types, converters, "")
    }

    /// 将指定名称容器的配置应用到注册表
    pub fn configure_named(
        &self,
        registry: &mut dyn ContainerRegistry,
        types: &TypeRegistry,
        converters: &ValueConverterRegistry,
        name: &str,
    ) -> ConfigResult<()> {
        debug!("查找容器配置: {:?}", name);
        let container = self
            .container(name)
            .ok_or_else(|| ConfigError::ContainerNotFound {
                name: name.to_string(),
            })?;

        let aliases = self.alias_table();
        let ctx = ResolutionContext::new(types, converters, &aliases, &self.namespaces);
        container.configure(registry, &ctx)
    }
}
