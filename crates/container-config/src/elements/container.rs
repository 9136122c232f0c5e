//! 容器配置元素

use crate::context::ResolutionContext;
use crate::elements::registration::{InstanceElement, RegisterElement};
use crate::interception::PolicyElement;
use container_abstractions::ContainerRegistry;
use container_common::ConfigResult;
use serde::{Deserialize, Serialize};
use tracing::info;

/// 单个容器的配置元素
///
/// 名称为空的容器是默认容器; 注册按书写顺序应用
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerElement {
    /// 容器名称
    #[serde(default)]
    pub name: String,
    /// 类型注册配置
    #[serde(default)]
    pub registrations: Vec<RegisterElement>,
    /// 实例注册配置
    #[serde(default)]
    pub instances: Vec<InstanceElement>,
    /// 拦截策略配置
    #[serde(default)]
    pub policies: Vec<PolicyElement>,
}

impl ContainerElement {
    /// 将该容器的全部配置应用到注册表
    ///
    /// 首个失败立即中止整个配置遍历
    pub fn configure(
        &self,
        registry: &mut dyn ContainerRegistry,
        ctx: &ResolutionContext<'_>,
    ) -> ConfigResult<()> {
        info!(
            "应用容器配置: {:?} ({} 条注册, {} 个实例, {} 条策略)",
            self.name,
            self.registrations.len(),
            self.instances.len(),
            self.policies.len()
        );

        for instance in &self.instances {
            registry.register_instance(instance.registration(ctx)?)?;
        }
        for registration in &self.registrations {
            registry.register_type(registration.registration(ctx)?)?;
        }
        for policy in &self.policies {
            registry.register_policy(policy.registration(ctx)?)?;
        }
        Ok(())
    }
}
