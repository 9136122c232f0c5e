//! 注册配置元素

use crate::context::ResolutionContext;
use crate::elements::members::{collect_members, InjectionMemberElement, RegistrationRequest};
use container_abstractions::{InstanceRegistration, TypeRegistration};
use container_common::{ConfigError, ConfigResult, Lifetime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 类型注册配置元素
///
/// `type` 必填; `map_to` 缺省时注册类型自身;
/// 显式映射的目标类型必须可赋值给源类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterElement {
    /// 注册的源类型
    #[serde(rename = "type")]
    pub type_name: String,
    /// 映射的目标类型
    #[serde(default)]
    pub map_to: Option<String>,
    /// 注册名称
    #[serde(default)]
    pub name: Option<String>,
    /// 生命周期
    #[serde(default)]
    pub lifetime: Option<Lifetime>,
    /// 注入成员配置（书写顺序）
    #[serde(default)]
    pub members: Vec<InjectionMemberElement>,
}

impl RegisterElement {
    /// 解析为类型注册记录
    pub fn registration(&self, ctx: &ResolutionContext<'_>) -> ConfigResult<TypeRegistration> {
        debug!(
            "解析注册元素: {} -> {:?} (名称: {:?})",
            self.type_name, self.map_to, self.name
        );

        let from = ctx.resolve_type(&self.type_name)?;
        let to = match &self.map_to {
            Some(map_to) => {
                let to = ctx.resolve_type(map_to)?;
                if !ctx.is_assignable(&to, &from) {
                    return Err(ConfigError::ResolvedTypeNotCompatible {
                        type_name: map_to.clone(),
                        resolved: to.to_string(),
                        required: from.to_string(),
                    });
                }
                to
            }
            None => from.clone(),
        };

        // 开放泛型注册: 目标类型声明的泛型参数对成员解析可见
        let generic_parameters = ctx
            .descriptor_of(&to)
            .map(|descriptor| descriptor.generic_parameters.clone())
            .unwrap_or_default();
        let member_ctx = ResolutionContext::new(ctx.types, ctx.converters, ctx.aliases, ctx.namespaces)
            .with_generic_parameters(&generic_parameters);

        let request = RegistrationRequest {
            from,
            to,
            name: self.name.clone(),
        };
        let members = collect_members(&self.members, &member_ctx, &request)?;

        Ok(TypeRegistration {
            from: request.from,
            to: request.to,
            name: request.name,
            lifetime: self.lifetime.unwrap_or_default(),
            members,
        })
    }
}

/// 实例注册配置元素
///
/// 值在配置阶段即完成转换; `type` 缺省为字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceElement {
    /// 注册名称
    #[serde(default)]
    pub name: Option<String>,
    /// 实例的字面量值
    pub value: String,
    /// 实例类型
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
}

impl InstanceElement {
    /// 解析为实例注册记录
    pub fn registration(&self, ctx: &ResolutionContext<'_>) -> ConfigResult<InstanceRegistration> {
        let type_name = self.type_name.as_deref().unwrap_or("string");
        let instance_type = ctx.resolve_type(type_name)?;
        let converter_key =
            instance_type
                .full_name()
                .ok_or_else(|| ConfigError::TypeConversionError {
                    type_name: instance_type.to_string(),
                    value: self.value.clone(),
                })?;
        let value = ctx.converters.convert(converter_key, &self.value)?;
        Ok(InstanceRegistration {
            instance_type,
            name: self.name.clone(),
            value,
        })
    }
}
