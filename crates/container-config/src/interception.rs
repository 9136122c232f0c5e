//! 拦截配置元素
//!
//! 只覆盖拦截扩展的配置面: 拦截器、行为、附加接口与策略。
//! 行为管线的运行时执行属于外部容器, 不在此层

use crate::context::ResolutionContext;
use crate::elements::members::{collect_members, InjectionMemberElement, RegistrationRequest};
use container_abstractions::{InjectionMember, PolicyComponent, PolicyRegistration};
use container_common::{ConfigError, ConfigResult, Lifetime};
use serde::{Deserialize, Serialize};

/// 拦截器配置元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterceptorElement {
    /// 拦截器类型
    #[serde(rename = "type")]
    pub type_name: String,
    /// 是否为目标类型的默认拦截器
    #[serde(default)]
    pub is_default: bool,
}

impl InterceptorElement {
    /// 元素唯一键
    pub fn key(&self) -> String {
        "interceptor".to_string()
    }

    /// 产出该元素对应的注入指令集
    pub fn injection_members(
        &self,
        ctx: &ResolutionContext<'_>,
        _request: &RegistrationRequest,
    ) -> ConfigResult<Vec<InjectionMember>> {
        let interceptor_type = ctx.resolve_type(&self.type_name)?;
        Ok(vec![InjectionMember::Interceptor {
            interceptor_type,
            is_default: self.is_default,
        }])
    }
}

/// 拦截行为配置元素
///
/// `name` 与 `type` 至少给出其一: 仅有 `name` 表示引用已注册的命名行为
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterceptionBehaviorElement {
    /// 命名注册的行为名称
    #[serde(default)]
    pub name: Option<String>,
    /// 行为类型
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
}

impl InterceptionBehaviorElement {
    /// 元素唯一键
    pub fn key(&self) -> String {
        format!(
            "behavior:{}",
            self.type_name
                .as_deref()
                .or(self.name.as_deref())
                .unwrap_or_default()
        )
    }

    /// 产出该元素对应的注入指令集
    pub fn injection_members(
        &self,
        ctx: &ResolutionContext<'_>,
        _request: &RegistrationRequest,
    ) -> ConfigResult<Vec<InjectionMember>> {
        if self.name.is_none() && self.type_name.is_none() {
            return Err(ConfigError::MustHaveAtLeastOneBehaviorAttribute);
        }
        let behavior_type = self
            .type_name
            .as_deref()
            .map(|type_name| ctx.resolve_type(type_name))
            .transpose()?;
        Ok(vec![InjectionMember::Behavior {
            behavior_type,
            name: self.name.clone(),
        }])
    }
}

/// 附加接口配置元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddInterfaceElement {
    /// 接口类型
    #[serde(rename = "type")]
    pub type_name: String,
}

impl AddInterfaceElement {
    /// 元素唯一键
    pub fn key(&self) -> String {
        format!("add-interface:{}", self.type_name)
    }

    /// 产出该元素对应的注入指令集
    pub fn injection_members(
        &self,
        ctx: &ResolutionContext<'_>,
        _request: &RegistrationRequest,
    ) -> ConfigResult<Vec<InjectionMember>> {
        let interface_type = ctx.resolve_type(&self.type_name)?;
        Ok(vec![InjectionMember::AdditionalInterface { interface_type }])
    }
}

/// 策略组成部分配置元素（匹配规则或调用处理器）
///
/// 没有 `type` 的元素是对已有命名注册的引用,
/// 因此既不允许携带注入成员也不允许声明生命周期
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyChildElement {
    /// 组成部分名称
    pub name: String,
    /// 组成部分类型
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    /// 生命周期
    #[serde(default)]
    pub lifetime: Option<Lifetime>,
    /// 注入成员配置
    #[serde(default)]
    pub members: Vec<InjectionMemberElement>,
}

impl PolicyChildElement {
    /// 解析为策略组成部分记录
    pub fn component(&self, ctx: &ResolutionContext<'_>) -> ConfigResult<PolicyComponent> {
        let Some(type_name) = &self.type_name else {
            if !self.members.is_empty() {
                return Err(ConfigError::CannotHaveInjectionWithoutTypeName {
                    element_name: self.name.clone(),
                });
            }
            if self.lifetime.is_some() {
                return Err(ConfigError::CannotHaveLifetimeWithoutTypeName {
                    element_name: self.name.clone(),
                });
            }
            return Ok(PolicyComponent {
                name: self.name.clone(),
                component_type: None,
                lifetime: None,
                members: Vec::new(),
            });
        };

        let component_type = ctx.resolve_type(type_name)?;
        let request = RegistrationRequest {
            from: component_type.clone(),
            to: component_type.clone(),
            name: Some(self.name.clone()),
        };
        let members = collect_members(&self.members, ctx, &request)?;
        Ok(PolicyComponent {
            name: self.name.clone(),
            component_type: Some(component_type),
            lifetime: self.lifetime,
            members,
        })
    }
}

/// 拦截策略配置元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyElement {
    /// 策略名称
    pub name: String,
    /// 匹配规则配置
    #[serde(default)]
    pub matching_rules: Vec<PolicyChildElement>,
    /// 调用处理器配置
    #[serde(default)]
    pub call_handlers: Vec<PolicyChildElement>,
}

impl PolicyElement {
    /// 解析为策略注册记录
    pub fn registration(&self, ctx: &ResolutionContext<'_>) -> ConfigResult<PolicyRegistration> {
        let matching_rules = self
            .matching_rules
            .iter()
            .map(|rule| rule.component(ctx))
            .collect::<ConfigResult<Vec<_>>>()?;
        let call_handlers = self
            .call_handlers
            .iter()
            .map(|handler| handler.component(ctx))
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(PolicyRegistration {
            name: self.name.clone(),
            matching_rules,
            call_handlers,
        })
    }
}
