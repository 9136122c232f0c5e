//! 注入成员配置元素
//!
//! 封闭的成员元素集合与每类成员的唯一键机制

use crate::context::ResolutionContext;
use crate::elements::constructor::ConstructorElement;
use crate::elements::method::MethodElement;
use crate::elements::property::PropertyElement;
use crate::interception::{AddInterfaceElement, InterceptionBehaviorElement, InterceptorElement};
use container_abstractions::InjectionMember;
use container_common::{ConfigError, ConfigResult, TypeRef};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 单条注册的解析请求
///
/// 注入成员元素的唯一入口参数: (源类型, 目标类型, 注册名称)
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRequest {
    /// 注册的源类型
    pub from: TypeRef,
    /// 映射的目标类型（成员解析的对象）
    pub to: TypeRef,
    /// 注册名称
    pub name: Option<String>,
}

/// 注入成员配置元素
///
/// 注册中按书写顺序出现; 每个元素的唯一键
/// (`constructor` / `method:<name>` / `property:<name>` 等)
/// 用于拒绝对同一成员的重复配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InjectionMemberElement {
    /// 构造函数注入
    Constructor(ConstructorElement),
    /// 方法注入
    Method(MethodElement),
    /// 属性注入
    Property(PropertyElement),
    /// 拦截器配置
    Interceptor(InterceptorElement),
    /// 拦截行为配置
    Behavior(InterceptionBehaviorElement),
    /// 附加接口配置
    AddInterface(AddInterfaceElement),
}

impl InjectionMemberElement {
    /// 元素唯一键
    pub fn key(&self) -> String {
        match self {
            Self::Constructor(element) => element.key(),
            Self::Method(element) => element.key(),
            Self::Property(element) => element.key(),
            Self::Interceptor(element) => element.key(),
            Self::Behavior(element) => element.key(),
            Self::AddInterface(element) => element.key(),
        }
    }

    /// 产出该元素对应的注入指令集
    pub fn injection_members(
        &self,
        ctx: &ResolutionContext<'_>,
        request: &RegistrationRequest,
    ) -> ConfigResult<Vec<InjectionMember>> {
        match self {
            Self::Constructor(element) => element.injection_members(ctx, request),
            Self::Method(element) => element.injection_members(ctx, request),
            Self::Property(element) => element.injection_members(ctx, request),
            Self::Interceptor(element) => element.injection_members(ctx, request),
            Self::Behavior(element) => element.injection_members(ctx, request),
            Self::AddInterface(element) => element.injection_members(ctx, request),
        }
    }
}

/// 解析一条注册的全部注入成员
///
/// 先按唯一键拒绝重复配置, 再按书写顺序逐个产出指令
pub fn collect_members(
    members: &[InjectionMemberElement],
    ctx: &ResolutionContext<'_>,
    request: &RegistrationRequest,
) -> ConfigResult<Vec<InjectionMember>> {
    let mut seen = HashSet::new();
    for member in members {
        let key = member.key();
        if !seen.insert(key.clone()) {
            return Err(ConfigError::DuplicateInjectionMember {
                key,
                type_name: request.to.to_string(),
            });
        }
    }

    let mut directives = Vec::new();
    for member in members {
        directives.extend(member.injection_members(ctx, request)?);
    }
    Ok(directives)
}
