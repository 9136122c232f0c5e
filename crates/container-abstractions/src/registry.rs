//! 容器注册 API 抽象
//!
//! 配置子系统面向的注册接口: 接收注册记录, 不负责解析与构造

use crate::directives::InjectionMember;
use container_common::{ConvertedValue, DependencyResult, Lifetime, TypeRef};
use serde::Serialize;
use tracing::info;

/// 类型注册记录
///
/// 以 (from, to, name) 为唯一键
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeRegistration {
    /// 注册的源类型（请求方看到的类型）
    pub from: TypeRef,
    /// 映射的目标类型（实际构造的类型）
    pub to: TypeRef,
    /// 注册名称
    pub name: Option<String>,
    /// 生命周期
    pub lifetime: Lifetime,
    /// 注入成员指令集
    pub members: Vec<InjectionMember>,
}

/// 实例注册记录
///
/// 配置阶段已完成转换的命名值
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceRegistration {
    /// 实例类型
    pub instance_type: TypeRef,
    /// 注册名称
    pub name: Option<String>,
    /// 已转换的实例值
    pub value: ConvertedValue,
}

/// 策略组成部分（匹配规则或调用处理器）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyComponent {
    /// 组成部分名称
    pub name: String,
    /// 组成部分类型; 为空表示引用已有的命名注册
    pub component_type: Option<TypeRef>,
    /// 生命周期（仅对携带类型的组成部分有意义）
    pub lifetime: Option<Lifetime>,
    /// 注入成员指令集
    pub members: Vec<InjectionMember>,
}

/// 拦截策略注册记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyRegistration {
    /// 策略名称
    pub name: String,
    /// 匹配规则列表
    pub matching_rules: Vec<PolicyComponent>,
    /// 调用处理器列表
    pub call_handlers: Vec<PolicyComponent>,
}

/// 容器注册表 trait
///
/// 由外部 DI 容器实现; 配置子系统只产生注册记录, 不产生其他副作用
pub trait ContainerRegistry: Send + Sync {
    /// 注册类型映射及其注入成员
    fn register_type(&mut self, registration: TypeRegistration) -> DependencyResult<()>;

    /// 注册已转换的实例值
    fn register_instance(&mut self, registration: InstanceRegistration) -> DependencyResult<()>;

    /// 注册拦截策略
    fn register_policy(&mut self, registration: PolicyRegistration) -> DependencyResult<()>;
}

/// 内存注册表实现
///
/// 按接收顺序记录注册, 供真实容器接管前查询与验证
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    type_registrations: Vec<TypeRegistration>,
    instance_registrations: Vec<InstanceRegistration>,
    policy_registrations: Vec<PolicyRegistration>,
}

impl InMemoryRegistry {
    /// 创建新的内存注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取所有类型注册记录
    pub fn type_registrations(&self) -> &[TypeRegistration] {
        &self.type_registrations
    }

    /// 获取所有实例注册记录
    pub fn instance_registrations(&self) -> &[InstanceRegistration] {
        &self.instance_registrations
    }

    /// 获取所有策略注册记录
    pub fn policy_registrations(&self) -> &[PolicyRegistration] {
        &self.policy_registrations
    }

    /// 检查指定源类型是否已注册
    pub fn is_registered(&self, from: &TypeRef) -> bool {
        self.type_registrations.iter().any(|r| &r.from == from)
    }

    /// 按 (from, name) 查找注册记录
    pub fn find_registration(
        &self,
        from: &TypeRef,
        name: Option<&str>,
    ) -> Option<&TypeRegistration> {
        self.type_registrations
            .iter()
            .find(|r| &r.from == from && r.name.as_deref() == name)
    }
}

impl ContainerRegistry for InMemoryRegistry {
    fn register_type(&mut self, registration: TypeRegistration) -> DependencyResult<()> {
        info!(
            "注册类型映射: {} -> {} (名称: {:?}, 生命周期: {})",
            registration.from, registration.to, registration.name, registration.lifetime
        );
        // 同键的重复注册覆盖旧记录, 保持首次出现的位置
        let existing = self.type_registrations.iter().position(|existing| {
            existing.from == registration.from
                && existing.to == registration.to
                && existing.name == registration.name
        });
        match existing {
            Some(index) => self.type_registrations[index] = registration,
            None => self.type_registrations.push(registration),
        }
        Ok(())
    }

    fn register_instance(&mut self, registration: InstanceRegistration) -> DependencyResult<()> {
        info!(
            "注册实例: {} (名称: {:?})",
            registration.instance_type, registration.name
        );
        self.instance_registrations.push(registration);
        Ok(())
    }

    fn register_policy(&mut self, registration: PolicyRegistration) -> DependencyResult<()> {
        info!("注册拦截策略: {}", registration.name);
        self.policy_registrations.push(registration);
        Ok(())
    }
}
