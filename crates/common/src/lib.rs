//! # Container Common
//!
//! 这个 crate 提供了 Rong DI 声明式配置子系统的公共类型。
//!
//! ## 核心组件
//!
//! - [`TypeDescriptor`] / [`TypeRef`] - 显式类型自省模型
//! - [`TypeRegistry`] - 类型名称到描述符的注册表
//! - [`ValueConverterRegistry`] - 与区域设置无关的值转换设施
//! - [`Lifetime`] - 组件生命周期
//! - [`ConfigError`] - 配置阶段错误分类
//!
//! ## 设计原则
//!
//! - 匹配与解析算法独立于元数据的获取方式
//! - 配置元素一经填充即不可变
//! - 失败快速暴露, 不存在部分成功

pub mod convert;
pub mod errors;
pub mod lifetime;
pub mod metadata;
pub mod registry;

pub use convert::*;
pub use errors::*;
pub use lifetime::*;
pub use metadata::*;
pub use registry::*;

/// 全局类型注册表
static GLOBAL_TYPE_REGISTRY: once_cell::sync::Lazy<
    parking_lot::RwLock<Option<std::sync::Arc<TypeRegistry>>>,
> = once_cell::sync::Lazy::new(|| parking_lot::RwLock::new(None));

/// 获取全局类型注册表
pub fn global_type_registry() -> Option<std::sync::Arc<TypeRegistry>> {
    GLOBAL_TYPE_REGISTRY.read().clone()
}

/// 设置全局类型注册表
pub fn set_global_type_registry(registry: std::sync::Arc<TypeRegistry>) {
    *GLOBAL_TYPE_REGISTRY.write() = Some(registry);
}
