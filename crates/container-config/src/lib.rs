//! # Container Config
//!
//! 声明式容器配置子系统: 将注册文件中的配置元素翻译为
//! 外部 DI 容器可执行的注册指令。
//!
//! ## 主要组件
//!
//! - [`ParameterValueElement`] - 参数值模型（依赖/字面量/数组/泛型参数）
//! - [`ParameterElement`] / [`PropertyElement`] - 参数与属性描述符
//! - [`matcher`] - 成员匹配引擎（位置匹配, 首个命中者胜出）
//! - [`ConstructorElement`] / [`MethodElement`] - 成员解析与指令产出
//! - [`ResolutionContext`] - 类型名称解析（别名、命名空间、数组后缀）
//! - [`ContainersSection`] - 配置节与容器元素
//! - [`SectionLoader`] - TOML / JSON 注册文件加载
//!
//! ## 契约
//!
//! 配置元素一经填充即不可变; 整个解析遍历同步执行, 任何失败立即
//! 中止配置并报告出错的元素与类型; 对同一输入的重复解析产出
//! 结构相等的指令集

pub mod context;
pub mod elements;
pub mod interception;
pub mod loader;
pub mod matcher;
pub mod value;

pub use context::*;
pub use elements::*;
pub use interception::*;
pub use loader::*;
pub use value::*;
