//! 配置元素定义
//!
//! 声明式注册文件的对象模型: 参数与属性描述符、注入成员元素、
//! 注册元素、容器元素与配置节

pub mod constructor;
pub mod container;
pub mod members;
pub mod method;
pub mod parameters;
pub mod property;
pub mod registration;
pub mod section;

pub use constructor::*;
pub use container::*;
pub use members::*;
pub use method::*;
pub use parameters::*;
pub use property::*;
pub use registration::*;
pub use section::*;
