//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
///
/// 配置阶段的所有失败都在单次注册遍历中立即抛出，不存在部分成功或重试
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("不支持的配置文件格式: {path}")]
    UnsupportedFormat { path: String },

    #[error("类型名称或别名无法解析: {type_name}")]
    CouldNotResolveType { type_name: String },

    #[error("类型名称 {type_name} 解析为 {resolved}, 与要求的类型 {required} 不兼容")]
    ResolvedTypeNotCompatible {
        type_name: String,
        resolved: String,
        required: String,
    },

    #[error("类型 {type_name} 上没有与配置参数 {parameter_names:?} 匹配的构造函数")]
    NoMatchingConstructor {
        type_name: String,
        parameter_names: Vec<String>,
    },

    #[error("类型 {type_name} 上没有与配置参数 {parameter_names:?} 匹配的方法 {method_name}")]
    NoMatchingMethod {
        type_name: String,
        method_name: String,
        parameter_names: Vec<String>,
    },

    #[error("类型 {type_name} 上不存在可写属性: {property_name}")]
    PropertyNotFound {
        type_name: String,
        property_name: String,
    },

    #[error("字面量 {value:?} 无法转换为类型 {type_name}")]
    TypeConversionError { type_name: String, value: String },

    #[error("拦截行为元素必须至少包含 name 或 type 属性之一")]
    MustHaveAtLeastOneBehaviorAttribute,

    #[error("元素 {element_name} 没有 type 属性, 不允许配置注入成员")]
    CannotHaveInjectionWithoutTypeName { element_name: String },

    #[error("元素 {element_name} 没有 type 属性, 不允许配置生命周期")]
    CannotHaveLifetimeWithoutTypeName { element_name: String },

    #[error("注入成员重复配置: {key}, 目标类型: {type_name}")]
    DuplicateInjectionMember { key: String, type_name: String },

    #[error("配置中不存在名为 {name:?} 的容器")]
    ContainerNotFound { name: String },

    #[error("容器注册失败: {source}")]
    RegistrationFailed {
        #[from]
        source: DependencyError,
    },
}

/// 依赖注入错误类型
///
/// 由外部容器的注册 API 返回
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件注册失败: {type_name}, 原因: {message}")]
    RegistrationError { type_name: String, message: String },

    #[error("组件未注册: {type_name}")]
    ComponentNotRegistered { type_name: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
