//! 注入指令定义
//!
//! 配置子系统的输出: 交由外部容器在构造对象时执行的指令对象。
//! 指令本身不触发任何对象构造

use container_common::{ConvertedValue, TypeRef};
use serde::Serialize;

/// 注入值
///
/// 单个形式参数或属性最终绑定的值。依赖引用是延迟的,
/// 由容器在构造时解析; 字面量在配置阶段即已完成转换
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InjectionValue {
    /// 依赖引用（延迟解析）
    Dependency {
        /// 依赖的目标类型
        dependency_type: TypeRef,
        /// 命名注册的名称
        name: Option<String>,
    },
    /// 可选依赖引用（解析失败时注入缺省值而非报错）
    OptionalDependency {
        /// 依赖的目标类型
        dependency_type: TypeRef,
        /// 命名注册的名称
        name: Option<String>,
    },
    /// 已转换的字面量值（配置阶段急切转换）
    Value {
        /// 值的目标类型
        value_type: TypeRef,
        /// 转换后的值
        value: ConvertedValue,
    },
    /// 数组值
    Array {
        /// 元素类型
        element_type: TypeRef,
        /// 元素值列表（声明顺序）
        items: Vec<InjectionValue>,
    },
    /// 泛型参数占位
    GenericParameter {
        /// 泛型参数名称
        name: String,
    },
}

/// 注入成员指令
///
/// 一条注册包含零个或多个注入成员, 由容器的注册 API 消费
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InjectionMember {
    /// 构造函数注入
    Constructor {
        /// 实参列表（形式参数声明顺序）
        parameters: Vec<InjectionValue>,
    },
    /// 方法注入
    Method {
        /// 方法名称
        name: String,
        /// 实参列表
        parameters: Vec<InjectionValue>,
    },
    /// 属性注入
    Property {
        /// 属性名称
        name: String,
        /// 注入值
        value: InjectionValue,
    },
    /// 拦截器配置
    Interceptor {
        /// 拦截器类型
        interceptor_type: TypeRef,
        /// 是否为该类型的默认拦截器
        is_default: bool,
    },
    /// 拦截行为配置
    Behavior {
        /// 行为类型
        behavior_type: Option<TypeRef>,
        /// 命名注册的行为名称
        name: Option<String>,
    },
    /// 附加接口配置
    AdditionalInterface {
        /// 接口类型
        interface_type: TypeRef,
    },
}

impl InjectionMember {
    /// 创建构造函数注入指令
    pub fn constructor(parameters: Vec<InjectionValue>) -> Self {
        Self::Constructor { parameters }
    }

    /// 创建方法注入指令
    pub fn method(name: impl Into<String>, parameters: Vec<InjectionValue>) -> Self {
        Self::Method {
            name: name.into(),
            parameters,
        }
    }

    /// 创建属性注入指令
    pub fn property(name: impl Into<String>, value: InjectionValue) -> Self {
        Self::Property {
            name: name.into(),
            value,
        }
    }
}
