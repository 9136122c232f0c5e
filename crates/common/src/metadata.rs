//! 类型元数据定义
//!
//! 提供成员匹配引擎所依赖的显式类型自省模型

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// 类型引用
///
/// 形式参数与配置声明共用的符号化类型表示
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    /// 具名类型（完整路径名）
    Named(String),
    /// 数组类型
    Array(Box<TypeRef>),
    /// 开放泛型注册上的泛型参数
    GenericParameter(String),
}

impl TypeRef {
    /// 创建具名类型引用
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// 创建数组类型引用
    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    /// 创建泛型参数引用
    pub fn generic(name: impl Into<String>) -> Self {
        Self::GenericParameter(name.into())
    }

    /// 获取具名类型的完整名称
    pub fn full_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{}", name),
            Self::Array(element) => write!(f, "{}[]", element),
            Self::GenericParameter(name) => write!(f, "{}", name),
        }
    }
}

/// 形式参数描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// 参数名称
    pub name: String,
    /// 参数类型
    pub param_type: TypeRef,
}

impl ParamDescriptor {
    /// 创建新的参数描述符
    pub fn new(name: impl Into<String>, param_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            param_type,
        }
    }
}

/// 构造函数描述符
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstructorDescriptor {
    /// 形式参数列表（声明顺序）
    pub parameters: Vec<ParamDescriptor>,
}

impl ConstructorDescriptor {
    /// 创建新的构造函数描述符
    pub fn new(parameters: Vec<ParamDescriptor>) -> Self {
        Self { parameters }
    }
}

/// 方法描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// 方法名称
    pub name: String,
    /// 形式参数列表（声明顺序）
    pub parameters: Vec<ParamDescriptor>,
}

impl MethodDescriptor {
    /// 创建新的方法描述符
    pub fn new(name: impl Into<String>, parameters: Vec<ParamDescriptor>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}

/// 属性描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// 属性名称
    pub name: String,
    /// 属性类型
    pub property_type: TypeRef,
    /// 是否可写
    pub writable: bool,
}

impl PropertyDescriptor {
    /// 创建新的可写属性描述符
    pub fn new(name: impl Into<String>, property_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            property_type,
            writable: true,
        }
    }
}

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 完整路径名
    pub full_name: String,
}

impl TypeInfo {
    /// 创建新的类型信息
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }

    /// 获取简短类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        self.full_name.split("::").last().unwrap_or(&self.full_name)
    }
}

/// 类型描述符
///
/// 一个可注册类型的完整自省元数据, 成员列表保持声明顺序,
/// 匹配引擎按此顺序执行首个匹配命中选择
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// 类型信息
    pub type_info: TypeInfo,
    /// 可赋值目标类型集合（实现的 trait、抽象基类等的完整名称）
    pub assignable_to: HashSet<String>,
    /// 构造函数列表（声明顺序）
    pub constructors: Vec<ConstructorDescriptor>,
    /// 方法列表（声明顺序）
    pub methods: Vec<MethodDescriptor>,
    /// 属性列表
    pub properties: Vec<PropertyDescriptor>,
    /// 泛型参数名称列表（开放泛型类型）
    pub generic_parameters: Vec<String>,
}

impl TypeDescriptor {
    /// 创建新的类型描述符
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            type_info: TypeInfo::new(full_name),
            assignable_to: HashSet::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            generic_parameters: Vec::new(),
        }
    }

    /// 添加可赋值目标类型
    pub fn with_assignable_to(mut self, type_name: impl Into<String>) -> Self {
        self.assignable_to.insert(type_name.into());
        self
    }

    /// 添加构造函数
    pub fn with_constructor(mut self, parameters: Vec<ParamDescriptor>) -> Self {
        self.constructors.push(ConstructorDescriptor::new(parameters));
        self
    }

    /// 添加方法
    pub fn with_method(mut self, name: impl Into<String>, parameters: Vec<ParamDescriptor>) -> Self {
        self.methods.push(MethodDescriptor::new(name, parameters));
        self
    }

    /// 添加可写属性
    pub fn with_property(mut self, name: impl Into<String>, property_type: TypeRef) -> Self {
        self.properties.push(PropertyDescriptor::new(name, property_type));
        self
    }

    /// 添加只读属性
    pub fn with_readonly_property(
        mut self,
        name: impl Into<String>,
        property_type: TypeRef,
    ) -> Self {
        let mut property = PropertyDescriptor::new(name, property_type);
        property.writable = false;
        self.properties.push(property);
        self
    }

    /// 添加泛型参数
    pub fn with_generic_parameter(mut self, name: impl Into<String>) -> Self {
        self.generic_parameters.push(name.into());
        self
    }

    /// 获取完整类型名称
    pub fn full_name(&self) -> &str {
        &self.type_info.full_name
    }

    /// 获取简短类型名称
    pub fn short_name(&self) -> &str {
        self.type_info.short_name()
    }

    /// 查找指定名称的属性
    pub fn find_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// 按声明顺序枚举指定名称的方法
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDescriptor> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// 是否为开放泛型类型
    pub fn is_open_generic(&self) -> bool {
        !self.generic_parameters.is_empty()
    }
}
