//! 类型注册表
//!
//! 名称到类型描述符的并发存储, 是成员解析引擎查询自省元数据的唯一入口

use crate::metadata::{TypeDescriptor, TypeRef};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// 内置基础类型名称
///
/// 这些类型始终可解析且可相互独立比较, 无需调用方显式注册
const BUILTIN_TYPES: &[&str] = &[
    "bool", "char", "String", "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64",
];

/// 类型注册表
///
/// 注册发生在应用启动阶段, 解析遍历期间只读
#[derive(Debug)]
pub struct TypeRegistry {
    types: DashMap<String, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    /// 创建新的类型注册表（预置基础类型）
    pub fn new() -> Self {
        let registry = Self {
            types: DashMap::new(),
        };
        for name in BUILTIN_TYPES {
            registry.types.insert(
                (*name).to_string(),
                Arc::new(TypeDescriptor::new(*name)),
            );
        }
        registry
    }

    /// 注册类型描述符
    pub fn register(&self, descriptor: TypeDescriptor) -> Arc<TypeDescriptor> {
        let descriptor = Arc::new(descriptor);
        debug!("注册类型描述符: {}", descriptor.full_name());
        self.types
            .insert(descriptor.full_name().to_string(), descriptor.clone());
        descriptor
    }

    /// 按完整名称查找类型描述符
    pub fn get(&self, full_name: &str) -> Option<Arc<TypeDescriptor>> {
        self.types.get(full_name).map(|entry| entry.value().clone())
    }

    /// 检查类型是否已注册
    pub fn contains(&self, full_name: &str) -> bool {
        self.types.contains_key(full_name)
    }

    /// 查找类型描述符
    ///
    /// 查找顺序: 完整名称 → 各命名空间前缀限定名 → 唯一简短名称。
    /// 简短名称命中多个类型时视为未找到
    pub fn find(&self, name: &str, namespaces: &[String]) -> Option<Arc<TypeDescriptor>> {
        if let Some(descriptor) = self.get(name) {
            return Some(descriptor);
        }

        for namespace in namespaces {
            let qualified = format!("{}::{}", namespace, name);
            if let Some(descriptor) = self.get(&qualified) {
                return Some(descriptor);
            }
        }

        let mut matched = None;
        for entry in self.types.iter() {
            if entry.value().short_name() == name {
                if matched.is_some() {
                    return None;
                }
                matched = Some(entry.value().clone());
            }
        }
        matched
    }

    /// 判断类型引用之间的可赋值关系
    ///
    /// 具名类型: 名称相等, 或 from 的描述符显式声明了到 to 的可赋值关系。
    /// 数组类型: 元素类型相等（不变）。泛型参数: 名称相等
    pub fn is_assignable(&self, from: &TypeRef, to: &TypeRef) -> bool {
        if from == to {
            return true;
        }
        match (from, to) {
            (TypeRef::Named(from_name), TypeRef::Named(to_name)) => self
                .get(from_name)
                .map(|descriptor| descriptor.assignable_to.contains(to_name))
                .unwrap_or(false),
            (TypeRef::Array(from_element), TypeRef::Array(to_element)) => {
                from_element == to_element
            }
            _ => false,
        }
    }

    /// 已注册类型数量（含内置类型）
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
