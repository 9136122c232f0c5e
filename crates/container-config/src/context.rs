//! 解析上下文与类型名称解析
//!
//! 类型名称解析是 (名称字符串, 别名表, 命名空间前缀) 的纯函数,
//! 除别名表本身外不引入任何缓存

use container_common::{
    ConfigError, ConfigResult, TypeDescriptor, TypeRef, TypeRegistry, ValueConverterRegistry,
};
use std::collections::HashMap;
use std::sync::Arc;

/// 内置类型别名
///
/// 配置中可直接使用的简写, 始终可用, 可被配置中的显式别名覆盖
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("string", "String"),
    ("sbyte", "i8"),
    ("short", "i16"),
    ("int", "i32"),
    ("long", "i64"),
    ("byte", "u8"),
    ("ushort", "u16"),
    ("uint", "u32"),
    ("ulong", "u64"),
    ("float", "f32"),
    ("double", "f64"),
];

/// 别名表
///
/// 别名到类型名称的映射, 由配置节的别名元素填充
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// 创建预置内置别名的别名表
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for (alias, target) in BUILTIN_ALIASES {
            entries.insert((*alias).to_string(), (*target).to_string());
        }
        Self { entries }
    }

    /// 添加别名; 同名别名后写入者生效
    pub fn add(&mut self, alias: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(alias.into(), target.into());
    }

    /// 查找别名对应的目标类型名称
    pub fn target(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}

/// 解析上下文
///
/// 单次注册遍历期间借用的只读环境:
/// 类型注册表、转换器、别名表、命名空间前缀与当前注册的泛型参数
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    /// 类型注册表
    pub types: &'a TypeRegistry,
    /// 值转换器注册表
    pub converters: &'a ValueConverterRegistry,
    /// 别名表
    pub aliases: &'a AliasTable,
    /// 命名空间前缀（短名称查找时依次限定）
    pub namespaces: &'a [String],
    /// 当前注册目标类型的泛型参数名称
    pub generic_parameters: &'a [String],
}

impl<'a> ResolutionContext<'a> {
    /// 创建新的解析上下文
    pub fn new(
        types: &'a TypeRegistry,
        converters: &'a ValueConverterRegistry,
        aliases: &'a AliasTable,
        namespaces: &'a [String],
    ) -> Self {
        Self {
            types,
            converters,
            aliases,
            namespaces,
            generic_parameters: &[],
        }
    }

    /// 绑定当前注册的泛型参数
    pub fn with_generic_parameters(mut self, generic_parameters: &'a [String]) -> Self {
        self.generic_parameters = generic_parameters;
        self
    }

    /// 解析类型名称为类型引用
    ///
    /// 处理顺序: 数组后缀剥离 → 泛型参数识别 → 别名替换 →
    /// 注册表查找（完整名称、命名空间限定名、唯一短名称）
    pub fn resolve_type(&self, name: &str) -> ConfigResult<TypeRef> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::CouldNotResolveType {
                type_name: name.to_string(),
            });
        }

        if let Some(inner) = trimmed.strip_suffix("[]") {
            return Ok(TypeRef::array(self.resolve_type(inner)?));
        }

        if self.generic_parameters.iter().any(|p| p == trimmed) {
            return Ok(TypeRef::generic(trimmed));
        }

        let target = self.aliases.target(trimmed).unwrap_or(trimmed);
        if target != trimmed {
            if let Some(inner) = target.strip_suffix("[]") {
                return Ok(TypeRef::array(self.resolve_type(inner)?));
            }
        }

        self.types
            .find(target, self.namespaces)
            .map(|descriptor| TypeRef::named(descriptor.full_name()))
            .ok_or_else(|| ConfigError::CouldNotResolveType {
                type_name: name.to_string(),
            })
    }

    /// 尝试解析类型名称; 匹配判定路径使用, 失败返回 `None` 而非错误
    pub fn try_resolve_type(&self, name: &str) -> Option<TypeRef> {
        self.resolve_type(name).ok()
    }

    /// 获取具名类型引用的描述符
    pub fn descriptor_of(&self, type_ref: &TypeRef) -> ConfigResult<Arc<TypeDescriptor>> {
        match type_ref {
            TypeRef::Named(full_name) => {
                self.types
                    .get(full_name)
                    .ok_or_else(|| ConfigError::CouldNotResolveType {
                        type_name: full_name.clone(),
                    })
            }
            other => Err(ConfigError::CouldNotResolveType {
                type_name: other.to_string(),
            }),
        }
    }

    /// 判断可赋值关系
    pub fn is_assignable(&self, from: &TypeRef, to: &TypeRef) -> bool {
        self.types.is_assignable(from, to)
    }
}
