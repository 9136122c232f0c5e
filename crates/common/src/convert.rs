//! 值转换设施
//!
//! 提供与区域设置无关的字符串到目标类型的转换, 按类型名称注册转换器

use crate::errors::{ConfigError, ConfigResult};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// 转换后的值
///
/// 字面量经转换器处理后的封闭表示, 注册指令携带此值交给容器
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConvertedValue {
    /// 布尔值
    Bool(bool),
    /// 有符号整数
    Int(i64),
    /// 无符号整数
    UInt(u64),
    /// 浮点数
    Float(f64),
    /// 字符
    Char(char),
    /// 文本
    Text(String),
    /// 结构化值（自定义转换器使用）
    Json(serde_json::Value),
}

/// 值转换器函数类型
pub type ValueConverter = Arc<dyn Fn(&str) -> ConfigResult<ConvertedValue> + Send + Sync>;

/// 值转换器注册表
///
/// 按目标类型的完整名称索引, 内置基础类型转换基于 `FromStr`（与区域设置无关）
pub struct ValueConverterRegistry {
    converters: DashMap<String, ValueConverter>,
}

impl std::fmt::Debug for ValueConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueConverterRegistry")
            .field("converters", &self.converters.len())
            .finish()
    }
}

impl ValueConverterRegistry {
    /// 创建空的转换器注册表
    pub fn new() -> Self {
        Self {
            converters: DashMap::new(),
        }
    }

    /// 创建预置基础类型转换器的注册表
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register_parser("bool", ConvertedValue::Bool);
        registry.register_parser("char", ConvertedValue::Char);
        registry.register_parser("i8", |v: i8| ConvertedValue::Int(i64::from(v)));
        registry.register_parser("i16", |v: i16| ConvertedValue::Int(i64::from(v)));
        registry.register_parser("i32", |v: i32| ConvertedValue::Int(i64::from(v)));
        registry.register_parser("i64", ConvertedValue::Int);
        registry.register_parser("u8", |v: u8| ConvertedValue::UInt(u64::from(v)));
        registry.register_parser("u16", |v: u16| ConvertedValue::UInt(u64::from(v)));
        registry.register_parser("u32", |v: u32| ConvertedValue::UInt(u64::from(v)));
        registry.register_parser("u64", ConvertedValue::UInt);
        registry.register_parser("f32", |v: f32| ConvertedValue::Float(f64::from(v)));
        registry.register_parser("f64", ConvertedValue::Float);
        registry.register("String", Arc::new(|value| Ok(ConvertedValue::Text(value.to_string()))));
        registry
    }

    /// 注册转换器
    pub fn register(&self, type_name: impl Into<String>, converter: ValueConverter) {
        self.converters.insert(type_name.into(), converter);
    }

    /// 注册基于 `FromStr` 的转换器
    pub fn register_parser<T, F>(&self, type_name: &str, wrap: F)
    where
        T: FromStr,
        F: Fn(T) -> ConvertedValue + Send + Sync + 'static,
    {
        let owned_name = type_name.to_string();
        self.register(
            type_name,
            Arc::new(move |value: &str| {
                value
                    .trim()
                    .parse::<T>()
                    .map(&wrap)
                    .map_err(|_| ConfigError::TypeConversionError {
                        type_name: owned_name.clone(),
                        value: value.to_string(),
                    })
            }),
        );
    }

    /// 检查指定类型是否存在已注册的转换器
    pub fn can_convert(&self, type_name: &str) -> bool {
        self.converters.contains_key(type_name)
    }

    /// 将字面量转换为指定类型的值
    pub fn convert(&self, type_name: &str, value: &str) -> ConfigResult<ConvertedValue> {
        let converter = self
            .converters
            .get(type_name)
            .ok_or_else(|| ConfigError::TypeConversionError {
                type_name: type_name.to_string(),
                value: value.to_string(),
            })?;
        converter(value)
    }
}

impl Default for ValueConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
