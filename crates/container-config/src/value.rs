//! 参数值模型
//!
//! 配置中单个实参的封闭表示, 提供 `matches` / `resolve` 两个能力:
//! `matches` 用于候选成员筛选, 任何失配、转换失败或类型无法解析都
//! 只返回 `false`, 绝不报错; `resolve` 在成员选定后产出注入值

use crate::context::ResolutionContext;
use container_abstractions::InjectionValue;
use container_common::{ConfigError, ConfigResult, TypeRef};
use serde::{Deserialize, Serialize};

/// 参数值元素
///
/// 每个实例恰好是一个变体; 由配置加载机制填充, 此后不可变,
/// 同一注册可被重复应用, 元素可被多次解析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ParameterValueElement {
    /// 依赖引用
    Dependency {
        /// 命名注册的名称
        #[serde(default)]
        name: Option<String>,
        /// 依赖的声明类型; 缺省时使用形式参数类型
        #[serde(default, rename = "type")]
        type_name: Option<String>,
    },
    /// 字面量值
    Value {
        /// 字面量文本
        value: String,
        /// 值的声明类型; 缺省时使用形式参数类型
        #[serde(default, rename = "type")]
        type_name: Option<String>,
    },
    /// 数组值
    Array {
        /// 元素的声明类型; 缺省时使用形式参数的元素类型
        #[serde(default, rename = "type")]
        element_type_name: Option<String>,
        /// 元素值序列（书写顺序即注入顺序）
        #[serde(default)]
        items: Vec<ParameterValueElement>,
    },
    /// 泛型参数占位
    GenericParameter {
        /// 所在开放泛型注册上声明的泛型参数名称
        name: String,
    },
    /// 可选依赖引用
    Optional {
        /// 命名注册的名称
        #[serde(default)]
        name: Option<String>,
        /// 依赖的声明类型; 缺省时使用形式参数类型
        #[serde(default, rename = "type")]
        type_name: Option<String>,
    },
    /// 容器缺省解析
    Default,
}

impl Default for ParameterValueElement {
    fn default() -> Self {
        Self::Default
    }
}

impl ParameterValueElement {
    /// 判断该值能否绑定到给定的形式参数类型
    pub fn matches(&self, formal: &TypeRef, ctx: &ResolutionContext<'_>) -> bool {
        match self {
            Self::Dependency { type_name, .. } | Self::Optional { type_name, .. } => {
                match type_name {
                    Some(declared) => ctx
                        .try_resolve_type(declared)
                        .map(|resolved| ctx.is_assignable(&resolved, formal))
                        .unwrap_or(false),
                    None => true,
                }
            }
            Self::Value { value, type_name } => {
                let target = match type_name {
                    Some(declared) => match ctx.try_resolve_type(declared) {
                        Some(resolved) if ctx.is_assignable(&resolved, formal) => resolved,
                        _ => return false,
                    },
                    None => formal.clone(),
                };
                match target.full_name() {
                    Some(name) => ctx.converters.convert(name, value).is_ok(),
                    None => false,
                }
            }
            Self::Array {
                element_type_name,
                items,
            } => {
                let TypeRef::Array(formal_element) = formal else {
                    return false;
                };
                let element_target = match element_type_name {
                    Some(declared) => match ctx.try_resolve_type(declared) {
                        Some(resolved) if ctx.is_assignable(&resolved, formal_element) => resolved,
                        _ => return false,
                    },
                    None => formal_element.as_ref().clone(),
                };
                items.iter().all(|item| item.matches(&element_target, ctx))
            }
            Self::GenericParameter { name } => {
                matches!(formal, TypeRef::GenericParameter(formal_name) if formal_name == name)
                    && ctx.generic_parameters.iter().any(|p| p == name)
            }
            Self::Default => true,
        }
    }

    /// 将该值解析为注入值
    ///
    /// 依赖引用产出延迟解析的指令, 字面量在此处急切转换
    pub fn resolve(
        &self,
        ctx: &ResolutionContext<'_>,
        formal: &TypeRef,
    ) -> ConfigResult<InjectionValue> {
        match self {
            Self::Dependency { name, type_name } => {
                let dependency_type = self.declared_or_formal(type_name.as_deref(), formal, ctx)?;
                Ok(InjectionValue::Dependency {
                    dependency_type,
                    name: name.clone(),
                })
            }
            Self::Optional { name, type_name } => {
                let dependency_type = self.declared_or_formal(type_name.as_deref(), formal, ctx)?;
                Ok(InjectionValue::OptionalDependency {
                    dependency_type,
                    name: name.clone(),
                })
            }
            Self::Value { value, type_name } => {
                let value_type = self.declared_or_formal(type_name.as_deref(), formal, ctx)?;
                let converter_key = value_type.full_name().ok_or_else(|| {
                    ConfigError::TypeConversionError {
                        type_name: value_type.to_string(),
                        value: value.clone(),
                    }
                })?;
                let converted = ctx.converters.convert(converter_key, value)?;
                Ok(InjectionValue::Value {
                    value_type,
                    value: converted,
                })
            }
            Self::Array {
                element_type_name,
                items,
            } => {
                let TypeRef::Array(formal_element) = formal else {
                    return Err(ConfigError::ResolvedTypeNotCompatible {
                        type_name: "array".to_string(),
                        resolved: "array".to_string(),
                        required: formal.to_string(),
                    });
                };
                let element_type =
                    self.declared_or_formal(element_type_name.as_deref(), formal_element, ctx)?;
                let resolved_items = items
                    .iter()
                    .map(|item| item.resolve(ctx, &element_type))
                    .collect::<ConfigResult<Vec<_>>>()?;
                Ok(InjectionValue::Array {
                    element_type,
                    items: resolved_items,
                })
            }
            Self::GenericParameter { name } => {
                let declared = ctx.generic_parameters.iter().any(|p| p == name);
                let formal_matches =
                    matches!(formal, TypeRef::GenericParameter(formal_name) if formal_name == name);
                if !declared || !formal_matches {
                    return Err(ConfigError::ResolvedTypeNotCompatible {
                        type_name: name.clone(),
                        resolved: name.clone(),
                        required: formal.to_string(),
                    });
                }
                Ok(InjectionValue::GenericParameter { name: name.clone() })
            }
            Self::Default => Ok(InjectionValue::Dependency {
                dependency_type: formal.clone(),
                name: None,
            }),
        }
    }

    /// 解析声明类型并校验与形式类型的兼容性; 未声明时返回形式类型
    fn declared_or_formal(
        &self,
        declared: Option<&str>,
        formal: &TypeRef,
        ctx: &ResolutionContext<'_>,
    ) -> ConfigResult<TypeRef> {
        match declared {
            Some(type_name) => {
                let resolved = ctx.resolve_type(type_name)?;
                if !ctx.is_assignable(&resolved, formal) {
                    return Err(ConfigError::ResolvedTypeNotCompatible {
                        type_name: type_name.to_string(),
                        resolved: resolved.to_string(),
                        required: formal.to_string(),
                    });
                }
                Ok(resolved)
            }
            None => Ok(formal.clone()),
        }
    }
}
