//! 参数描述符元素

use crate::context::ResolutionContext;
use crate::value::ParameterValueElement;
use container_abstractions::InjectionValue;
use container_common::{ConfigResult, TypeRef};
use serde::{Deserialize, Serialize};

/// 构造函数或方法的单个参数配置
///
/// 集合中的书写顺序即位置匹配顺序; `name` 仅用于错误报告与可读性,
/// 不参与匹配; `type` 是可选的重载消歧提示, 给定时要求与形式参数
/// 类型完全相等
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterElement {
    /// 参数名称
    #[serde(default)]
    pub name: Option<String>,
    /// 显式类型提示
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    /// 参数值; 缺省时由容器解析形式参数类型
    #[serde(default)]
    pub value: ParameterValueElement,
}

impl ParameterElement {
    /// 创建仅携带值的参数元素
    pub fn with_value(value: ParameterValueElement) -> Self {
        Self {
            name: None,
            type_name: None,
            value,
        }
    }

    /// 创建命名参数元素
    pub fn named(name: impl Into<String>, value: ParameterValueElement) -> Self {
        Self {
            name: Some(name.into()),
            type_name: None,
            value,
        }
    }

    /// 判断该参数能否绑定到给定的形式参数类型
    pub fn matches(&self, formal: &TypeRef, ctx: &ResolutionContext<'_>) -> bool {
        if let Some(declared) = &self.type_name {
            return match ctx.try_resolve_type(declared) {
                Some(resolved) => resolved == *formal,
                None => false,
            };
        }
        self.value.matches(formal, ctx)
    }

    /// 将该参数解析为注入值
    ///
    /// 显式类型提示存在时, 值按提示类型解析而非形式参数类型
    pub fn resolve(
        &self,
        ctx: &ResolutionContext<'_>,
        formal: &TypeRef,
    ) -> ConfigResult<InjectionValue> {
        match &self.type_name {
            Some(declared) => {
                let target = ctx.resolve_type(declared)?;
                self.value.resolve(ctx, &target)
            }
            None => self.value.resolve(ctx, formal),
        }
    }

    /// 用于错误报告的参数显示名称
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| "<unnamed>".to_string())
    }
}

/// 提取参数集合中的全部显示名称
pub fn parameter_names(parameters: &[ParameterElement]) -> Vec<String> {
    parameters.iter().map(ParameterElement::display_name).collect()
}
