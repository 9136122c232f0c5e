//! 属性注入配置元素

use crate::context::ResolutionContext;
use crate::elements::members::RegistrationRequest;
use crate::value::ParameterValueElement;
use container_abstractions::InjectionMember;
use container_common::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// 属性注入配置元素
///
/// `name` 必填, 必须对应目标类型上的可写属性;
/// 值缺省时由容器按属性类型做缺省解析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyElement {
    /// 属性名称
    pub name: String,
    /// 属性值
    #[serde(default)]
    pub value: ParameterValueElement,
}

impl PropertyElement {
    /// 元素唯一键
    pub fn key(&self) -> String {
        format!("property:{}", self.name)
    }

    /// 产出该元素对应的注入指令集
    pub fn injection_members(
        &self,
        ctx: &ResolutionContext<'_>,
        request: &RegistrationRequest,
    ) -> ConfigResult<Vec<InjectionMember>> {
        let target = ctx.descriptor_of(&request.to)?;

        let property = target
            .find_property(&self.name)
            .filter(|property| property.writable)
            .ok_or_else(|| ConfigError::PropertyNotFound {
                type_name: target.full_name().to_string(),
                property_name: self.name.clone(),
            })?;

        let value = self.value.resolve(ctx, &property.property_type)?;
        Ok(vec![InjectionMember::property(&self.name, value)])
    }
}
