//! 构造函数注入配置元素

use crate::context::ResolutionContext;
use crate::elements::members::RegistrationRequest;
use crate::elements::parameters::{parameter_names, ParameterElement};
use crate::matcher;
use container_abstractions::InjectionMember;
use container_common::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// 构造函数配置元素
///
/// 每条注册最多配置一个; 唯一键固定为 `constructor`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstructorElement {
    /// 构造函数实参配置（书写顺序即位置匹配顺序）
    #[serde(default)]
    pub parameters: Vec<ParameterElement>,
}

impl ConstructorElement {
    /// 元素唯一键
    pub fn key(&self) -> String {
        "constructor".to_string()
    }

    /// 产出该元素对应的注入指令集
    pub fn injection_members(
        &self,
        ctx: &ResolutionContext<'_>,
        request: &RegistrationRequest,
    ) -> ConfigResult<Vec<InjectionMember>> {
        let target = ctx.descriptor_of(&request.to)?;

        let constructor = target
            .constructors
            .iter()
            .find(|candidate| matcher::parameters_match(&self.parameters, &candidate.parameters, ctx))
            .ok_or_else(|| ConfigError::NoMatchingConstructor {
                type_name: target.full_name().to_string(),
                parameter_names: parameter_names(&self.parameters),
            })?;

        let values = self
            .parameters
            .iter()
            .zip(&constructor.parameters)
            .map(|(parameter, formal)| parameter.resolve(ctx, &formal.param_type))
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(vec![InjectionMember::constructor(values)])
    }
}
