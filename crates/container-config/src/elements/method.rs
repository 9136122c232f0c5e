//! 方法注入配置元素

use crate::context::ResolutionContext;
use crate::elements::members::RegistrationRequest;
use crate::elements::parameters::{parameter_names, ParameterElement};
use crate::matcher;
use container_abstractions::InjectionMember;
use container_common::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// 方法注入配置元素
///
/// 在目标类型的同名方法中按声明顺序选取首个结构匹配者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodElement {
    /// 方法名称
    pub name: String,
    /// 方法实参配置（书写顺序即位置匹配顺序）
    #[serde(default)]
    pub parameters: Vec<ParameterElement>,
}

impl MethodElement {
    /// 元素唯一键
    pub fn key(&self) -> String {
        format!("method:{}", self.name)
    }

    /// 产出该元素对应的注入指令集
    pub fn injection_members(
        &self,
        ctx: &ResolutionContext<'_>,
        request: &RegistrationRequest,
    ) -> ConfigResult<Vec<InjectionMember>> {
        let target = ctx.descriptor_of(&request.to)?;

        let method = target
            .methods_named(&self.name)
            .find(|candidate| matcher::parameters_match(&self.parameters, &candidate.parameters, ctx))
            .ok_or_else(|| ConfigError::NoMatchingMethod {
                type_name: target.full_name().to_string(),
                method_name: self.name.clone(),
                parameter_names: parameter_names(&self.parameters),
            })?;

        let values = self
            .parameters
            .iter()
            .zip(&method.parameters)
            .map(|(parameter, formal)| parameter.resolve(ctx, &formal.param_type))
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(vec![InjectionMember::method(&self.name, values)])
    }
}
