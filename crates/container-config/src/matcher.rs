//! 成员匹配引擎
//!
//! 对一组有序参数描述符与一个候选成员的形式参数表做结构兼容判定:
//! 元数先行筛除, 然后按位置逐对判定, 全部命中才算匹配, 不存在部分匹配。
//! 候选裁决规则是按声明顺序首个命中者胜出, 不做任何优先级评分;
//! 这是兼容性契约而非待修复的限制

use crate::context::ResolutionContext;
use crate::elements::ParameterElement;
use container_common::ParamDescriptor;

/// 判断参数描述符集合与形式参数表是否结构匹配
///
/// 位置匹配: 配置书写顺序必须与成员声明顺序一致,
/// 描述符携带的名称不参与判定
pub fn parameters_match(
    parameters: &[ParameterElement],
    formals: &[ParamDescriptor],
    ctx: &ResolutionContext<'_>,
) -> bool {
    if parameters.len() != formals.len() {
        return false;
    }
    parameters
        .iter()
        .zip(formals)
        .all(|(parameter, formal)| parameter.matches(&formal.param_type, ctx))
}
