//! 分组聚合器
//!
//! 按别名把分组里的每条条件分发给注册的条件类型逐条评估，
//! 再按 All/Any 策略合并结果，短路求值。

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CriteriaError, Result};
use crate::evaluator::VisitorCriteria;
use crate::models::{GroupCriterion, GroupDefinition};
use crate::operators::GroupMatch;

/// 分组评估器
///
/// 注册表把条件别名映射到对应的条件实现，一个请求作用域
/// 内通常为每种数据来源各注册一个评估器。
pub struct GroupEvaluator {
    criteria: HashMap<String, Box<dyn VisitorCriteria>>,
}

impl GroupEvaluator {
    pub fn new() -> Self {
        Self {
            criteria: HashMap::new(),
        }
    }

    /// 注册一种条件类型（同名别名覆盖）
    pub fn register(&mut self, alias: impl Into<String>, criteria: Box<dyn VisitorCriteria>) {
        self.criteria.insert(alias.into(), criteria);
    }

    pub fn with_criteria(
        mut self,
        alias: impl Into<String>,
        criteria: Box<dyn VisitorCriteria>,
    ) -> Self {
        self.register(alias, criteria);
        self
    }

    /// 评估整个分组定义
    ///
    /// All 遇 false 短路，Any 遇 true 短路。空分组下 All 为 true、
    /// Any 为 false。任一条件评估失败视为配置错误，立即向上传播。
    pub fn matches_group(&self, group: &GroupDefinition) -> Result<bool> {
        match group.match_policy {
            GroupMatch::All => {
                for detail in &group.details {
                    if !self.matches_detail(detail)? {
                        debug!("分组 All 短路: 条件 {} 不匹配", detail.alias);
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            GroupMatch::Any => {
                for detail in &group.details {
                    if self.matches_detail(detail)? {
                        debug!("分组 Any 短路: 条件 {} 匹配", detail.alias);
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    fn matches_detail(&self, detail: &GroupCriterion) -> Result<bool> {
        let criteria = self
            .criteria
            .get(&detail.alias)
            .ok_or_else(|| CriteriaError::UnknownCriteria(detail.alias.clone()))?;

        criteria.matches_visitor(&detail.definition)
    }
}

impl Default for GroupEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::CriteriaEvaluator;
    use crate::providers::CookieValueProvider;

    /// 固定返回值的条件桩
    struct FixedCriteria(bool);

    impl VisitorCriteria for FixedCriteria {
        fn matches_visitor(&self, _definition: &str) -> Result<bool> {
            Ok(self.0)
        }
    }

    /// 一旦被评估就报错的条件桩，用于验证短路
    struct UnreachableCriteria;

    impl VisitorCriteria for UnreachableCriteria {
        fn matches_visitor(&self, _definition: &str) -> Result<bool> {
            panic!("短路后不应评估到该条件");
        }
    }

    fn detail(alias: &str) -> GroupCriterion {
        GroupCriterion::new(alias, r#"{ "key": "unused", "match": "Exists", "value": "" }"#)
    }

    #[test]
    fn test_all_policy() {
        let evaluator = GroupEvaluator::new()
            .with_criteria("yes", Box::new(FixedCriteria(true)))
            .with_criteria("no", Box::new(FixedCriteria(false)));

        let both = GroupDefinition::all(vec![detail("yes"), detail("yes")]);
        assert!(evaluator.matches_group(&both).unwrap());

        let mixed = GroupDefinition::all(vec![detail("yes"), detail("no")]);
        assert!(!evaluator.matches_group(&mixed).unwrap());
    }

    #[test]
    fn test_any_policy() {
        let evaluator = GroupEvaluator::new()
            .with_criteria("yes", Box::new(FixedCriteria(true)))
            .with_criteria("no", Box::new(FixedCriteria(false)));

        let mixed = GroupDefinition::any(vec![detail("no"), detail("yes")]);
        assert!(evaluator.matches_group(&mixed).unwrap());

        let none = GroupDefinition::any(vec![detail("no"), detail("no")]);
        assert!(!evaluator.matches_group(&none).unwrap());
    }

    #[test]
    fn test_all_short_circuits_on_first_failure() {
        let evaluator = GroupEvaluator::new()
            .with_criteria("no", Box::new(FixedCriteria(false)))
            .with_criteria("boom", Box::new(UnreachableCriteria));

        let group = GroupDefinition::all(vec![detail("no"), detail("boom")]);
        assert!(!evaluator.matches_group(&group).unwrap());
    }

    #[test]
    fn test_any_short_circuits_on_first_match() {
        let evaluator = GroupEvaluator::new()
            .with_criteria("yes", Box::new(FixedCriteria(true)))
            .with_criteria("boom", Box::new(UnreachableCriteria));

        let group = GroupDefinition::any(vec![detail("yes"), detail("boom")]);
        assert!(evaluator.matches_group(&group).unwrap());
    }

    #[test]
    fn test_empty_group() {
        let evaluator = GroupEvaluator::new();

        assert!(evaluator.matches_group(&GroupDefinition::all(vec![])).unwrap());
        assert!(!evaluator.matches_group(&GroupDefinition::any(vec![])).unwrap());
    }

    #[test]
    fn test_unknown_alias() {
        let evaluator = GroupEvaluator::new();
        let group = GroupDefinition::all(vec![detail("nobody-home")]);

        let result = evaluator.matches_group(&group);
        assert!(matches!(result, Err(CriteriaError::UnknownCriteria(alias)) if alias == "nobody-home"));
    }

    #[test]
    fn test_malformed_detail_propagates() {
        let cookies = CookieValueProvider::new();
        let evaluator = GroupEvaluator::new()
            .with_criteria("cookie", Box::new(CriteriaEvaluator::new(cookies)));

        let group = GroupDefinition::all(vec![GroupCriterion::new("cookie", "invalid")]);
        assert!(matches!(
            evaluator.matches_group(&group),
            Err(CriteriaError::MalformedDefinition(_))
        ));
    }
}
