//! 条件操作符定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 匹配操作符
///
/// serde 序列化名与定义文本中的操作符名完全一致（大小写敏感）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOperator {
    // 存在性检查
    Exists,
    DoesNotExist,

    // 字符串匹配
    MatchesValue,
    MatchesRegex,
    DoesNotMatchRegex,
    ContainsValue,

    // 量级比较（日期 -> 数值 -> 字符串级联）
    GreaterThanValue,
    LessThanValue,
}

impl MatchOperator {
    /// 比较值缺失时各操作符的求值结果
    ///
    /// 这是一张显式策略表，不从通用比较失败推导：
    /// DoesNotMatchRegex 在缺失时恒为 true（缺失值平凡地"不匹配"），
    /// 与简单取反不同源。Exists / DoesNotExist 只做存在性查询，
    /// 不会走到这张表。
    pub fn matches_when_absent(self) -> bool {
        match self {
            Self::MatchesValue
            | Self::MatchesRegex
            | Self::ContainsValue
            | Self::GreaterThanValue
            | Self::LessThanValue => false,
            Self::DoesNotMatchRegex => true,
            Self::Exists | Self::DoesNotExist => false,
        }
    }
}

impl fmt::Display for MatchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Exists => "Exists",
            Self::DoesNotExist => "DoesNotExist",
            Self::MatchesValue => "MatchesValue",
            Self::MatchesRegex => "MatchesRegex",
            Self::DoesNotMatchRegex => "DoesNotMatchRegex",
            Self::ContainsValue => "ContainsValue",
            Self::GreaterThanValue => "GreaterThanValue",
            Self::LessThanValue => "LessThanValue",
        };
        write!(f, "{}", s)
    }
}

/// 分组匹配策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupMatch {
    All,
    Any,
}

impl fmt::Display for GroupMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Any => write!(f, "Any"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_wire_names() {
        assert_eq!(
            serde_json::to_string(&MatchOperator::GreaterThanValue).unwrap(),
            "\"GreaterThanValue\""
        );

        let parsed: MatchOperator = serde_json::from_str("\"DoesNotMatchRegex\"").unwrap();
        assert_eq!(parsed, MatchOperator::DoesNotMatchRegex);
    }

    #[test]
    fn test_operator_unknown_name_rejected() {
        let result: Result<MatchOperator, _> = serde_json::from_str("\"matchesvalue\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_absence_policy() {
        assert!(!MatchOperator::MatchesValue.matches_when_absent());
        assert!(!MatchOperator::ContainsValue.matches_when_absent());
        assert!(!MatchOperator::MatchesRegex.matches_when_absent());
        assert!(!MatchOperator::GreaterThanValue.matches_when_absent());
        assert!(!MatchOperator::LessThanValue.matches_when_absent());
        assert!(MatchOperator::DoesNotMatchRegex.matches_when_absent());
    }

    #[test]
    fn test_group_match_wire_names() {
        assert_eq!(serde_json::to_string(&GroupMatch::All).unwrap(), "\"All\"");
        let parsed: GroupMatch = serde_json::from_str("\"Any\"").unwrap();
        assert_eq!(parsed, GroupMatch::Any);
    }
}
