//! 条件评估器
//!
//! 解析条件定义，经由值提供者取得访客侧比较值，按操作符语义求布尔结果。
//! 量级比较走 日期 -> 数值 -> 字符串 的类型级联。

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use tracing::debug;

use crate::error::{CriteriaError, Result};
use crate::models::CriteriaDefinition;
use crate::operators::MatchOperator;
use crate::providers::ValueProvider;

/// 访客条件的统一评估契约
///
/// 分组聚合器通过该契约逐条评估条件，不关心底层数据来源。
pub trait VisitorCriteria: Send + Sync {
    /// 解析条件定义文本并对当前访客求值
    fn matches_visitor(&self, definition: &str) -> Result<bool>;
}

/// 条件评估器
///
/// 持有一个值提供者，对单次请求内的访客数据做无状态的纯求值。
pub struct CriteriaEvaluator<P: ValueProvider> {
    provider: P,
}

impl<P: ValueProvider> CriteriaEvaluator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 评估已解析的条件定义
    pub fn matches(&self, definition: &CriteriaDefinition) -> Result<bool> {
        let matched = match definition.match_operator {
            // 存在性操作符只做 presence 查询，不取值
            MatchOperator::Exists => self.provider.exists(&definition.key),
            MatchOperator::DoesNotExist => !self.provider.exists(&definition.key),
            operator => match self.provider.get_value(&definition.key) {
                Some(comparand) => Self::apply(operator, &comparand, &definition.value)?,
                // 比较值缺失时按操作符各自的缺失策略折算，不是错误
                None => operator.matches_when_absent(),
            },
        };

        debug!(
            "条件评估完成: key={} match={} => {}",
            definition.key, definition.match_operator, matched
        );

        Ok(matched)
    }

    /// 对已取得的比较值应用操作符
    fn apply(operator: MatchOperator, comparand: &str, expected: &str) -> Result<bool> {
        match operator {
            MatchOperator::MatchesValue => Ok(Self::matches_value(comparand, expected)),
            MatchOperator::ContainsValue => Ok(comparand.contains(expected)),
            MatchOperator::MatchesRegex => Self::regex_match(comparand, expected),
            MatchOperator::DoesNotMatchRegex => {
                Self::regex_match(comparand, expected).map(|matched| !matched)
            }
            MatchOperator::GreaterThanValue => {
                Ok(Self::compare(comparand, expected) == Ordering::Greater)
            }
            MatchOperator::LessThanValue => {
                Ok(Self::compare(comparand, expected) == Ordering::Less)
            }
            MatchOperator::Exists | MatchOperator::DoesNotExist => unreachable!(),
        }
    }

    /// 逗号分隔的候选字面量匹配
    ///
    /// 完整的 value 串本身也是候选：定义 "aaa,bbb,ccc" 既接受
    /// 元素 "bbb"，也接受整串 "aaa,bbb,ccc"。元素不做空白裁剪。
    fn matches_value(comparand: &str, expected: &str) -> bool {
        comparand == expected
            || expected
                .split(',')
                .any(|candidate| candidate == comparand)
    }

    fn regex_match(comparand: &str, pattern: &str) -> Result<bool> {
        let regex = Regex::new(pattern).map_err(|e| CriteriaError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;

        Ok(regex.is_match(comparand))
    }

    /// 按 日期 -> 数值 -> 字符串 的顺序比较两侧的值
    ///
    /// 只有两侧在同一层级都解析成功时才采用该层级的比较，
    /// 任一侧失败则整体降到下一层级，最终回退到字节序字符串比较。
    fn compare(comparand: &str, expected: &str) -> Ordering {
        if let (Some(lhs), Some(rhs)) = (parse_date_time(comparand), parse_date_time(expected)) {
            return lhs.cmp(&rhs);
        }

        if let (Ok(lhs), Ok(rhs)) = (comparand.parse::<f64>(), expected.parse::<f64>()) {
            // NaN 没有全序，视同数值层级解析失败
            if let Some(ordering) = lhs.partial_cmp(&rhs) {
                return ordering;
            }
        }

        comparand.cmp(expected)
    }
}

impl<P: ValueProvider> VisitorCriteria for CriteriaEvaluator<P> {
    fn matches_visitor(&self, definition: &str) -> Result<bool> {
        let definition = CriteriaDefinition::from_json(definition)?;
        self.matches(&definition)
    }
}

/// 支持的日期时间格式（按优先级排列）
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

/// 支持的纯日期格式，解析结果取当日零点
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%Y", "%d/%m/%Y"];

fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.naive_utc());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(text, format) {
            return Some(date_time);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}
