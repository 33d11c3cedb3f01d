//! 条件引擎领域模型

use serde::{Deserialize, Serialize};

use crate::error::{CriteriaError, Result};
use crate::operators::{GroupMatch, MatchOperator};

/// 单条条件定义
///
/// 每次评估都从定义文本新建一个实例，解析后不可变，评估结束即丢弃。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaDefinition {
    /// 要取值的键（Cookie 名、请求头名或合成键）
    pub key: String,
    #[serde(rename = "match")]
    pub match_operator: MatchOperator,
    /// 匹配目标，语义取决于操作符，缺省为空串
    #[serde(default)]
    pub value: String,
}

impl CriteriaDefinition {
    pub fn new(
        key: impl Into<String>,
        match_operator: MatchOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            match_operator,
            value: value.into(),
        }
    }

    /// 从 JSON 定义文本解析
    ///
    /// 空文本是调用方错误（EmptyDefinition）；JSON 结构不符、
    /// 操作符名不认识、key 缺失或为空都归为 MalformedDefinition。
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(CriteriaError::EmptyDefinition);
        }

        let definition: Self = serde_json::from_str(text)
            .map_err(|e| CriteriaError::MalformedDefinition(e.to_string()))?;

        if definition.key.is_empty() {
            return Err(CriteriaError::MalformedDefinition(
                "条件的 key 不能为空".to_string(),
            ));
        }

        Ok(definition)
    }
}

/// 分组中的一条条件
///
/// alias 指向注册表中的条件类型，definition 是内嵌的条件定义 JSON 文本。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCriterion {
    pub alias: String,
    #[serde(default)]
    pub definition: String,
}

impl GroupCriterion {
    pub fn new(alias: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            definition: definition.into(),
        }
    }
}

/// 个性化分组定义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDefinition {
    #[serde(rename = "match")]
    pub match_policy: GroupMatch,
    #[serde(default)]
    pub details: Vec<GroupCriterion>,
}

impl GroupDefinition {
    pub fn new(match_policy: GroupMatch, details: Vec<GroupCriterion>) -> Self {
        Self {
            match_policy,
            details,
        }
    }

    pub fn all(details: Vec<GroupCriterion>) -> Self {
        Self::new(GroupMatch::All, details)
    }

    pub fn any(details: Vec<GroupCriterion>) -> Self {
        Self::new(GroupMatch::Any, details)
    }

    /// 从 JSON 分组定义文本解析
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(CriteriaError::EmptyDefinition);
        }

        serde_json::from_str(text).map_err(|e| CriteriaError::MalformedDefinition(e.to_string()))
    }
}
