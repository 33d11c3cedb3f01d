//! 条件引擎错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("条件定义不能为空")]
    EmptyDefinition,

    #[error("条件定义格式无效: {0}")]
    MalformedDefinition(String),

    #[error("无效的正则表达式 '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("未注册的条件类型: {0}")]
    UnknownCriteria(String),
}

pub type Result<T> = std::result::Result<T, CriteriaError>;
