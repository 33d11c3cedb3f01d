//! 个性化条件评估引擎
//!
//! 针对单次访客请求评估声明式的个性化条件，支持：
//! - JSON 条件定义解析
//! - 类型级联比较（日期 -> 数值 -> 字符串）
//! - 多数据来源的访客值提供者（Cookie / 请求头 / 客户端 IP / 当前时间）
//! - 分组级 All/Any 聚合与短路求值

pub mod config;
pub mod error;
pub mod evaluator;
pub mod group;
pub mod models;
pub mod operators;
pub mod providers;

pub use config::PersonalisationConfig;
pub use error::{CriteriaError, Result};
pub use evaluator::{CriteriaEvaluator, VisitorCriteria};
pub use group::GroupEvaluator;
pub use models::{CriteriaDefinition, GroupCriterion, GroupDefinition};
pub use operators::{GroupMatch, MatchOperator};
pub use providers::{
    ClientIpValueProvider, ClockValueProvider, CookieValueProvider, HeaderValueProvider,
    ValueProvider,
};
