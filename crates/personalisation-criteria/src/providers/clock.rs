//! 当前时间值提供者

use chrono::{NaiveDateTime, Utc};

use super::ValueProvider;

/// 当前时间的合成键
pub const NOW_KEY: &str = "now";

/// 提供值采用的文本格式，与评估器的日期解析格式之一对应
const NOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 当前时间值提供者
///
/// 以可比较的文本形式提供"当前时间"这一计算事实，供
/// GreaterThanValue / LessThanValue 走日期比较。固定时钟
/// 是测试钩子，与 IP 提供者的固定地址同构。
#[derive(Debug, Clone, Default)]
pub struct ClockValueProvider {
    fixed_now: Option<NaiveDateTime>,
}

impl ClockValueProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixed_now(mut self, now: NaiveDateTime) -> Self {
        self.fixed_now = Some(now);
        self
    }

    fn resolve(&self) -> NaiveDateTime {
        self.fixed_now.unwrap_or_else(|| Utc::now().naive_utc())
    }
}

impl ValueProvider for ClockValueProvider {
    fn exists(&self, _key: &str) -> bool {
        true
    }

    fn get_value(&self, _key: &str) -> Option<String> {
        Some(self.resolve().format(NOW_FORMAT).to_string())
    }
}
