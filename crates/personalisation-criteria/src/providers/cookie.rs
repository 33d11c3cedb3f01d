//! Cookie 值提供者

use std::collections::HashMap;

use super::ValueProvider;

/// Cookie 值提供者
///
/// 持有单个请求的 Cookie 快照，由 Web 层在请求进入时填充。
#[derive(Debug, Clone, Default)]
pub struct CookieValueProvider {
    cookies: HashMap<String, String>,
}

impl CookieValueProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cookies: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// 写入一条 Cookie（同名覆盖）
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(name.into(), value.into());
    }
}

impl ValueProvider for CookieValueProvider {
    fn exists(&self, key: &str) -> bool {
        self.cookies.contains_key(key)
    }

    fn get_value(&self, key: &str) -> Option<String> {
        self.cookies.get(key).cloned()
    }
}
