//! 请求头值提供者

use std::collections::HashMap;

use super::ValueProvider;

/// 请求头值提供者
///
/// HTTP 头名不区分大小写，写入和查询统一转为小写。
#[derive(Debug, Clone, Default)]
pub struct HeaderValueProvider {
    headers: HashMap<String, String>,
}

impl HeaderValueProvider {
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
            headers: pairs
                .into_iter()
                .map(|(name, value)| (name.into().to_ascii_lowercase(), value.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
    }
}

impl ValueProvider for HeaderValueProvider {
    fn exists(&self, key: &str) -> bool {
        self.headers.contains_key(&key.to_ascii_lowercase())
    }

    fn get_value(&self, key: &str) -> Option<String> {
        self.headers.get(&key.to_ascii_lowercase()).cloned()
    }
}
