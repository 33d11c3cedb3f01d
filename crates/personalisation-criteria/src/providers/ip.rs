//! 客户端 IP 值提供者

use crate::config::PersonalisationConfig;

use super::ValueProvider;

/// 客户端 IP 的合成键
pub const CLIENT_IP_KEY: &str = "client-ip";

/// IPv6 回环字面量，统一归一化为 IPv4 形式再参与比较
const IPV6_LOOPBACK: &str = "::1";

/// 客户端 IP 值提供者
///
/// 只服务一个合成键，exists 恒为 true。配置了固定地址时
/// 优先返回固定值（测试/预发钩子），返回前把 ::1 归一化为
/// 127.0.0.1。归一化同样作用于固定地址。
#[derive(Debug, Clone)]
pub struct ClientIpValueProvider {
    address: String,
    fixed_address: Option<String>,
}

impl ClientIpValueProvider {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            fixed_address: None,
        }
    }

    /// 按配置构建：配置了 test_fixed_ip 时以其覆盖真实地址
    pub fn from_config(address: impl Into<String>, config: &PersonalisationConfig) -> Self {
        Self {
            address: address.into(),
            fixed_address: config.test_fixed_ip.clone(),
        }
    }

    pub fn with_fixed_address(mut self, address: impl Into<String>) -> Self {
        self.fixed_address = Some(address.into());
        self
    }

    fn resolve(&self) -> String {
        // 空的固定地址视同未配置
        let ip = self
            .fixed_address
            .as_deref()
            .filter(|fixed| !fixed.is_empty())
            .unwrap_or(&self.address);

        if ip == IPV6_LOOPBACK {
            "127.0.0.1".to_string()
        } else {
            ip.to_string()
        }
    }
}

impl ValueProvider for ClientIpValueProvider {
    fn exists(&self, _key: &str) -> bool {
        true
    }

    fn get_value(&self, _key: &str) -> Option<String> {
        Some(self.resolve())
    }
}
