//! 访客值提供者
//!
//! 评估器只依赖一个扁平的取值接口，不关心值来自 Cookie、请求头
//! 还是计算出的事实（客户端 IP、当前时间）。各实现相互独立，
//! 由调用方按条件类型选择。

pub mod clock;
pub mod cookie;
pub mod header;
pub mod ip;

pub use clock::{ClockValueProvider, NOW_KEY};
pub use cookie::CookieValueProvider;
pub use header::HeaderValueProvider;
pub use ip::{ClientIpValueProvider, CLIENT_IP_KEY};

/// 访客值提供者接口
///
/// 实现要求对并发读安全；典型实现是请求作用域的快照，天然满足。
#[cfg_attr(test, mockall::automock)]
pub trait ValueProvider: Send + Sync {
    /// 指定键在当前请求中是否存在
    fn exists(&self, key: &str) -> bool;

    /// 获取指定键的原始字符串值，键不存在时返回 None
    fn get_value(&self, key: &str) -> Option<String>;
}
