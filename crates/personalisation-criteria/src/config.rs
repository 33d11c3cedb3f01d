//! 配置管理模块
//!
//! 支持配置文件加载与环境变量覆盖。测试/预发环境可通过固定 IP
//! 覆盖真实客户端地址，便于在本机验证按地域划分的分组。

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 个性化分组配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalisationConfig {
    /// 固定客户端 IP（测试/预发钩子），未配置时使用真实地址
    #[serde(default)]
    pub test_fixed_ip: Option<String>,
}

impl PersonalisationConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的覆盖先加载的同名配置项）：
    /// 1. 指定的配置文件（可选，不存在时忽略）
    /// 2. 环境变量（PERSONALISATION_ 前缀，如 PERSONALISATION_TEST_FIXED_IP）
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix("PERSONALISATION").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
