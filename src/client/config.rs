// src/client/config.rs

// 第三方库导入
use url::Url;

// 本地模块导入
use crate::client::error::ClientResult;
use crate::client::resolver::ResolverSettings;
use crate::common::consts::default_target_url;

/// 一次抓取操作的完整配置。
///
/// 配置对象在任何连接建立之前整体构造完成，并作为参数传入
/// 抓取调用，不修改任何进程级全局状态。二进制始终使用
/// `Default`（固定的演示值）；测试可以把各字段指向本地的
/// 模拟服务。
#[derive(Debug, Clone)]
pub struct FetchConfig {
    // 固定上游解析器配置
    pub resolver: ResolverSettings,
    // 抓取目标 URL
    pub target_url: Url,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverSettings::default(),
            target_url: default_target_url(),
        }
    }
}

impl FetchConfig {
    /// 使用默认解析器配置和给定目标构造配置
    pub fn with_target(url: &str) -> ClientResult<Self> {
        Ok(Self {
            resolver: ResolverSettings::default(),
            target_url: Url::parse(url)?,
        })
    }
}
