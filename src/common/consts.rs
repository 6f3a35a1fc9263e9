// src/common/consts.rs
//
// 本文件包含项目中使用的所有全局常量

// 标准库导入
use std::net::SocketAddr;

// 第三方库导入
use url::Url;

//
// DNS 解析器常量
//

/// 固定上游 DNS 服务器地址 (Google Public DNS)
pub fn default_dns_server_addr() -> SocketAddr {
    "8.8.8.8:53".parse().unwrap()
}

/// 上游 DNS 查询超时（毫秒）
pub const DEFAULT_DNS_TIMEOUT_MS: u64 = 5000;

//
// 抓取目标常量
//

/// 固定的抓取目标 URL
pub const DEFAULT_TARGET_URL: &str = "https://example.com";

/// 解析后的默认目标 URL
pub fn default_target_url() -> Url {
    DEFAULT_TARGET_URL.parse().unwrap()
}

//
// 控制台输出前缀
//

/// 成功时的状态行前缀
pub const STATUS_PREFIX: &str = "Response status:";

/// 成功时的响应体前缀
pub const BODY_PREFIX: &str = "Response body:";

/// 请求阶段失败的错误行前缀
pub const FETCH_ERROR_PREFIX: &str = "Error fetching URL:";

/// 读取响应体失败的错误行前缀
pub const BODY_ERROR_PREFIX: &str = "Error reading response body:";
