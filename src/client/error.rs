// src/client/error.rs

// 使用 thiserror 来定义客户端特定的错误类型
use thiserror::Error;

/// 客户端操作中可能出现的错误。
///
/// 对外只有两类可观察的终止路径（请求失败 / 读体失败），
/// 控制台前缀的选择见 `response::error_line`。
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP 客户端创建错误
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// 发起 GET 请求阶段的错误（网络 / DNS / TLS）
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// 读取响应体阶段的 IO 错误
    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// DNS 解析错误
    #[error("DNS resolve error: {0}")]
    DnsResolve(#[from] trust_dns_resolver::error::ResolveError),

    /// 无效的 URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// IO 错误 (虽然在这个客户端中可能不太常见，但可以包含)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// 定义一个 Result 类型别名，方便使用
pub type ClientResult<T> = Result<T, ClientError>;
