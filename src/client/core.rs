// src/client/core.rs

/// 该模块包含执行抓取的核心业务逻辑。
///
/// 主要流程：
/// 1. 根据配置创建固定上游解析器，并用它构建 HTTP 客户端。
/// 2. 对目标 URL 发起一次 GET 请求。
/// 3. 请求成功后立即打印状态行，然后读取整个响应体并打印。
/// 4. 任一阶段失败都终止本次操作，由调用方打印带前缀的错误行。

// 标准库导入
use std::sync::Arc;

// 第三方库导入
use reqwest::{Client, Response};
use tracing::debug;

// 本地模块导入
use crate::client::config::FetchConfig;
use crate::client::error::{ClientError, ClientResult};
use crate::client::resolver::PinnedResolver;
use crate::client::response::{print_body, print_status, read_report};

/// 构建使用固定上游解析器的 HTTP 客户端
pub fn build_http_client(config: &FetchConfig) -> ClientResult<Client> {
    let resolver = PinnedResolver::new(&config.resolver);

    // 解析器通过 dns_resolver 接入客户端的连接建立步骤，
    // 客户端是本地持有的对象，不触碰进程级默认配置
    Client::builder()
        .dns_resolver(Arc::new(resolver))
        .build()
        .map_err(ClientError::HttpClient)
}

/// 对配置的目标 URL 发起 GET 请求
pub async fn send_request(client: &Client, config: &FetchConfig) -> ClientResult<Response> {
    debug!(url = %config.target_url, "Dispatching GET request");

    client
        .get(config.target_url.clone())
        .send()
        .await
        .map_err(ClientError::Request)
}

/// 执行一次完整的抓取：请求、打印状态行、读体、打印响应体。
///
/// 请求失败时不会发生任何读体操作；读体失败时状态行已经
/// 打印。两类失败都不重试。
pub async fn run_fetch(config: &FetchConfig) -> ClientResult<()> {
    let client = build_http_client(config)?;

    let response = send_request(&client, config).await?;
    print_status(response.status());

    // read_report 拿走 Response 的所有权，无论读取成败，
    // 响应体资源都只会被释放一次
    let report = read_report(response).await?;
    print_body(&report);

    Ok(())
}
