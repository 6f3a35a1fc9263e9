// src/client/response.rs

/// 该模块负责读取响应体并产生控制台输出。
///
/// 控制台契约（固定前缀，纯文本，标准输出）：
/// - 成功：`Response status: <状态行>` 和 `Response body: <文本>`
/// - 请求阶段失败：`Error fetching URL: <错误>`
/// - 读体阶段失败：`Error reading response body: <错误>`

// 标准库导入
use std::borrow::Cow;

// 第三方库导入
use reqwest::StatusCode;
use tracing::debug;

// 本地模块导入
use crate::client::error::{ClientError, ClientResult};
use crate::common::consts::{BODY_ERROR_PREFIX, BODY_PREFIX, FETCH_ERROR_PREFIX, STATUS_PREFIX};

/// 一次成功抓取的结果
#[derive(Debug)]
pub struct FetchReport {
    /// HTTP 状态
    pub status: StatusCode,
    /// 原始响应体
    pub raw_body: Vec<u8>,
}

impl FetchReport {
    /// 响应体的文本形式（非 UTF-8 字节做有损替换）
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw_body)
    }
}

/// 读取成功响应的完整响应体。
///
/// 拿走 `Response` 的所有权：无论读取成功还是失败，
/// 连接与响应体资源都恰好释放一次。
pub async fn read_report(response: reqwest::Response) -> ClientResult<FetchReport> {
    let status = response.status();

    let raw_body = response
        .bytes()
        .await
        .map_err(ClientError::BodyRead)?
        .to_vec();

    debug!(
        status = %status,
        body_bytes = raw_body.len(),
        "Response body fully read"
    );

    Ok(FetchReport { status, raw_body })
}

/// 格式化状态行
pub fn format_status_line(status: &StatusCode) -> String {
    format!("{} {}", STATUS_PREFIX, status)
}

/// 格式化响应体行
pub fn format_body_line(raw_body: &[u8]) -> String {
    format!("{} {}", BODY_PREFIX, String::from_utf8_lossy(raw_body))
}

/// 格式化错误行，按失败阶段选择前缀。
///
/// 读体失败使用专用前缀，其余错误都属于请求阶段。
/// 前缀后打印底层错误本身，而不是包装后的变体文案。
pub fn error_line(err: &ClientError) -> String {
    match err {
        ClientError::BodyRead(source) => format!("{} {}", BODY_ERROR_PREFIX, source),
        ClientError::Request(source) => format!("{} {}", FETCH_ERROR_PREFIX, source),
        other => format!("{} {}", FETCH_ERROR_PREFIX, other),
    }
}

/// 打印状态行
pub fn print_status(status: StatusCode) {
    println!("{}", format_status_line(&status));
}

/// 打印响应体行
pub fn print_body(report: &FetchReport) {
    println!("{}", format_body_line(&report.raw_body));
}

/// 打印错误行
pub fn print_error(err: &ClientError) {
    println!("{}", error_line(err));
}
