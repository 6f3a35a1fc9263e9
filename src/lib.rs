// src/lib.rs

//! oxide-rfetch: HTTP GET demo with a pinned upstream DNS resolver.
//!
//! 这个 crate 把一次普通的 HTTP GET 的名称解析步骤固定到一个
//! 指定的上游 DNS 服务器上：
//! - 所有域名查询都发往固定的服务器地址（固定协议、固定超时）
//! - 从不回退到系统解析路径（系统 nameserver / hosts 文件 / 缓存）
//! - 对固定 URL 发起一次 GET，打印状态行和响应体
//!
//! 库层暴露抓取流水线，二进制 `orfetch` 只负责组装和打印。

pub mod client;
pub mod common;
