// src/bin/orfetch.rs

//! oxide-rfetch 演示程序
//!
//! 把 HTTP 客户端的名称解析固定到一个指定的上游 DNS 服务器，
//! 然后对固定 URL 执行一次 GET：
//! - 所有域名查询都发往固定服务器（UDP，固定超时）
//! - 不回退到系统解析器和 hosts 文件
//! - 打印响应状态行和响应体；任一阶段失败打印错误行后结束

// 第三方库导入
use clap::{ArgAction, Parser};
use mimalloc::MiMalloc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// 本地模块导入
use oxide_rfetch::client::config::FetchConfig;
use oxide_rfetch::client::core::run_fetch;
use oxide_rfetch::client::response::print_error;

// 使用 mimalloc 作为全局内存分配器
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Oxide RFetch Command Line Arguments
#[derive(Parser, Debug)]
#[command(
    name = "oxide-rfetch",
    author,
    version,
    about = "HTTP fetch demo with a pinned upstream DNS resolver\n\n\
             Key Features:\n\
             - All name lookups forced through one fixed DNS server (UDP, fixed timeout)\n\
             - No fallback to the system resolver or hosts file\n\
             - Single HTTP GET against a fixed URL, printing status and body"
)]
struct CliArgs {
    /// Enable debug logging
    #[arg(
        short = 'd',
        long = "debug",
        action = ArgAction::SetTrue,
        help = "Enable debug level logging for detailed output"
    )]
    debug: bool,
}

/// Initialize logging system
fn init_logging(args: &CliArgs) {
    // Get log level from environment variable, or set based on debug parameter
    let filter = if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else if args.debug {
        // Enable debug mode, show more detailed logs
        EnvFilter::new("oxide_rfetch=debug,info")
    } else {
        // Normal mode, only show info level and above
        EnvFilter::new("info")
    };

    // 诊断日志写到 stderr，标准输出只保留契约行
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    // Register log subscriber
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    if args.debug {
        debug!("Debug logging level enabled");
    }
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args);

    // 固定配置：DNS 服务器、协议、超时和目标 URL 都不可配置
    let config = FetchConfig::default();
    info!(
        dns_server = %config.resolver.address,
        target_url = %config.target_url,
        "Starting custom-resolver HTTP fetch"
    );

    // 两类失败都只打印错误行后正常结束，不定义独立的退出码
    if let Err(err) = run_fetch(&config).await {
        print_error(&err);
    }
}
