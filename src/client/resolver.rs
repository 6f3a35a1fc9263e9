// src/client/resolver.rs

// 标准库导入
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

// 第三方库导入
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use tracing::debug;
use trust_dns_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

// 本地模块导入
use crate::client::error::{ClientError, ClientResult};
use crate::common::consts::{default_dns_server_addr, DEFAULT_DNS_TIMEOUT_MS};

// 上游 DNS 解析器协议类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverProtocol {
    // UDP 协议
    Udp,
    // TCP 协议
    Tcp,
}

/// 固定上游解析器的配置
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    // 上游 DNS 服务器地址
    pub address: SocketAddr,
    // 与上游通信的协议
    pub protocol: ResolverProtocol,
    // 单次查询超时
    pub timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            address: default_dns_server_addr(),
            protocol: ResolverProtocol::Udp,
            timeout: Duration::from_millis(DEFAULT_DNS_TIMEOUT_MS),
        }
    }
}

/// 绑定到固定上游服务器的 DNS 解析器。
///
/// 解析器配置中只有一个 nameserver，并且关闭了 hosts 文件
/// 和内部缓存：运行期间的所有名称查询都只会到达配置的
/// 服务器地址，从不回退到系统解析路径。
#[derive(Clone)]
pub struct PinnedResolver {
    // 内部 TokioAsyncResolver
    inner: TokioAsyncResolver,
    // 保存配置用于日志输出
    settings: ResolverSettings,
}

impl PinnedResolver {
    /// 根据配置创建固定上游解析器
    pub fn new(settings: &ResolverSettings) -> Self {
        // 构建只包含固定 nameserver 的解析器配置
        let mut resolver_config = ResolverConfig::new();
        resolver_config.add_name_server(NameServerConfig {
            socket_addr: settings.address,
            protocol: match settings.protocol {
                ResolverProtocol::Udp => Protocol::Udp,
                ResolverProtocol::Tcp => Protocol::Tcp,
            },
            tls_dns_name: None,
            trust_negative_responses: true,
            bind_addr: None,
        });

        // 创建解析器选项
        let mut resolver_opts = ResolverOpts::default();

        // 设置查询超时
        resolver_opts.timeout = settings.timeout;

        // 超时即失败，不做第二次尝试
        resolver_opts.attempts = 1;

        // 不读取 hosts 文件，所有名称都发往上游
        resolver_opts.use_hosts_file = false;

        // 不缓存查询结果
        resolver_opts.cache_size = 0;

        debug!(
            server = %settings.address,
            protocol = ?settings.protocol,
            timeout_ms = settings.timeout.as_millis() as u64,
            "Pinned DNS resolver initialized"
        );

        Self {
            inner: TokioAsyncResolver::tokio(resolver_config, resolver_opts),
            settings: settings.clone(),
        }
    }

    /// 通过固定上游执行一次地址查询
    pub async fn lookup_ip(&self, host: &str) -> ClientResult<Vec<IpAddr>> {
        let lookup = self
            .inner
            .lookup_ip(host)
            .await
            .map_err(ClientError::DnsResolve)?;

        let addrs: Vec<IpAddr> = lookup.iter().collect();

        debug!(
            host = %host,
            server = %self.settings.address,
            addrs_count = addrs.len(),
            "DNS lookup completed"
        );

        Ok(addrs)
    }
}

// 让 reqwest 客户端的连接建立步骤使用这个解析器
impl Resolve for PinnedResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.inner.clone();
        let server = self.settings.address;

        Box::pin(async move {
            debug!(
                host = name.as_str(),
                server = %server,
                "Resolving via pinned DNS server"
            );

            let lookup = resolver
                .lookup_ip(name.as_str())
                .await
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error + Send + Sync>)?;

            // 端口填 0，由调用方按目标 URL 补齐
            let addrs: Addrs = Box::new(
                lookup
                    .into_iter()
                    .map(|ip| SocketAddr::new(ip, 0)),
            );

            Ok(addrs)
        })
    }
}
