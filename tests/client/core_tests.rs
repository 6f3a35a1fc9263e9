// tests/client/core_tests.rs

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, SocketAddr};
    use std::time::Duration;

    use oxide_rfetch::client::config::FetchConfig;
    use oxide_rfetch::client::core::{build_http_client, run_fetch, send_request};
    use oxide_rfetch::client::error::ClientError;
    use oxide_rfetch::client::resolver::{ResolverProtocol, ResolverSettings};
    use oxide_rfetch::client::response::read_report;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tracing::info;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::mock_dns::{spawn_silent_udp_dns, spawn_udp_dns};

    // 辅助函数 - 构造指向本地模拟服务的抓取配置。
    // 目标使用主机名而不是 IP，强制客户端经过解析器。
    fn test_config(dns_addr: SocketAddr, http_port: u16, timeout_ms: u64) -> FetchConfig {
        let mut config =
            FetchConfig::with_target(&format!("http://fetch-target.test:{}/", http_port)).unwrap();
        config.resolver = ResolverSettings {
            address: dns_addr,
            protocol: ResolverProtocol::Udp,
            timeout: Duration::from_millis(timeout_ms),
        };
        config
    }

    // 辅助函数 - 启动一个声明长度大于实际发送的 HTTP 服务器，
    // 迫使客户端在读体阶段失败
    async fn spawn_truncating_http_server() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = stream.read(&mut buf).await;
                    let _ = stream
                        .write_all(
                            b"HTTP/1.1 200 OK\r\ncontent-length: 4096\r\n\r\npartial",
                        )
                        .await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        addr
    }

    #[tokio::test]
    async fn test_fetch_success_via_pinned_dns() {
        // 启用 tracing 日志
        let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();
        info!("Starting test: test_fetch_success_via_pinned_dns");

        // 模拟 DNS 把测试主机名指向回环地址
        let dns = spawn_udp_dns(Ipv4Addr::LOCALHOST).await;

        // 创建一个 MockServer 来扮演抓取目标
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello from mock"))
            .mount(&mock_server)
            .await;
        let http_port = mock_server.address().port();

        let config = test_config(dns.addr, http_port, 2000);
        let client = build_http_client(&config).unwrap();

        let response = send_request(&client, &config).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let report = read_report(response).await.unwrap();
        assert_eq!(report.body_text(), "hello from mock");
        assert!(dns.hits() >= 1, "hostname must be resolved by the pinned server");

        info!("Test completed: test_fetch_success_via_pinned_dns");
    }

    #[tokio::test]
    async fn test_request_error_when_dns_unreachable() {
        let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();
        info!("Starting test: test_request_error_when_dns_unreachable");

        // DNS 服务器不应答，请求阶段应在固定超时内失败
        let dns = spawn_silent_udp_dns().await;
        let config = test_config(dns.addr, 8080, 200);
        let client = build_http_client(&config).unwrap();

        let err = send_request(&client, &config).await.unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));

        info!("Test completed: test_request_error_when_dns_unreachable");
    }

    #[tokio::test]
    async fn test_request_error_when_connection_refused() {
        let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();
        info!("Starting test: test_request_error_when_connection_refused");

        let dns = spawn_udp_dns(Ipv4Addr::LOCALHOST).await;

        // 绑定后立即释放，拿到一个当前没有监听者的端口
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let config = test_config(dns.addr, port, 2000);
        let client = build_http_client(&config).unwrap();

        let err = send_request(&client, &config).await.unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));

        info!("Test completed: test_request_error_when_connection_refused");
    }

    #[tokio::test]
    async fn test_body_read_error_when_stream_truncated() {
        let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();
        info!("Starting test: test_body_read_error_when_stream_truncated");

        let dns = spawn_udp_dns(Ipv4Addr::LOCALHOST).await;
        let http_addr = spawn_truncating_http_server().await;

        let config = test_config(dns.addr, http_addr.port(), 2000);
        let client = build_http_client(&config).unwrap();

        // 请求阶段成功：状态行已经可用
        let response = send_request(&client, &config).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        // 读体阶段失败：错误必须归类为 BodyRead
        let err = read_report(response).await.unwrap_err();
        assert!(matches!(err, ClientError::BodyRead(_)));

        info!("Test completed: test_body_read_error_when_stream_truncated");
    }

    #[tokio::test]
    async fn test_run_fetch_success() {
        let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();
        info!("Starting test: test_run_fetch_success");

        let dns = spawn_udp_dns(Ipv4Addr::LOCALHOST).await;
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("fetched"))
            .mount(&mock_server)
            .await;

        let config = test_config(dns.addr, mock_server.address().port(), 2000);
        run_fetch(&config).await.unwrap();
        assert!(dns.hits() >= 1, "run_fetch must resolve through the pinned server");

        info!("Test completed: test_run_fetch_success");
    }

    #[tokio::test]
    async fn test_run_fetch_reports_request_error() {
        let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();
        info!("Starting test: test_run_fetch_reports_request_error");

        let dns = spawn_silent_udp_dns().await;
        let config = test_config(dns.addr, 8080, 200);

        // 请求失败是终止性的：没有响应对象，也就不存在任何读体操作
        let err = run_fetch(&config).await.unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));

        info!("Test completed: test_run_fetch_reports_request_error");
    }
}
