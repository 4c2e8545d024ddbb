use std::net::SocketAddr;
use std::time::Duration;

use common::prelude::{AccountId, AccountRecord, ACCOUNT_TYPES, COMPANY_NAMES, RECORD_COUNT};
use service::{http_server, RouteSet, ServiceConfig, ServiceState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::timeout;

struct TestServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), http_server::HttpServerError>>,
}

impl TestServer {
    async fn start(route_set: RouteSet) -> anyhow::Result<Self> {
        let config = ServiceConfig {
            route_set,
            ..ServiceConfig::default()
        };
        let state = ServiceState::from_config(&config)?;
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let router = http_server::router(state, config.log_level);
        let handle = tokio::spawn(http_server::serve(listener, router, async move {
            let _ = shutdown_rx.await;
        }));

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        timeout(Duration::from_secs(5), self.handle).await???;
        Ok(())
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn serves_both_route_sets_over_tcp() -> anyhow::Result<()> {
    let server = TestServer::start(RouteSet::Both).await?;
    let client = reqwest::Client::new();

    let greeting = client.get(server.url("/")).send().await?;
    assert_eq!(greeting.status(), reqwest::StatusCode::OK);
    assert_eq!(greeting.text().await?, "Hello World!");

    let rich: Vec<AccountRecord> = client
        .get(server.url("/accounts"))
        .header("Origin", "http://example.com")
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(rich.len(), RECORD_COUNT);
    for (i, account) in rich.iter().enumerate() {
        assert!(matches!(account.id, AccountId::Uuid(_)));
        assert_eq!(account.nickname, COMPANY_NAMES[i]);
        assert!(ACCOUNT_TYPES.contains(&account.account_type.as_str()));
    }

    let dda: Vec<AccountRecord> = client
        .get(server.url("/accounts/dda"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(dda.len(), RECORD_COUNT);
    for (i, account) in dda.iter().enumerate() {
        assert_eq!(account.id, AccountId::Index(i as u64));
        assert_eq!(account.nickname, format!("Nickname {}", i));
        assert_eq!(account.account_type, "dda");
    }

    server.stop().await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cross_origin_and_not_found() -> anyhow::Result<()> {
    let server = TestServer::start(RouteSet::Rich).await?;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/accounts"))
        .header("Origin", "http://example.com")
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.as_bytes()),
        Some(&b"*"[..])
    );

    let missing = client.get(server.url("/nonexistent")).send().await?;
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    let disabled = client.get(server.url("/accounts/dda")).send().await?;
    assert_eq!(disabled.status(), reqwest::StatusCode::NOT_FOUND);

    server.stop().await
}

#[tokio::test]
async fn bind_conflict_is_reported() -> anyhow::Result<()> {
    let taken = TcpListener::bind("127.0.0.1:0").await?;
    let config = ServiceConfig {
        listen_addr: taken.local_addr()?,
        ..ServiceConfig::default()
    };
    let state = ServiceState::from_config(&config)?;
    let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(());

    let result = http_server::run(http_server::Config::from(&config), state, shutdown_rx).await;
    assert!(matches!(
        result,
        Err(http_server::HttpServerError::Bind { .. })
    ));
    Ok(())
}
