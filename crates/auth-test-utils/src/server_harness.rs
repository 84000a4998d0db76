//! Test server harness for E2E testing
//!
//! Provides TestAuthServer for spawning real API server instances in tests.

use auth_service::config::Config;
use auth_service::crypto::DEFAULT_BCRYPT_COST;
use auth_service::handlers::auth_handler::AppState;
use auth_service::routes;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Test harness for spawning the GlobeTrotter API in E2E tests
///
/// # Example
/// ```rust,ignore
/// #[sqlx::test(migrations = "./migrations")]
/// async fn test_auth_flow_e2e(pool: SqlitePool) -> Result<(), anyhow::Error> {
///     let server = TestAuthServer::spawn(pool).await?;
///
///     let response = server
///         .client()
///         .post(format!("{}/api/auth/signup", server.url()))
///         .json(&signup_body)
///         .send()
///         .await?;
///
///     assert_eq!(response.status(), 201);
///     Ok(())
/// }
/// ```
pub struct TestAuthServer {
    addr: SocketAddr,
    client: reqwest::Client,
    _handle: JoinHandle<()>,
}

impl TestAuthServer {
    /// Spawn a new test server instance over the given pool
    ///
    /// The server binds to a random available port on localhost and serves
    /// the real router; the pool typically comes from `#[sqlx::test]`, which
    /// gives each test an isolated database.
    pub async fn spawn(pool: SqlitePool) -> Result<Self, anyhow::Error> {
        // The URL field is unused at runtime (the pool is injected), but
        // Config is constructed whole to mirror production wiring.
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        };

        let state = Arc::new(AppState { pool, config });
        let app = routes::build_routes(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(TestAuthServer {
            addr,
            client: reqwest::Client::new(),
            _handle: handle,
        })
    }

    /// Base URL of the running server, e.g. `http://127.0.0.1:49152`
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shared HTTP client for requests against this server
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
