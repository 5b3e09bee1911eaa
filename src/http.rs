// src/http.rs
// Shared HTTP client for Semrush API calls

/// User agent sent with every upstream request
pub const USER_AGENT: &str = concat!("semrush-mcp/", env!("CARGO_PKG_VERSION"));

/// Create the shared HTTP client.
///
/// Created once at startup and cloned into the invoker; reqwest pools
/// connections internally. Timeouts are left at reqwest's defaults.
pub fn create_shared_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(10)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
