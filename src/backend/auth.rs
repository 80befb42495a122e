use std::time::Duration;

use async_trait::async_trait;

use crate::error::DevCircleResult;
use crate::logging::log_info;

/// Account operations behind the login/signup screen
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> DevCircleResult<()>;

    async fn signup(&self, name: &str, email: &str, password: &str) -> DevCircleResult<()>;
}

/// Accepts every request after a delay. No session or token is issued.
pub struct MockAuthGateway {
    latency: Duration,
}

impl MockAuthGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, email: &str, _password: &str) -> DevCircleResult<()> {
        self.simulate_latency().await;
        log_info(&format!("Mock login accepted for {}", email));
        Ok(())
    }

    async fn signup(&self, name: &str, email: &str, _password: &str) -> DevCircleResult<()> {
        self.simulate_latency().await;
        log_info(&format!("Mock signup accepted for {} <{}>", name, email));
        Ok(())
    }
}
