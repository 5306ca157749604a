// Ordered endpoint fallback
use crate::error::ConnectionError;
use std::fmt;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Tries candidate endpoints in order and stops at the first success.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    candidates: Vec<Endpoint>,
}

impl EndpointResolver {
    pub fn new(candidates: Vec<Endpoint>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Endpoint] {
        &self.candidates
    }

    /// Run `attempt` against each candidate until one returns `Ok`.
    ///
    /// Every attempt starts from scratch; nothing carries over from a failed one.
    pub async fn first_success<T, E, F, Fut>(&self, mut attempt: F) -> Result<(Endpoint, T), ConnectionError>
    where
        E: fmt::Display,
        F: FnMut(Endpoint) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        for endpoint in &self.candidates {
            match attempt(endpoint.clone()).await {
                Ok(value) => return Ok((endpoint.clone(), value)),
                Err(e) => tracing::warn!("Endpoint {} failed: {}", endpoint, e),
            }
        }
        Err(ConnectionError::unreachable())
    }
}
