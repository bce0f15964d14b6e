//! Network constants for the Coiner API.

use std::time::Duration;

/// Default REST API base URL. Endpoints live under `/api`.
pub const DEFAULT_API_URL: &str = "https://api.getcoiner.app";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Idle connections kept per host.
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;
