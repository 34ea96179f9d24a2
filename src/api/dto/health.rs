//! Body of `GET /health`.

use serde::Serialize;

/// Overall service state plus the result of the store probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` when the store answered, `degraded` otherwise.
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

impl HealthResponse {
    /// Builds the response and reports whether the store probe passed.
    pub fn from_checks(checks: HealthChecks) -> (Self, bool) {
        let healthy = checks.database.is_ok();
        let response = Self {
            status: if healthy { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks,
        };
        (response, healthy)
    }
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Outcome of one probe: `ok` or `error`, with a short detail line.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
