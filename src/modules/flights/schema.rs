use serde::Serialize;

// =============================================================================
// SEED FLIGHTS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct SeedFlightsResponse {
    pub message: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SeedFlightsResponse {
    pub fn created(count: usize) -> Self {
        Self {
            message: true,
            created: Some(count),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            message: false,
            created: None,
            error: Some(error.into()),
        }
    }
}

// =============================================================================
// RATINGS / PURGE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PurgeFlightsResponse {
    pub status: bool,
    pub deleted: u64,
}
