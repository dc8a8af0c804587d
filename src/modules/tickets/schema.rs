use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::{NewTicket, TicketChanges};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

// =============================================================================
// CREATE
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateTicketRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TicketStatus>,
}

impl From<CreateTicketRequest> for NewTicket {
    fn from(req: CreateTicketRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status.unwrap_or_default(),
        }
    }
}

// =============================================================================
// UPDATE
// =============================================================================

/// Partial update. Omitted and `null` fields both keep their stored value,
/// so a description cannot be cleared once set.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateTicketRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
}

impl From<UpdateTicketRequest> for TicketChanges {
    fn from(req: UpdateTicketRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status,
        }
    }
}

// =============================================================================
// DELETE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct DeleteTicketResponse {
    pub message: &'static str,
}
