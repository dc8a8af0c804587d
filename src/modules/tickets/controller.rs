use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::modules::common::ValidatedJson;
use crate::AppState;
use super::interface::TicketError;
use super::model::{NewTicket, Ticket, TicketChanges};
use super::schema::{CreateTicketRequest, DeleteTicketResponse, UpdateTicketRequest};

pub const TICKET_CREATED_MESSAGE: &str = "Ticket berhasil dibuat!";

// =============================================================================
// GET /api/v1/tickets
// =============================================================================

pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Ticket>>, TicketError> {
    let tickets = state.tickets.list().await?;
    Ok(Json(tickets))
}

// =============================================================================
// GET /api/v1/tickets/{id}
// =============================================================================

pub async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Ticket>, TicketError> {
    if id <= 0 {
        return Err(TicketError::NotFound(id));
    }

    let ticket = state
        .tickets
        .find_by_id(id)
        .await?
        .ok_or(TicketError::NotFound(id))?;

    Ok(Json(ticket))
}

// =============================================================================
// POST /api/v1/tickets
// =============================================================================

/// The notification goes out only after the row is stored. Delivery is
/// best-effort and never changes the response.
pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateTicketRequest>,
) -> Result<(StatusCode, Json<Ticket>), TicketError> {
    let ticket = state.tickets.create(&NewTicket::from(req)).await?;
    tracing::info!(ticket_id = ticket.id, "ticket created");
    state.metrics.tickets_created_total.inc();

    let delivered = state.notifier.broadcast(TICKET_CREATED_MESSAGE).await;
    state
        .metrics
        .notifications_delivered_total
        .inc_by(delivered as u64);

    Ok((StatusCode::CREATED, Json(ticket)))
}

// =============================================================================
// PUT /api/v1/tickets/{id}
// =============================================================================

pub async fn update_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateTicketRequest>,
) -> Result<Json<Ticket>, TicketError> {
    let changes = TicketChanges::from(req);
    if changes.is_empty() {
        return Err(TicketError::EmptyUpdate);
    }
    if id <= 0 {
        return Err(TicketError::NotFound(id));
    }

    let ticket = state
        .tickets
        .update(id, &changes)
        .await?
        .ok_or(TicketError::NotFound(id))?;

    tracing::info!(ticket_id = id, "ticket updated");
    Ok(Json(ticket))
}

// =============================================================================
// DELETE /api/v1/tickets/{id}
// =============================================================================

pub async fn delete_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteTicketResponse>, TicketError> {
    if id <= 0 || !state.tickets.delete(id).await? {
        return Err(TicketError::NotFound(id));
    }

    tracing::info!(ticket_id = id, "ticket deleted");
    Ok(Json(DeleteTicketResponse {
        message: "Ticket deleted",
    }))
}
