use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

/// Wire format pushed to every websocket client.
#[derive(Debug, Serialize)]
pub struct NotificationEnvelope<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: &'a str,
}

impl<'a> NotificationEnvelope<'a> {
    pub fn notification(message: &'a str) -> Self {
        Self {
            kind: "notification",
            message,
        }
    }
}

/// Registry of open websocket connections.
///
/// Each connection owns the receiving half of an unbounded channel; the hub
/// keeps the sending half. Broadcast is best-effort and at-most-once: a
/// connection whose receiver is already gone is skipped and nothing is retried.
#[derive(Default)]
pub struct NotificationHub {
    connections: RwLock<HashMap<Uuid, mpsc::UnboundedSender<String>>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn connect(&self) -> (Uuid, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();

        self.connections.write().await.insert(id, tx);
        tracing::debug!(connection_id = %id, "websocket connection registered");

        (id, rx)
    }

    pub async fn disconnect(&self, id: Uuid) {
        if self.connections.write().await.remove(&id).is_some() {
            tracing::debug!(connection_id = %id, "websocket connection removed");
        }
    }

    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Sends `message` to every open connection and returns how many were reached.
    pub async fn broadcast(&self, message: &str) -> usize {
        let payload = match serde_json::to_string(&NotificationEnvelope::notification(message)) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode notification");
                return 0;
            }
        };

        let connections = self.connections.read().await;
        let mut delivered = 0;

        for (id, tx) in connections.iter() {
            if tx.is_closed() {
                tracing::debug!(connection_id = %id, "skipping closed connection");
                continue;
            }
            match tx.send(payload.clone()) {
                Ok(()) => delivered += 1,
                Err(_) => tracing::debug!(connection_id = %id, "connection closed mid-broadcast"),
            }
        }

        tracing::info!(delivered, total = connections.len(), "notification broadcast");
        delivered
    }

    /// Drops every sender so socket tasks close their connections.
    pub async fn close_all(&self) {
        let mut connections = self.connections.write().await;
        let count = connections.len();
        connections.clear();
        tracing::info!(count, "closing websocket connections");
    }
}
