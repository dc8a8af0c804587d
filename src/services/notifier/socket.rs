use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;

use super::hub::NotificationHub;

/// Pumps hub notifications into one websocket until either side goes away.
/// Inbound text and binary frames are ignored; the protocol is outbound only.
pub async fn handle_socket(hub: Arc<NotificationHub>, socket: WebSocket) {
    let (id, mut messages_rx) = hub.connect().await;
    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            outgoing = messages_rx.recv() => {
                let Some(payload) = outgoing else {
                    // Hub shut down
                    let _ = ws_tx.send(Message::Close(None)).await;
                    break;
                };
                if let Err(e) = ws_tx.send(Message::Text(payload.into())).await {
                    tracing::debug!(connection_id = %id, error = %e, "websocket send failed");
                    break;
                }
            }

            incoming = ws_rx.next() => {
                match incoming {
                    None | Some(Ok(Message::Close(_))) => break,
                    Some(Err(e)) => {
                        tracing::debug!(connection_id = %id, error = %e, "websocket receive failed");
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    hub.disconnect(id).await;
}
