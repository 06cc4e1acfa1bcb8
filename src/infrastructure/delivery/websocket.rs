use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use futures_util::SinkExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{Error as WsError, Message},
};

use crate::application::services::delivery::{ChatConnection, ChatTransport, SendFault};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Outbound WebSocket transport for the delivery channel. Connection
/// lifetime is one call: connect, send one frame, close.
pub struct WebSocketTransport;

impl WebSocketTransport {
    pub fn new() -> Arc<dyn ChatTransport> {
        Arc::new(Self) as Arc<dyn ChatTransport>
    }
}

#[async_trait]
impl ChatTransport for WebSocketTransport {
    async fn connect(&self, endpoint: &str) -> anyhow::Result<Box<dyn ChatConnection>> {
        let (stream, _response) = connect_async(endpoint)
            .await
            .with_context(|| format!("websocket connect to {endpoint} failed"))?;
        tracing::debug!(endpoint, "websocket connected");
        Ok(Box::new(WebSocketConnection { stream }))
    }
}

struct WebSocketConnection {
    stream: WsStream,
}

#[async_trait]
impl ChatConnection for WebSocketConnection {
    async fn send(&mut self, payload: String) -> Result<(), SendFault> {
        match self.stream.send(Message::Text(payload.into())).await {
            Ok(()) => Ok(()),
            // A sink-based client has no close frame to report at this
            // point; 1006 is the reserved abnormal-closure code.
            Err(WsError::ConnectionClosed | WsError::AlreadyClosed) => Err(SendFault::Closed {
                code: 1006,
                reason: "connection closed before send completed".to_string(),
            }),
            Err(err) => Err(SendFault::Transmit(err.into())),
        }
    }

    async fn close(&mut self) {
        if let Err(err) = self.stream.close(None).await {
            tracing::debug!(error = %err, "websocket close handshake failed");
        }
    }

    async fn abort(&mut self) {
        // Skip the closing handshake and drop the socket at the TCP level.
        let _ = self.stream.get_mut().shutdown().await;
    }
}
