use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::domain::{errors::RelayError, models::OutboundMessage};

pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_millis(8000);

/// Failure reported by a connection while handing a frame to the peer.
#[derive(Debug)]
pub enum SendFault {
    /// The peer closed the connection before the send completed.
    Closed { code: u16, reason: String },
    /// The connection was up but refused the frame.
    Transmit(anyhow::Error),
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn connect(&self, endpoint: &str) -> anyhow::Result<Box<dyn ChatConnection>>;
}

#[async_trait]
pub trait ChatConnection: Send {
    async fn send(&mut self, payload: String) -> Result<(), SendFault>;
    /// Graceful close after a completed send.
    async fn close(&mut self);
    /// Forcible teardown; invoked on every failure path.
    async fn abort(&mut self);
}

/// Sends one message over one connection with a deadline.
///
/// At-most-once: success means the transport accepted the bytes, nothing
/// more. No state survives a call; concurrent calls are independent.
pub struct DeliveryChannel {
    transport: Arc<dyn ChatTransport>,
}

impl DeliveryChannel {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self { transport }
    }

    /// Resolves exactly once with the first of: sent, transport error,
    /// premature close, deadline. On success the acknowledged message is
    /// handed back to the caller.
    pub async fn deliver(
        &self,
        endpoint: &str,
        message: OutboundMessage,
        timeout: Duration,
    ) -> Result<OutboundMessage, RelayError> {
        if endpoint.trim().is_empty() {
            return Err(RelayError::InvalidEndpoint);
        }

        let payload =
            serde_json::to_string(&message).map_err(|err| RelayError::Transmit(err.into()))?;

        // One deadline spans connect and send. Dropping it on any return
        // path is the timer cancellation; `select!` resolving a single
        // branch is the already-settled guard.
        let deadline = sleep(timeout);
        tokio::pin!(deadline);

        let mut connection = tokio::select! {
            () = &mut deadline => return Err(RelayError::Timeout(timeout)),
            connected = self.transport.connect(endpoint) => {
                connected.map_err(RelayError::Transport)?
            }
        };

        tokio::select! {
            () = &mut deadline => {
                connection.abort().await;
                Err(RelayError::Timeout(timeout))
            }
            sent = connection.send(payload) => match sent {
                Ok(()) => {
                    connection.close().await;
                    Ok(message)
                }
                Err(SendFault::Closed { code, reason }) => {
                    connection.abort().await;
                    Err(RelayError::PrematureClose { code, reason })
                }
                Err(SendFault::Transmit(cause)) => {
                    connection.abort().await;
                    Err(RelayError::Transmit(cause))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::pending;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::domain::models::MessageFields;
    use crate::{application::services::composer::compose, domain::models::MessageIntent};

    #[derive(Default)]
    struct ConnectionLog {
        sent: Mutex<Vec<String>>,
        closed: AtomicU32,
        aborted: AtomicU32,
    }

    #[derive(Clone, Copy)]
    enum Behavior {
        Refuse,
        HangConnect,
        SendOk,
        SendHang,
        SendTransmitFault,
        SendTransmitFaultAfter(Duration),
        SendPeerClose(u16, &'static str),
    }

    struct FakeTransport {
        behavior: Behavior,
        opens: AtomicU32,
        log: Arc<ConnectionLog>,
    }

    impl FakeTransport {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior,
                opens: AtomicU32::new(0),
                log: Arc::new(ConnectionLog::default()),
            }
        }
    }

    #[async_trait]
    impl ChatTransport for FakeTransport {
        async fn connect(&self, _endpoint: &str) -> anyhow::Result<Box<dyn ChatConnection>> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Refuse => anyhow::bail!("connection refused"),
                Behavior::HangConnect => pending().await,
                behavior => Ok(Box::new(FakeConnection {
                    behavior,
                    log: self.log.clone(),
                })),
            }
        }
    }

    struct FakeConnection {
        behavior: Behavior,
        log: Arc<ConnectionLog>,
    }

    #[async_trait]
    impl ChatConnection for FakeConnection {
        async fn send(&mut self, payload: String) -> Result<(), SendFault> {
            match self.behavior {
                Behavior::SendOk => {
                    self.log.sent.lock().unwrap().push(payload);
                    Ok(())
                }
                Behavior::SendHang => pending().await,
                Behavior::SendTransmitFault => {
                    Err(SendFault::Transmit(anyhow::anyhow!("frame rejected")))
                }
                Behavior::SendTransmitFaultAfter(delay) => {
                    sleep(delay).await;
                    Err(SendFault::Transmit(anyhow::anyhow!("frame rejected late")))
                }
                Behavior::SendPeerClose(code, reason) => Err(SendFault::Closed {
                    code,
                    reason: reason.to_string(),
                }),
                _ => unreachable!("connect-level behavior on a connection"),
            }
        }

        async fn close(&mut self) {
            self.log.closed.fetch_add(1, Ordering::SeqCst);
        }

        async fn abort(&mut self) {
            self.log.aborted.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn any_message() -> OutboundMessage {
        compose(MessageIntent::Cancel, MessageFields::default()).unwrap()
    }

    #[tokio::test]
    async fn empty_endpoint_fails_without_opening_a_connection() {
        let transport = Arc::new(FakeTransport::new(Behavior::SendOk));
        let channel = DeliveryChannel::new(transport.clone());

        let err = channel
            .deliver("", any_message(), Duration::from_millis(1000))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::InvalidEndpoint));
        assert_eq!(transport.opens.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_endpoint_fails_without_opening_a_connection() {
        let transport = Arc::new(FakeTransport::new(Behavior::SendOk));
        let channel = DeliveryChannel::new(transport.clone());

        let err = channel
            .deliver("   ", any_message(), Duration::from_millis(1000))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::InvalidEndpoint));
        assert_eq!(transport.opens.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn accepted_send_resolves_sent_and_closes_gracefully() {
        let transport = Arc::new(FakeTransport::new(Behavior::SendOk));
        let channel = DeliveryChannel::new(transport.clone());
        let message = any_message();
        let correlation_id = message.correlation_id.clone();

        let delivered = channel
            .deliver("wss://chat.example/session", message, Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(delivered.correlation_id, correlation_id);
        assert_eq!(transport.log.closed.load(Ordering::SeqCst), 1);
        assert_eq!(transport.log.aborted.load(Ordering::SeqCst), 0);

        let sent = transport.log.sent.lock().unwrap();
        let payload: serde_json::Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(payload["correlationId"], correlation_id.as_str());
        assert_eq!(payload["deliveryState"], 0);
        assert_eq!(payload["isSelfAuthored"], true);
        // Absent order reference must be an explicit null, not a missing key.
        assert!(payload.as_object().unwrap().contains_key("orderReference"));
        assert!(payload["orderReference"].is_null());
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let transport = Arc::new(FakeTransport::new(Behavior::Refuse));
        let channel = DeliveryChannel::new(transport);

        let err = channel
            .deliver("wss://chat.example/session", any_message(), Duration::from_secs(1))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Transport(_)));
    }

    #[tokio::test]
    async fn transmit_fault_aborts_the_connection() {
        let transport = Arc::new(FakeTransport::new(Behavior::SendTransmitFault));
        let channel = DeliveryChannel::new(transport.clone());

        let err = channel
            .deliver("wss://chat.example/session", any_message(), Duration::from_secs(1))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Transmit(_)));
        assert_eq!(transport.log.aborted.load(Ordering::SeqCst), 1);
        assert_eq!(transport.log.closed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn peer_close_during_send_reports_code_and_reason() {
        let transport = Arc::new(FakeTransport::new(Behavior::SendPeerClose(1001, "going away")));
        let channel = DeliveryChannel::new(transport.clone());

        let err = channel
            .deliver("wss://chat.example/session", any_message(), Duration::from_secs(1))
            .await
            .unwrap_err();

        match err {
            RelayError::PrematureClose { code, reason } => {
                assert_eq!(code, 1001);
                assert_eq!(reason, "going away");
            }
            other => panic!("expected premature close, got {other:?}"),
        }
        assert_eq!(transport.log.aborted.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_connect_times_out() {
        let transport = Arc::new(FakeTransport::new(Behavior::HangConnect));
        let channel = DeliveryChannel::new(transport.clone());
        let timeout = Duration::from_millis(50);

        let err = channel
            .deliver("wss://chat.example/session", any_message(), timeout)
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Timeout(t) if t == timeout));
        assert_eq!(transport.opens.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_send_times_out_and_aborts() {
        let transport = Arc::new(FakeTransport::new(Behavior::SendHang));
        let channel = DeliveryChannel::new(transport.clone());
        let timeout = Duration::from_millis(50);

        let err = channel
            .deliver("wss://chat.example/session", any_message(), timeout)
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Timeout(t) if t == timeout));
        assert_eq!(transport.log.aborted.load(Ordering::SeqCst), 1);
        assert_eq!(transport.log.closed.load(Ordering::SeqCst), 0);
    }

    // A transmit fault at 10ms races a 20ms deadline: the call must resolve
    // exactly once, with whichever event fired first.
    #[tokio::test(start_paused = true)]
    async fn earlier_fault_wins_over_later_deadline() {
        let transport = Arc::new(FakeTransport::new(Behavior::SendTransmitFaultAfter(
            Duration::from_millis(10),
        )));
        let channel = DeliveryChannel::new(transport.clone());

        let err = channel
            .deliver(
                "wss://chat.example/session",
                any_message(),
                Duration::from_millis(20),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Transmit(_)));
        assert_eq!(transport.log.aborted.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn earlier_deadline_wins_over_later_fault() {
        let transport = Arc::new(FakeTransport::new(Behavior::SendTransmitFaultAfter(
            Duration::from_millis(30),
        )));
        let channel = DeliveryChannel::new(transport.clone());
        let timeout = Duration::from_millis(20);

        let err = channel
            .deliver("wss://chat.example/session", any_message(), timeout)
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Timeout(t) if t == timeout));
        assert_eq!(transport.log.aborted.load(Ordering::SeqCst), 1);
    }
}
