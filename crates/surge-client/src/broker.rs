use async_trait::async_trait;

use crate::{ClientError, ProducerRecord, SendAck};

/// Send-one-record boundary to the broker cluster.
///
/// Implementations own connection, authentication, and serialization
/// concerns. The engine holds one in-flight call per worker and never
/// retries; retries, if any, live inside the implementation and are opaque
/// to the engine. A call may block for the duration of the implementation's
/// own read timeout.
#[async_trait]
pub trait BrokerClient: Send + Sync + 'static {
    /// Short symbolic adapter name, for logging.
    fn name(&self) -> &'static str;

    /// Deliver one record and wait for the broker acknowledgment.
    async fn send(&self, record: &ProducerRecord) -> Result<SendAck, ClientError>;
}
