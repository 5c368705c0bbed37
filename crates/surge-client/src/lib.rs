mod error;
pub use error::ClientError;

mod record;
pub use record::{ProducerRecord, SendAck};

mod broker;
pub use broker::BrokerClient;

mod mock;
pub use mock::{FailureMode, MockBroker};
