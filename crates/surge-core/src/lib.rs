mod error;
pub use error::CoreError;

mod policy;
pub use policy::CompletionPolicy;

mod registry;
pub use registry::RunRegistry;

mod run_state;
pub use run_state::RunState;

mod scheduler;
mod worker;

mod engine;
pub use engine::Engine;
