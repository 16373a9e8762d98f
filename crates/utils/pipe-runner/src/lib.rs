pub use tokio_util::sync::CancellationToken;
pub mod error;
pub use error::{RunError, RunErrorKind, RunResult};
pub mod runner;
pub use runner::{run_cancellable, run_with_pipe};
pub mod scope;
pub use scope::{CancelReason, ExecScope};
pub mod state;
pub use state::{Pipe, RunnableState};
