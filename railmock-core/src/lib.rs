pub mod fault;
pub mod fixtures;
pub mod operation;
pub mod payment;
pub mod reservation;
pub mod search;
pub mod session;

pub use fault::{AlwaysFail, FailPaths, FaultInjector, FaultMode, FaultSpec, InjectedFault, NoFault};
pub use operation::Operation;
pub use payment::PaymentNotifier;
pub use session::{Session, SessionError, SessionStore};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
