pub mod app_config;
pub mod payment_ledger;
pub mod secure_random;
pub mod session_store;

pub use payment_ledger::InMemoryPaymentLedger;
pub use session_store::InMemorySessionStore;
