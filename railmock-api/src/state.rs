use std::sync::Arc;
use railmock_core::{operation::UnknownOperation, PaymentNotifier, SessionStore};
use railmock_store::{app_config::Config, InMemoryPaymentLedger, InMemorySessionStore};

use crate::{delay::DelayController, fault::FaultHook};

pub const DEFAULT_SESSION_COOKIE: &str = "session_isutrain";

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub payments: Arc<dyn PaymentNotifier>,
    pub delays: Arc<DelayController>,
    pub faults: Arc<FaultHook>,
    pub session_cookie: String,
}

impl AppState {
    /// No delays, no faults, default cookie name.
    pub fn new(sessions: Arc<dyn SessionStore>, payments: Arc<dyn PaymentNotifier>) -> Self {
        Self {
            sessions,
            payments,
            delays: Arc::new(DelayController::new()),
            faults: Arc::new(FaultHook::default()),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
        }
    }

    /// In-memory collaborators wired with the configured delays and fault mode.
    pub fn from_config(config: &Config) -> Result<Self, UnknownOperation> {
        let delays = DelayController::from_table(config.delay_table()?);
        let faults = FaultHook::new(config.fault.clone().into_injector());

        Ok(Self {
            sessions: Arc::new(InMemorySessionStore::new()),
            payments: Arc::new(InMemoryPaymentLedger::new()),
            delays: Arc::new(delays),
            faults: Arc::new(faults),
            session_cookie: config.session.cookie_name.clone(),
        })
    }
}
