use parking_lot::RwLock;
use railmock_core::{FaultInjector, InjectedFault, NoFault};
use std::sync::Arc;

/// Process-wide, swappable fault injector. Every request sees whichever
/// injector is active when it calls `check`.
pub struct FaultHook {
    active: RwLock<Arc<dyn FaultInjector>>,
}

impl FaultHook {
    pub fn new(injector: Arc<dyn FaultInjector>) -> Self {
        Self { active: RwLock::new(injector) }
    }

    pub fn inject<F>(&self, injector: F)
    where
        F: FaultInjector + 'static,
    {
        self.replace(Arc::new(injector));
    }

    pub fn replace(&self, injector: Arc<dyn FaultInjector>) {
        *self.active.write() = injector;
    }

    pub fn reset(&self) {
        self.inject(NoFault);
    }

    pub fn check(&self, path: &str) -> Result<(), InjectedFault> {
        let injector = self.active.read().clone();
        injector.check(path)
    }
}

impl Default for FaultHook {
    fn default() -> Self {
        Self::new(Arc::new(NoFault))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railmock_core::AlwaysFail;

    #[test]
    fn test_swap_and_reset() {
        let hook = FaultHook::default();
        assert!(hook.check("/initialize").is_ok());

        hook.inject(AlwaysFail);
        assert!(hook.check("/initialize").is_err());
        assert!(hook.check("/initialize").is_err());

        hook.reset();
        assert!(hook.check("/initialize").is_ok());
    }

    #[test]
    fn test_inject_closure() {
        let hook = FaultHook::default();
        hook.inject(|path: &str| -> Result<(), InjectedFault> {
            Err(InjectedFault::new(path, "harness says no"))
        });
        let fault = hook.check("/initialize").unwrap_err();
        assert_eq!(fault.reason, "harness says no");
    }
}
