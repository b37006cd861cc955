use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Injected fault on {path}: {reason}")]
pub struct InjectedFault {
    pub path: String,
    pub reason: String,
}

impl InjectedFault {
    pub fn new(path: &str, reason: impl Into<String>) -> Self {
        Self { path: path.to_string(), reason: reason.into() }
    }
}

/// Hook consulted before serving a request; an `Err` forces a 500.
pub trait FaultInjector: Send + Sync {
    fn check(&self, path: &str) -> Result<(), InjectedFault>;
}

impl<F> FaultInjector for F
where
    F: Fn(&str) -> Result<(), InjectedFault> + Send + Sync,
{
    fn check(&self, path: &str) -> Result<(), InjectedFault> {
        self(path)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoFault;

impl FaultInjector for NoFault {
    fn check(&self, _path: &str) -> Result<(), InjectedFault> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFail;

impl FaultInjector for AlwaysFail {
    fn check(&self, path: &str) -> Result<(), InjectedFault> {
        Err(InjectedFault::new(path, "always fail"))
    }
}

/// Fails only for the listed request paths.
#[derive(Debug, Clone, Default)]
pub struct FailPaths {
    paths: HashSet<String>,
}

impl FailPaths {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { paths: paths.into_iter().map(Into::into).collect() }
    }
}

impl FaultInjector for FailPaths {
    fn check(&self, path: &str) -> Result<(), InjectedFault> {
        if self.paths.contains(path) {
            return Err(InjectedFault::new(path, "path marked as failing"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultMode {
    #[default]
    None,
    Always,
    Paths,
}

/// Declarative description of an injector, as read from config or the control API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaultSpec {
    #[serde(default)]
    pub mode: FaultMode,
    #[serde(default)]
    pub paths: Vec<String>,
}

impl FaultSpec {
    pub fn into_injector(self) -> Arc<dyn FaultInjector> {
        match self.mode {
            FaultMode::None => Arc::new(NoFault),
            FaultMode::Always => Arc::new(AlwaysFail),
            FaultMode::Paths => Arc::new(FailPaths::new(self.paths)),
        }
    }
}
