//! Load state and view-lifetime cancellation.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

/// Where a view's load currently stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// Short user-facing message; the view offers a retry.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Lifetime of a mounted view. Results checked against a torn-down scope
/// are discarded.
#[derive(Debug)]
pub struct ViewScope {
    alive: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

/// Handed to an in-flight load; says whether its result is still wanted.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    alive: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Token for a new load. Tokens from earlier loads stop being current.
    pub fn token(&self) -> LivenessToken {
        let issued = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        LivenessToken {
            alive: Arc::clone(&self.alive),
            generation: Arc::clone(&self.generation),
            issued,
        }
    }

    /// Mark the view as gone. Idempotent.
    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl LivenessToken {
    /// The view is mounted and no newer load has started.
    pub fn is_current(&self) -> bool {
        self.alive.load(Ordering::Acquire)
            && self.generation.load(Ordering::Acquire) == self.issued
    }
}

/// A view's [`LoadState`] bound to its [`ViewScope`].
#[derive(Debug, Default)]
pub struct ViewState<T> {
    state: LoadState<T>,
    scope: ViewScope,
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            scope: ViewScope::new(),
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Enter `Loading` and return the token the load must present.
    /// Also used for retries.
    pub fn begin(&mut self) -> LivenessToken {
        self.state = LoadState::Loading;
        self.scope.token()
    }

    /// Apply a finished load. Returns `false` if the result was discarded
    /// because the view was torn down or a newer load started.
    pub fn apply<E: Display>(&mut self, token: &LivenessToken, result: Result<T, E>) -> bool {
        if !token.is_current() {
            debug!("discarding stale load result");
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }

    pub fn teardown(&self) {
        self.scope.teardown();
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }
}
