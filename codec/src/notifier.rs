//! Diagnostics for serializing raw pointer bits.
//!
//! Encoding a pointer stores an address, which is meaningless once it
//! leaves the process. [`MisuseNotifier`] decides whether that deserves a
//! warning or an error and calls the handler the application registered.
//! Encoding always proceeds; the notifier only reports.

use core::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::pod::Pod;

/// Zero-argument diagnostic callback.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Which diagnostics are active. Both are on by default.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotifierPolicy {
    pub warn_on_pointer: bool,
    pub error_on_pointer: bool,
}

impl NotifierPolicy {
    pub const ALL_ACTIVE: Self = Self {
        warn_on_pointer: true,
        error_on_pointer: true,
    };

    pub const SILENT: Self = Self {
        warn_on_pointer: false,
        error_on_pointer: false,
    };
}

impl Default for NotifierPolicy {
    fn default() -> Self {
        Self::ALL_ACTIVE
    }
}

/// The diagnostic raised for one encode call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MisuseDiagnostic {
    Warning,
    Error,
}

/// Policy plus the warning and error handlers.
#[derive(Clone, Default)]
pub struct MisuseNotifier {
    policy: NotifierPolicy,
    on_warn: Option<Handler>,
    on_error: Option<Handler>,
}

impl MisuseNotifier {
    #[must_use]
    pub const fn new(policy: NotifierPolicy) -> Self {
        Self {
            policy,
            on_warn: None,
            on_error: None,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> NotifierPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: NotifierPolicy) {
        self.policy = policy;
    }

    pub fn set_warn_active(&mut self, active: bool) {
        self.policy.warn_on_pointer = active;
    }

    pub fn set_error_active(&mut self, active: bool) {
        self.policy.error_on_pointer = active;
    }

    /// Replaces the warning handler and returns the previous one.
    pub fn set_on_warn<F>(&mut self, action: F) -> Option<Handler>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_warn.replace(Arc::new(action))
    }

    /// Replaces the error handler and returns the previous one. Errors take
    /// precedence over warnings.
    pub fn set_on_error<F>(&mut self, action: F) -> Option<Handler>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_error.replace(Arc::new(action))
    }

    pub fn clear_handlers(&mut self) {
        self.on_warn = None;
        self.on_error = None;
    }

    /// Decides which diagnostic encoding a `T` raises, without calling
    /// anything.
    #[must_use]
    pub fn resolve<T: Pod>(&self) -> Option<MisuseDiagnostic> {
        if !T::IS_POINTER {
            return None;
        }

        // Error overrides warning; at most one fires per call.
        if self.policy.error_on_pointer {
            Some(MisuseDiagnostic::Error)
        } else if self.policy.warn_on_pointer {
            Some(MisuseDiagnostic::Warning)
        } else {
            None
        }
    }

    /// Resolves the diagnostic for `T` and calls its handler, if one is
    /// registered. Returns the diagnostic even when no handler ran.
    pub fn check<T: Pod>(&self) -> Option<MisuseDiagnostic> {
        let diagnostic = self.resolve::<T>()?;
        let handler = match diagnostic {
            MisuseDiagnostic::Warning => self.on_warn.as_ref(),
            MisuseDiagnostic::Error => self.on_error.as_ref(),
        };

        log::debug!(
            "serializing pointer type `{}` raised {:?} (handler registered: {})",
            core::any::type_name::<T>(),
            diagnostic,
            handler.is_some()
        );

        if let Some(handler) = handler {
            handler();
        }

        Some(diagnostic)
    }
}

impl fmt::Debug for MisuseNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MisuseNotifier")
            .field("policy", &self.policy)
            .field("on_warn", &self.on_warn.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
