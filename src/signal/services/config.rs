//! Signal store configuration.

/// Display duration applied when a caller does not pick one.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Configuration for [`SignalStore`](super::SignalStore).
///
/// # Examples
///
/// ```
/// use tasklist_core::signal::services::SignalConfig;
///
/// let config = SignalConfig::default();
/// assert_eq!(config.default_duration_ms, 3000);
///
/// let sticky = SignalConfig::default().with_default_duration_ms(0);
/// assert_eq!(sticky.default_duration_ms, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalConfig {
    /// Duration used by `notify` and the kind-specific helpers. Zero keeps
    /// notifications until they are dismissed.
    pub default_duration_ms: u64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
        }
    }
}

impl SignalConfig {
    /// Overrides the default display duration.
    #[must_use]
    pub const fn with_default_duration_ms(mut self, duration_ms: u64) -> Self {
        self.default_duration_ms = duration_ms;
        self
    }
}
