//! Notification entity.

use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::NotificationId;
use crate::timestamp::Timestamp;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// An operation succeeded.
    Success,
    /// An operation failed.
    Error,
    /// Something needs the user's attention.
    Warning,
    /// Neutral information.
    Info,
}

impl NotificationKind {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    message: String,
    duration_ms: u64,
    created_at: Timestamp,
}

impl Notification {
    /// Creates a notification stamped with the current clock time.
    ///
    /// A `duration_ms` of zero means the notification stays until it is
    /// dismissed explicitly.
    #[must_use]
    pub fn new(
        kind: NotificationKind,
        message: impl Into<String>,
        duration_ms: u64,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            duration_ms,
            created_at: Timestamp::now(clock),
        }
    }

    /// Returns the notification identifier.
    #[must_use]
    pub const fn id(&self) -> &NotificationId {
        &self.id
    }

    /// Returns the notification kind.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Returns the display message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the display duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Returns `true` when the notification never expires on its own.
    #[must_use]
    pub const fn is_sticky(&self) -> bool {
        self.duration_ms == 0
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
