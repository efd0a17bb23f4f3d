//! Domain model for notifications and confirmation prompts.

mod confirmation;
mod ids;
mod notification;

pub use confirmation::{
    ConfirmationCallback, ConfirmationOptions, ConfirmationRequest, ConfirmationView,
    DEFAULT_CANCEL_LABEL, DEFAULT_CONFIRM_LABEL, DEFAULT_TITLE,
};
pub use ids::NotificationId;
pub use notification::{Notification, NotificationKind};
