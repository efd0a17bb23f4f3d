//! The confirmation prompt singleton and its options.

use std::fmt;

/// Zero-argument continuation run when a prompt is answered.
pub type ConfirmationCallback = Box<dyn FnOnce() + Send + 'static>;

/// Title used when a request omits one.
pub const DEFAULT_TITLE: &str = "Confirm";
/// Accept button label used when a request omits one.
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
/// Decline button label used when a request omits one.
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// Options for issuing a confirmation prompt.
///
/// Only the message is required. Labels left unset, or set to an empty
/// string, fall back to the defaults.
#[derive(Default)]
pub struct ConfirmationOptions {
    message: String,
    title: Option<String>,
    confirm_label: Option<String>,
    cancel_label: Option<String>,
    on_accept: Option<ConfirmationCallback>,
    on_decline: Option<ConfirmationCallback>,
}

impl ConfirmationOptions {
    /// Creates options for a prompt showing `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Sets the prompt title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the accept button label.
    #[must_use]
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Sets the decline button label.
    #[must_use]
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    /// Sets the continuation run when the prompt is accepted.
    #[must_use]
    pub fn on_accept(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_accept = Some(Box::new(callback));
        self
    }

    /// Sets the continuation run when the prompt is declined.
    #[must_use]
    pub fn on_decline(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_decline = Some(Box::new(callback));
        self
    }

    /// Detaches the callbacks so a caller can wrap them.
    pub(crate) fn take_callbacks(
        &mut self,
    ) -> (Option<ConfirmationCallback>, Option<ConfirmationCallback>) {
        (self.on_accept.take(), self.on_decline.take())
    }
}

impl fmt::Debug for ConfirmationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmationOptions")
            .field("message", &self.message)
            .field("title", &self.title)
            .field("confirm_label", &self.confirm_label)
            .field("cancel_label", &self.cancel_label)
            .field("on_accept", &self.on_accept.is_some())
            .field("on_decline", &self.on_decline.is_some())
            .finish()
    }
}

fn label_or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// The active (or hidden) confirmation prompt.
///
/// At most one exists at a time. Issuing a new request replaces the current
/// one outright, dropping its callbacks unrun.
pub struct ConfirmationRequest {
    visible: bool,
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    on_accept: Option<ConfirmationCallback>,
    on_decline: Option<ConfirmationCallback>,
}

impl ConfirmationRequest {
    /// Returns the hidden default prompt.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            title: DEFAULT_TITLE.to_owned(),
            message: String::new(),
            confirm_label: DEFAULT_CONFIRM_LABEL.to_owned(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_owned(),
            on_accept: None,
            on_decline: None,
        }
    }

    /// Builds a visible prompt from `options`, applying label defaults.
    #[must_use]
    pub fn from_options(options: ConfirmationOptions) -> Self {
        Self {
            visible: true,
            title: label_or_default(options.title, DEFAULT_TITLE),
            message: options.message,
            confirm_label: label_or_default(options.confirm_label, DEFAULT_CONFIRM_LABEL),
            cancel_label: label_or_default(options.cancel_label, DEFAULT_CANCEL_LABEL),
            on_accept: options.on_accept,
            on_decline: options.on_decline,
        }
    }

    /// Returns `true` while the prompt is showing.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Removes both callbacks, returning `(on_accept, on_decline)`.
    ///
    /// After this call neither callback can run again through this request.
    pub fn take_callbacks(
        &mut self,
    ) -> (Option<ConfirmationCallback>, Option<ConfirmationCallback>) {
        (self.on_accept.take(), self.on_decline.take())
    }

    /// Returns a display snapshot without the callbacks.
    #[must_use]
    pub fn view(&self) -> ConfirmationView {
        ConfirmationView {
            visible: self.visible,
            title: self.title.clone(),
            message: self.message.clone(),
            confirm_label: self.confirm_label.clone(),
            cancel_label: self.cancel_label.clone(),
        }
    }
}

impl Default for ConfirmationRequest {
    fn default() -> Self {
        Self::hidden()
    }
}

impl fmt::Debug for ConfirmationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmationRequest")
            .field("view", &self.view())
            .field("on_accept", &self.on_accept.is_some())
            .field("on_decline", &self.on_decline.is_some())
            .finish()
    }
}

/// What the presentation layer renders for the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    /// Whether the prompt is showing.
    pub visible: bool,
    /// Prompt title.
    pub title: String,
    /// Prompt body.
    pub message: String,
    /// Accept button label.
    pub confirm_label: String,
    /// Decline button label.
    pub cancel_label: String,
}

impl Default for ConfirmationView {
    fn default() -> Self {
        ConfirmationRequest::hidden().view()
    }
}
