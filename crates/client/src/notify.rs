/// Titles mirror the toast headers of the mobile client this API serves.
pub const SUCCESS_TITLE: &str = "Éxito";
pub const ERROR_TITLE: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One user-facing toast/alert. The gateway emits exactly one per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: SUCCESS_TITLE.to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: ERROR_TITLE.to_string(),
            message: message.into(),
        }
    }
}

/// Notification sink injected into the gateway, so the core logic stays
/// testable without a UI runtime.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
