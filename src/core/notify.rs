//! Notification surface: short-lived messages (toasts) raised by workbook
//! operations, plus the history of everything shown in the session.

use serde::Serialize;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// 0 keeps the toast until dismissed.
    pub duration_ms: u64,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    pending: Vec<Toast>,
    history: Vec<Toast>,
    next_id: u64,
    default_duration_ms: u64,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::with_duration(DEFAULT_TOAST_DURATION_MS)
    }
}

impl Notifications {
    pub fn with_duration(default_duration_ms: u64) -> Self {
        Self {
            pending: Vec::new(),
            history: Vec::new(),
            next_id: 1,
            default_duration_ms,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let duration = self.default_duration_ms;
        self.push_with_duration(kind, message, duration)
    }

    pub fn push_with_duration(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        duration_ms: u64,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let toast = Toast {
            id,
            message: message.into(),
            kind,
            duration_ms,
        };
        tracing::debug!(id, kind = kind.as_str(), message = %toast.message, "toast");

        self.history.push(toast.clone());
        self.pending.push(toast);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Warning, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    /// Remove a toast before it expires. Returns false if it was not pending.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Toasts not yet rendered; they stay in the history.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[Toast] {
        &self.pending
    }

    pub fn history(&self) -> &[Toast] {
        &self.history
    }

    pub fn last(&self) -> Option<&Toast> {
        self.history.last()
    }
}
