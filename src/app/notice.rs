use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Transient user-visible message (a toast)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// Result of flipping a listing's saved membership
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ToggleOutcome {
    Saved,
    Removed,
}

impl ToggleOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Saved => "Property saved successfully",
            Self::Removed => "Property removed from saved items",
        }
    }
}

/// What applying an action produced besides the new state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effect {
    pub notice: Option<Notice>,
    pub toggled: Option<ToggleOutcome>,
}

impl Effect {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            toggled: None,
        }
    }
}
