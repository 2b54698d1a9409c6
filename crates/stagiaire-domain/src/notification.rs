use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type NotificationId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub fn new(
        id: NotificationId,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            kind,
            timestamp: Utc::now(),
            read: false,
        }
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_count() {
        let mut a = Notification::new("ntf-1".into(), "Hi", "Welcome", NotificationKind::Info);
        let b = Notification::new("ntf-2".into(), "Late", "Task overdue", NotificationKind::Warning);
        assert_eq!(unread_count(&[a.clone(), b.clone()]), 2);
        a.mark_read();
        assert_eq!(unread_count(&[a, b]), 1);
    }
}
