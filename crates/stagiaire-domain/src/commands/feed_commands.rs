use super::{Command, CommandContext};
use crate::{Activity, ActivityKind, Notification, NotificationKind};
use stagiaire_core::{StagiaireError, StagiaireResult};

/// Prepend an entry to the activity feed.
pub struct RecordActivity {
    pub actor_name: String,
    pub actor_avatar: String,
    pub action: String,
    pub target: String,
    pub kind: ActivityKind,
}

impl Command for RecordActivity {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let activity = Activity::new(
            context.counters.next_activity(),
            self.actor_name.clone(),
            self.actor_avatar.clone(),
            self.action.clone(),
            self.target.clone(),
            self.kind,
        );
        context.activities.insert(0, activity);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Record activity: {} {}", self.action, self.target)
    }
}

pub struct PushNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Command for PushNotification {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let notification = Notification::new(
            context.counters.next_notification(),
            self.title.clone(),
            self.message.clone(),
            self.kind,
        );
        context.notifications.insert(0, notification);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Notify: {}", self.title)
    }
}

/// Mark one notification read, or all of them when `notification_id` is `None`.
pub struct MarkNotificationRead {
    pub notification_id: Option<String>,
}

impl Command for MarkNotificationRead {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        match &self.notification_id {
            Some(id) => context
                .notifications
                .iter_mut()
                .find(|n| &n.id == id)
                .ok_or_else(|| StagiaireError::not_found("Notification", id))?
                .mark_read(),
            None => context.notifications.iter_mut().for_each(Notification::mark_read),
        }
        Ok(())
    }

    fn description(&self) -> String {
        match &self.notification_id {
            Some(id) => format!("Mark notification {} read", id),
            None => "Mark all notifications read".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, notification::unread_count};

    #[test]
    fn test_record_activity_is_newest_first() {
        let mut data = fixtures::dataset();
        data.execute(&RecordActivity {
            actor_name: "Jean Dubois".into(),
            actor_avatar: String::new(),
            action: "created task".into(),
            target: "Add CI".into(),
            kind: ActivityKind::Task,
        })
        .unwrap();
        assert_eq!(data.activities[0].id, "act-005");
        assert_eq!(data.activities[0].summary(), "Jean Dubois created task Add CI");
    }

    #[test]
    fn test_mark_read() {
        let mut data = fixtures::dataset();
        assert_eq!(unread_count(&data.notifications), 2);
        data.execute(&MarkNotificationRead {
            notification_id: Some("ntf-002".into()),
        })
        .unwrap();
        assert_eq!(unread_count(&data.notifications), 1);
        data.execute(&MarkNotificationRead {
            notification_id: None,
        })
        .unwrap();
        assert_eq!(unread_count(&data.notifications), 0);
        assert!(data
            .execute(&MarkNotificationRead {
                notification_id: Some("ntf-404".into()),
            })
            .is_err());
    }
}
