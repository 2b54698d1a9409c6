use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type ActivityId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Project,
    Task,
    Intern,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityKind::Project => "project",
            ActivityKind::Task => "task",
            ActivityKind::Intern => "intern",
        };
        f.write_str(s)
    }
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub actor_name: String,
    #[serde(default)]
    pub actor_avatar: String,
    pub action: String,
    pub target: String,
    pub kind: ActivityKind,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    pub fn new(
        id: ActivityId,
        actor_name: String,
        actor_avatar: String,
        action: impl Into<String>,
        target: impl Into<String>,
        kind: ActivityKind,
    ) -> Self {
        Self {
            id,
            actor_name,
            actor_avatar,
            action: action.into(),
            target: target.into(),
            kind,
            timestamp: Utc::now(),
        }
    }

    /// "Jean Dubois created task Set up CI"
    pub fn summary(&self) -> String {
        format!("{} {} {}", self.actor_name, self.action, self.target)
    }
}

/// Most recent first, at most `limit` entries.
pub fn recent(activities: &[Activity], limit: usize) -> Vec<&Activity> {
    let mut sorted: Vec<&Activity> = activities.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_recent_sorts_newest_first_and_truncates() {
        let mut older = Activity::new(
            "act-1".into(),
            "Sophie Martin".into(),
            String::new(),
            "created project",
            "Website",
            ActivityKind::Project,
        );
        older.timestamp -= Duration::hours(2);
        let newer = Activity::new(
            "act-2".into(),
            "Jean Dubois".into(),
            String::new(),
            "completed task",
            "Set up CI",
            ActivityKind::Task,
        );
        let activities = vec![older, newer];

        let feed = recent(&activities, 1);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, "act-2");
        assert_eq!(feed[0].summary(), "Jean Dubois completed task Set up CI");
    }
}
