use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intern::InternId;
use crate::role::Role;

pub type UserId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An account record. Passwords are plain fixture values compared in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub profile: UserProfile,
    pub role: Role,
    /// Set on intern accounts.
    #[serde(default)]
    pub supervisor_id: Option<UserId>,
    /// Interns declared under a supervisor account.
    #[serde(default)]
    pub intern_ids: Vec<InternId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: UserId,
        email: String,
        password: String,
        profile: UserProfile,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            password,
            profile,
            role,
            supervisor_id: None,
            intern_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_auth_user(&self) -> AuthUser {
        AuthUser {
            id: self.id.clone(),
            email: self.email.clone(),
            profile: self.profile.clone(),
            role: self.role,
        }
    }

    pub fn supervises(&self, intern_id: &str) -> bool {
        self.intern_ids.iter().any(|id| id == intern_id)
    }

    pub fn add_intern(&mut self, intern_id: InternId) {
        if !self.supervises(&intern_id) {
            self.intern_ids.push(intern_id);
            self.updated_at = Utc::now();
        }
    }

    pub fn update_profile(&mut self, updates: ProfileUpdate) {
        if let Some(first_name) = updates.first_name {
            self.profile.first_name = first_name;
        }
        if let Some(last_name) = updates.last_name {
            self.profile.last_name = last_name;
        }
        if let Some(department) = updates.department {
            self.profile.department = department;
        }
        if let Some(phone) = updates.phone {
            self.profile.phone = phone;
        }
        if let Some(avatar_url) = updates.avatar_url {
            self.profile.avatar_url = avatar_url;
        }
        self.updated_at = Utc::now();
    }
}

/// The signed-in user as seen by the UI; never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
    pub profile: UserProfile,
    pub role: Role,
}

impl AuthUser {
    pub fn display_name(&self) -> String {
        self.profile.display_name()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.department.is_none()
            && self.phone.is_none()
            && self.avatar_url.is_none()
    }
}

/// Input of the "add supervisor" form.
#[derive(Debug, Clone)]
pub struct NewSupervisor {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub phone: Option<String>,
    /// Initial password; the fixture password when not given.
    pub password: Option<String>,
}

/// Supervisor listing entry: the account plus the interns declared under it.
#[derive(Debug, Clone, Serialize)]
pub struct SupervisorView {
    #[serde(flatten)]
    pub user: AuthUser,
    pub intern_ids: Vec<InternId>,
    pub intern_count: usize,
}

impl From<&User> for SupervisorView {
    fn from(user: &User) -> Self {
        Self {
            user: user.to_auth_user(),
            intern_ids: user.intern_ids.clone(),
            intern_count: user.intern_ids.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            first_name: "Jean".into(),
            last_name: "Dubois".into(),
            department: "Informatique".into(),
            phone: String::new(),
            avatar_url: String::new(),
        }
    }

    #[test]
    fn test_auth_user_has_no_password() {
        let user = User::new(
            "enc-9".into(),
            "jean@company.com".into(),
            "secret".into(),
            profile(),
            Role::Supervisor,
        );
        let json = serde_json::to_string(&user.to_auth_user()).unwrap();
        assert!(!json.contains("secret"));
        assert_eq!(user.to_auth_user().display_name(), "Jean Dubois");
    }

    #[test]
    fn test_add_intern_is_idempotent() {
        let mut user = User::new(
            "enc-9".into(),
            "jean@company.com".into(),
            "secret".into(),
            profile(),
            Role::Supervisor,
        );
        user.add_intern("stg-1".into());
        user.add_intern("stg-1".into());
        assert_eq!(user.intern_ids, vec!["stg-1".to_string()]);
        assert!(user.supervises("stg-1"));
    }

    #[test]
    fn test_update_profile_only_touches_given_fields() {
        let mut user = User::new(
            "enc-9".into(),
            "jean@company.com".into(),
            "secret".into(),
            profile(),
            Role::Supervisor,
        );
        user.update_profile(ProfileUpdate {
            phone: Some("+33 6 00 00 00 00".into()),
            ..Default::default()
        });
        assert_eq!(user.profile.phone, "+33 6 00 00 00 00");
        assert_eq!(user.profile.first_name, "Jean");
    }
}
