//! Fixture sign-in.
//!
//! Credentials are compared in memory against the user list. Persisting the
//! session pointer is left to the storage layer.

use serde::{Deserialize, Serialize};
use stagiaire_core::{StagiaireError, StagiaireResult};

use crate::user::{AuthUser, User};

pub const INVALID_CREDENTIALS: &str = "Incorrect email or password";

/// Email is trimmed and compared case-insensitively; password must match exactly.
pub fn authenticate(users: &[User], email: &str, password: &str) -> StagiaireResult<AuthUser> {
    let email = email.trim();
    if email.is_empty() {
        return Err(StagiaireError::required("Email"));
    }
    if password.is_empty() {
        return Err(StagiaireError::required("Password"));
    }

    match users
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password)
    {
        Some(user) => {
            tracing::info!(user_id = %user.id, role = user.role.as_str(), "signed in");
            Ok(user.to_auth_user())
        }
        None => {
            tracing::debug!(email, "sign-in rejected");
            Err(StagiaireError::Authentication(INVALID_CREDENTIALS.to_string()))
        }
    }
}

/// Looks up a stored session id. Unknown ids yield `None`.
pub fn restore_session(users: &[User], stored_id: Option<&str>) -> Option<AuthUser> {
    let id = stored_id?;
    let user = users.iter().find(|u| u.id == id);
    if user.is_none() {
        tracing::warn!(user_id = id, "stored session refers to an unknown user");
    }
    user.map(User::to_auth_user)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<AuthUser>,
}

impl Session {
    pub fn new(user: Option<AuthUser>) -> Self {
        Self { user }
    }

    pub fn sign_in(&mut self, user: AuthUser) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) -> Option<AuthUser> {
        self.user.take()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::role::Role;

    #[test]
    fn test_every_fixture_pair_signs_in() {
        let users = fixtures::users();
        for user in &users {
            let auth = authenticate(&users, &user.email, fixtures::FIXTURE_PASSWORD).unwrap();
            assert_eq!(auth.id, user.id);
            assert_eq!(auth.role, user.role);
        }
    }

    #[test]
    fn test_email_is_trimmed_and_case_insensitive() {
        let users = fixtures::users();
        let auth = authenticate(&users, "  RH@Company.com ", "password123").unwrap();
        assert_eq!(auth.role, Role::HrManager);
    }

    #[test]
    fn test_wrong_pair_fails_with_message() {
        let users = fixtures::users();
        for (email, password) in [
            ("rh@company.com", "wrong"),
            ("nobody@company.com", "password123"),
            ("rh@company.com", "PASSWORD123"),
        ] {
            let err = authenticate(&users, email, password).unwrap_err();
            assert!(matches!(err, StagiaireError::Authentication(_)));
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_missing_fields_are_validation_errors() {
        let users = fixtures::users();
        assert!(matches!(
            authenticate(&users, " ", "password123"),
            Err(StagiaireError::Validation(_))
        ));
        assert!(matches!(
            authenticate(&users, "rh@company.com", ""),
            Err(StagiaireError::Validation(_))
        ));
    }

    #[test]
    fn test_restore_session() {
        let users = fixtures::users();
        assert_eq!(
            restore_session(&users, Some("enc-002")).map(|u| u.id),
            Some("enc-002".to_string())
        );
        assert!(restore_session(&users, Some("ghost")).is_none());
        assert!(restore_session(&users, None).is_none());
    }

    #[test]
    fn test_sign_out_clears_user() {
        let users = fixtures::users();
        let mut session = Session::default();
        session.sign_in(users[0].to_auth_user());
        assert!(session.is_authenticated());
        assert!(session.sign_out().is_some());
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id(), None);
    }
}
