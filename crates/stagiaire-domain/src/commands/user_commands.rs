use super::{required, Command, CommandContext};
use crate::fixtures::FIXTURE_PASSWORD;
use crate::{NewSupervisor, ProfileUpdate, Role, User, UserProfile};
use stagiaire_core::{StagiaireError, StagiaireResult};

/// Create a supervisor account.
pub struct CreateSupervisor {
    pub supervisor: NewSupervisor,
}

impl Command for CreateSupervisor {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let new = &self.supervisor;
        let first_name = required(&new.first_name, "First name")?;
        let last_name = required(&new.last_name, "Last name")?;
        let email = required(&new.email, "Email")?;
        let department = required(&new.department, "Department")?;
        let password = new.password.as_deref().unwrap_or(FIXTURE_PASSWORD);
        if password.is_empty() {
            return Err(StagiaireError::required("Password"));
        }
        if context
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&email))
        {
            return Err(StagiaireError::Validation(format!(
                "An account with email {} already exists",
                email
            )));
        }

        let user = User::new(
            context.counters.next_supervisor(),
            email,
            password.to_string(),
            UserProfile {
                first_name,
                last_name,
                department,
                phone: new.phone.clone().unwrap_or_default(),
                avatar_url: String::new(),
            },
            Role::Supervisor,
        );
        context.users.push(user);
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Add supervisor: '{} {}'",
            self.supervisor.first_name, self.supervisor.last_name
        )
    }
}

pub struct UpdateProfile {
    pub user_id: String,
    pub updates: ProfileUpdate,
}

impl Command for UpdateProfile {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let mut updates = self.updates.clone();
        if let Some(first_name) = updates.first_name.take() {
            updates.first_name = Some(required(&first_name, "First name")?);
        }
        if let Some(last_name) = updates.last_name.take() {
            updates.last_name = Some(required(&last_name, "Last name")?);
        }
        let user = context
            .users
            .iter_mut()
            .find(|u| u.id == self.user_id)
            .ok_or_else(|| StagiaireError::not_found("User", &self.user_id))?;
        user.update_profile(updates);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update profile of {}", self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn supervisor(email: &str) -> CreateSupervisor {
        CreateSupervisor {
            supervisor: NewSupervisor {
                first_name: "Paul".into(),
                last_name: "Girard".into(),
                email: email.into(),
                department: "Finance".into(),
                phone: None,
                password: None,
            },
        }
    }

    #[test]
    fn test_create_supervisor() {
        let mut data = fixtures::dataset();
        data.execute(&supervisor("paul@company.com")).unwrap();
        let user = data.users.last().unwrap();
        assert_eq!(user.id, "enc-003");
        assert_eq!(user.role, Role::Supervisor);
        assert!(user.intern_ids.is_empty());
        assert_eq!(user.password, FIXTURE_PASSWORD);
    }

    #[test]
    fn test_create_supervisor_email_must_be_unique() {
        let mut data = fixtures::dataset();
        let err = data.execute(&supervisor("rh@company.com")).unwrap_err();
        assert!(matches!(err, StagiaireError::Validation(_)));
        assert_eq!(data.users.len(), 6);
    }

    #[test]
    fn test_update_profile() {
        let mut data = fixtures::dataset();
        data.execute(&UpdateProfile {
            user_id: "stg-001".into(),
            updates: ProfileUpdate {
                phone: Some("+33 6 99 99 99 99".into()),
                ..Default::default()
            },
        })
        .unwrap();
        assert_eq!(data.user("stg-001").unwrap().profile.phone, "+33 6 99 99 99 99");
        assert!(data
            .execute(&UpdateProfile {
                user_id: "ghost".into(),
                updates: ProfileUpdate::default(),
            })
            .is_err());
    }
}
