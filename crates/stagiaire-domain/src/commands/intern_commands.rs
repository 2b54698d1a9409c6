use chrono::Utc;

use super::{required, Command, CommandContext};
use crate::{Intern, InternUpdate, NewIntern, Role};
use stagiaire_core::{StagiaireError, StagiaireResult};

/// Add an intern record, optionally declaring it under a supervisor.
pub struct CreateIntern {
    pub intern: NewIntern,
}

impl Command for CreateIntern {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let name = required(&self.intern.name, "Name")?;
        let email = required(&self.intern.email, "Email")?;
        let department = required(&self.intern.department, "Department")?;

        if context
            .interns
            .iter()
            .any(|i| i.email.eq_ignore_ascii_case(&email))
        {
            return Err(StagiaireError::Validation(format!(
                "An intern with email {} already exists",
                email
            )));
        }
        if let Some(supervisor_id) = &self.intern.supervisor_id {
            if !context
                .users
                .iter()
                .any(|u| &u.id == supervisor_id && u.role == Role::Supervisor)
            {
                return Err(StagiaireError::not_found("Supervisor", supervisor_id));
            }
        }

        let start_date = self
            .intern
            .start_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let mut intern = Intern::new(
            context.counters.next_intern(),
            name,
            email,
            department,
            start_date,
        );
        intern.avatar = format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
            intern.name.split(' ').next().unwrap_or_default()
        );

        if let Some(supervisor_id) = &self.intern.supervisor_id {
            if let Some(supervisor) = context.users.iter_mut().find(|u| &u.id == supervisor_id) {
                supervisor.add_intern(intern.id.clone());
            }
        }
        context.interns.push(intern);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add intern: '{}'", self.intern.name)
    }
}

pub struct UpdateIntern {
    pub intern_id: String,
    pub updates: InternUpdate,
}

impl Command for UpdateIntern {
    fn execute(&self, context: &mut CommandContext) -> StagiaireResult<()> {
        let mut updates = self.updates.clone();
        if let Some(name) = updates.name.take() {
            updates.name = Some(required(&name, "Name")?);
        }
        if let Some(department) = updates.department.take() {
            updates.department = Some(required(&department, "Department")?);
        }
        let intern = context
            .interns
            .iter_mut()
            .find(|i| i.id == self.intern_id)
            .ok_or_else(|| StagiaireError::not_found("Intern", &self.intern_id))?;
        intern.update(updates);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update intern {}", self.intern_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, InternStatus};
    use chrono::NaiveDate;

    fn new_intern(email: &str, supervisor: Option<&str>) -> NewIntern {
        NewIntern {
            name: "Nina Garnier".into(),
            email: email.into(),
            department: "Marketing".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1),
            supervisor_id: supervisor.map(String::from),
        }
    }

    #[test]
    fn test_create_intern_links_supervisor() {
        let mut data = fixtures::dataset();
        data.execute(&CreateIntern {
            intern: new_intern("nina@company.com", Some("enc-002")),
        })
        .unwrap();
        let intern = data.interns.last().unwrap();
        assert_eq!(intern.id, "stg-005");
        assert!(intern.is_active());
        assert!(intern.avatar.ends_with("seed=Nina"));
        assert!(data.user("enc-002").unwrap().supervises("stg-005"));
    }

    #[test]
    fn test_create_intern_rejects_duplicate_email() {
        let mut data = fixtures::dataset();
        let err = data
            .execute(&CreateIntern {
                intern: new_intern("STAGIAIRE@company.com", None),
            })
            .unwrap_err();
        assert!(matches!(err, StagiaireError::Validation(_)));
    }

    #[test]
    fn test_create_intern_unknown_supervisor() {
        let mut data = fixtures::dataset();
        let err = data
            .execute(&CreateIntern {
                intern: new_intern("nina@company.com", Some("rh-001")),
            })
            .unwrap_err();
        assert!(matches!(err, StagiaireError::NotFound(_)));
        assert_eq!(data.interns.len(), 4);
    }

    #[test]
    fn test_update_intern() {
        let mut data = fixtures::dataset();
        data.execute(&UpdateIntern {
            intern_id: "stg-002".into(),
            updates: InternUpdate {
                status: Some(InternStatus::Inactive),
                ..Default::default()
            },
        })
        .unwrap();
        assert!(!data.intern("stg-002").unwrap().is_active());

        let err = data
            .execute(&UpdateIntern {
                intern_id: "stg-002".into(),
                updates: InternUpdate {
                    name: Some("  ".into()),
                    ..Default::default()
                },
            })
            .unwrap_err();
        assert!(matches!(err, StagiaireError::Validation(_)));
    }
}
