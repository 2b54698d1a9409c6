use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three account roles. Wire names match the stored user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "responsable_rh")]
    HrManager,
    #[serde(rename = "encadreur")]
    Supervisor,
    #[serde(rename = "stagiaire")]
    Intern,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::HrManager, Role::Supervisor, Role::Intern];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::HrManager => "responsable_rh",
            Role::Supervisor => "encadreur",
            Role::Intern => "stagiaire",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::HrManager => "HR Manager",
            Role::Supervisor => "Supervisor",
            Role::Intern => "Intern",
        }
    }

    pub fn can_manage_projects(self) -> bool {
        matches!(self, Role::HrManager | Role::Supervisor)
    }

    pub fn can_manage_interns(self) -> bool {
        matches!(self, Role::HrManager | Role::Supervisor)
    }

    pub fn can_manage_supervisors(self) -> bool {
        self == Role::HrManager
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "responsable_rh" | "hr" | "hr_manager" => Ok(Role::HrManager),
            "encadreur" | "supervisor" => Ok(Role::Supervisor),
            "stagiaire" | "intern" => Ok(Role::Intern),
            _ => Err(format!(
                "Invalid role '{}'. Valid values: responsable_rh, encadreur, stagiaire",
                s
            )),
        }
    }
}
