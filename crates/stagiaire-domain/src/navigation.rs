use serde::{Deserialize, Serialize};
use stagiaire_core::{StagiaireError, StagiaireResult};
use std::fmt;
use std::str::FromStr;

use crate::role::Role;

/// Sidebar sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dashboard,
    Interns,
    Supervisors,
    Projects,
    Kanban,
    Reports,
    Settings,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::Interns,
        Section::Supervisors,
        Section::Projects,
        Section::Kanban,
        Section::Reports,
        Section::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Interns => "interns",
            Section::Supervisors => "supervisors",
            Section::Projects => "projects",
            Section::Kanban => "kanban",
            Section::Reports => "reports",
            Section::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Interns => "Interns",
            Section::Supervisors => "Supervisors",
            Section::Projects => "Projects",
            Section::Kanban => "Kanban",
            Section::Reports => "Reports",
            Section::Settings => "Settings",
        }
    }

    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Section::Dashboard | Section::Projects | Section::Kanban | Section::Settings => &Role::ALL,
            Section::Interns | Section::Reports => &[Role::HrManager, Role::Supervisor],
            Section::Supervisors => &[Role::HrManager],
        }
    }

    pub fn is_allowed(self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }

    pub fn for_role(role: Role) -> Vec<Section> {
        Self::ALL
            .into_iter()
            .filter(|s| s.is_allowed(role))
            .collect()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" => Ok(Section::Dashboard),
            "interns" | "stagiaires" => Ok(Section::Interns),
            "supervisors" | "encadreurs" => Ok(Section::Supervisors),
            "projects" => Ok(Section::Projects),
            "kanban" => Ok(Section::Kanban),
            "reports" => Ok(Section::Reports),
            "settings" => Ok(Section::Settings),
            _ => Err(format!("Unknown section '{}'", s)),
        }
    }
}

/// Active-section state for one signed-in role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    role: Role,
    active: Section,
}

impl Navigator {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            active: Section::Dashboard,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn sections(&self) -> Vec<Section> {
        Section::for_role(self.role)
    }

    /// Switches section. A section the role may not see leaves the state as is.
    pub fn navigate(&mut self, section: Section) -> StagiaireResult<()> {
        if !section.is_allowed(self.role) {
            return Err(StagiaireError::PermissionDenied(format!(
                "{} cannot open {}",
                self.role.label(),
                section.title()
            )));
        }
        self.active = section;
        Ok(())
    }

    /// Moves to the next permitted section, wrapping around.
    pub fn next(&mut self) {
        let sections = self.sections();
        if let Some(idx) = sections.iter().position(|s| *s == self.active) {
            self.active = sections[(idx + 1) % sections.len()];
        }
    }

    pub fn prev(&mut self) {
        let sections = self.sections();
        if let Some(idx) = sections.iter().position(|s| *s == self.active) {
            self.active = sections[(idx + sections.len() - 1) % sections.len()];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_per_role() {
        use Section::*;
        assert_eq!(
            Section::for_role(Role::HrManager),
            vec![Dashboard, Interns, Supervisors, Projects, Kanban, Reports, Settings]
        );
        assert_eq!(
            Section::for_role(Role::Supervisor),
            vec![Dashboard, Interns, Projects, Kanban, Reports, Settings]
        );
        assert_eq!(
            Section::for_role(Role::Intern),
            vec![Dashboard, Projects, Kanban, Settings]
        );
    }

    #[test]
    fn test_navigate_rejects_forbidden_section() {
        let mut nav = Navigator::new(Role::Intern);
        nav.navigate(Section::Kanban).unwrap();
        let err = nav.navigate(Section::Reports).unwrap_err();
        assert!(matches!(err, StagiaireError::PermissionDenied(_)));
        assert_eq!(nav.active(), Section::Kanban);
    }

    #[test]
    fn test_next_wraps_over_permitted_sections() {
        let mut nav = Navigator::new(Role::Intern);
        nav.navigate(Section::Settings).unwrap();
        nav.next();
        assert_eq!(nav.active(), Section::Dashboard);
        nav.prev();
        assert_eq!(nav.active(), Section::Settings);
    }

    #[test]
    fn test_parse() {
        assert_eq!("encadreurs".parse::<Section>(), Ok(Section::Supervisors));
        assert!("search".parse::<Section>().is_err());
    }
}
