use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type InternId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InternStatus {
    Active,
    Inactive,
}

impl InternStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InternStatus::Active => "active",
            InternStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for InternStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InternStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(InternStatus::Active),
            "inactive" => Ok(InternStatus::Inactive),
            _ => Err(format!(
                "Invalid intern status '{}'. Valid values: active, inactive",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intern {
    pub id: InternId,
    pub name: String,
    pub email: String,
    pub department: String,
    #[serde(default)]
    pub avatar: String,
    pub status: InternStatus,
    pub start_date: NaiveDate,
    /// Overall progress, 0 to 100.
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Intern {
    pub fn new(
        id: InternId,
        name: String,
        email: String,
        department: String,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            department,
            avatar: String::new(),
            status: InternStatus::Active,
            start_date,
            progress: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == InternStatus::Active
    }

    pub fn update(&mut self, updates: InternUpdate) {
        if let Some(name) = updates.name {
            self.name = name;
        }
        if let Some(department) = updates.department {
            self.department = department;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
        if let Some(progress) = updates.progress {
            self.progress = progress.min(100);
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Default)]
pub struct InternUpdate {
    pub name: Option<String>,
    pub department: Option<String>,
    pub status: Option<InternStatus>,
    pub progress: Option<u8>,
}

/// Input of the "add intern" form.
#[derive(Debug, Clone)]
pub struct NewIntern {
    pub name: String,
    pub email: String,
    pub department: String,
    pub start_date: Option<NaiveDate>,
    /// Supervisor account the intern is declared under.
    pub supervisor_id: Option<String>,
}

/// Intern listing filters; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct InternFilter {
    pub department: Option<String>,
    pub status: Option<InternStatus>,
}

impl InternFilter {
    pub fn matches(&self, intern: &Intern) -> bool {
        let department_ok = self
            .department
            .as_deref()
            .map_or(true, |d| intern.department.eq_ignore_ascii_case(d));
        let status_ok = self.status.map_or(true, |s| intern.status == s);
        department_ok && status_ok
    }
}
