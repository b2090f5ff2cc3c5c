use serde::{Deserialize, Serialize};

// Student lifecycle status. Students are never hard-deleted; archiving is the
// terminal state.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    Active,
    AwaitingRereg,
    Graduated,
    Archived,
}

impl StudentStatus {
    pub const ACTIVE: &'static str = "active";
    pub const AWAITING_REREG: &'static str = "awaiting_rereg";
    pub const GRADUATED: &'static str = "graduated";
    pub const ARCHIVED: &'static str = "archived";
}

impl<'de> Deserialize<'de> for StudentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<StudentStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid student status: '{s}'. Supported statuses: active, awaiting_rereg, graduated, archived"
            ))
        })
    }
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StudentStatus::Active => StudentStatus::ACTIVE,
            StudentStatus::AwaitingRereg => StudentStatus::AWAITING_REREG,
            StudentStatus::Graduated => StudentStatus::GRADUATED,
            StudentStatus::Archived => StudentStatus::ARCHIVED,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            StudentStatus::ACTIVE => Ok(StudentStatus::Active),
            StudentStatus::AWAITING_REREG => Ok(StudentStatus::AwaitingRereg),
            StudentStatus::GRADUATED => Ok(StudentStatus::Graduated),
            StudentStatus::ARCHIVED => Ok(StudentStatus::Archived),
            _ => Err(format!("Invalid student status: {s}")),
        }
    }
}

// Student entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub nisn: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
    pub status: StudentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in [
            StudentStatus::Active,
            StudentStatus::AwaitingRereg,
            StudentStatus::Graduated,
            StudentStatus::Archived,
        ] {
            assert_eq!(s.to_string().parse::<StudentStatus>().unwrap(), s);
        }
    }
}
