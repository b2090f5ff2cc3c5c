use serde::{Deserialize, Serialize};

// Application approval status. Approved/rejected are terminal.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn is_processed(&self) -> bool {
        !matches!(self, ApprovalStatus::Pending)
    }
}

impl<'de> Deserialize<'de> for ApprovalStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ApprovalStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid approval status: '{s}'. Supported statuses: pending, approved, rejected"
            ))
        })
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "pending"),
            ApprovalStatus::Approved => write!(f, "approved"),
            ApprovalStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(format!("Invalid approval status: {s}")),
        }
    }
}

// Prospective student application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub id: i64,
    pub nisn: String,
    pub full_name: String,
    pub birth_place: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
    pub registration_paid: bool,
    pub approval_status: ApprovalStatus,
    pub user_id: i64,
    pub student_id: Option<i64>,
    pub processed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_not_processed() {
        assert!(!ApprovalStatus::Pending.is_processed());
        assert!(ApprovalStatus::Approved.is_processed());
        assert!(ApprovalStatus::Rejected.is_processed());
    }
}
