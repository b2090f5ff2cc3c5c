use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicYear {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: i64,
    pub name: String,
    pub level: Option<String>,
    pub spp_amount: i64,
    pub homeroom_teacher: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Active => write!(f, "active"),
            EnrollmentStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EnrollmentStatus::Active),
            "inactive" => Ok(EnrollmentStatus::Inactive),
            _ => Err(format!("Invalid enrollment status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub academic_year_id: i64,
    pub status: EnrollmentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Joined view used by billing generation: one row per active enrollment
/// with the data needed to price and label the billing.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveEnrollment {
    pub student_id: i64,
    pub student_name: String,
    pub nisn: String,
    pub class_id: i64,
    pub class_name: String,
    pub spp_amount: i64,
}
