use serde::{Deserialize, Serialize};

// User role
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Treasurer,
    Headmaster,
    Student,
    NewStudent,
    Parent,
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const TREASURER: &'static str = "treasurer";
    pub const HEADMASTER: &'static str = "headmaster";
    pub const STUDENT: &'static str = "student";
    pub const NEW_STUDENT: &'static str = "new_student";
    pub const PARENT: &'static str = "parent";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    /// Roles allowed to mutate treasury data.
    pub fn treasury_roles() -> &'static [&'static UserRole] {
        &[&Self::Treasurer, &Self::Admin]
    }
    /// Roles allowed to read treasury data and reports.
    pub fn finance_read_roles() -> &'static [&'static UserRole] {
        &[&Self::Treasurer, &Self::Admin, &Self::Headmaster]
    }
    /// Roles that pay billings for a student.
    pub fn payer_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Parent]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[
            &Self::Admin,
            &Self::Treasurer,
            &Self::Headmaster,
            &Self::Student,
            &Self::NewStudent,
            &Self::Parent,
        ]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid user role: '{s}'. Supported roles: admin, treasurer, headmaster, student, new_student, parent"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Admin => UserRole::ADMIN,
            UserRole::Treasurer => UserRole::TREASURER,
            UserRole::Headmaster => UserRole::HEADMASTER,
            UserRole::Student => UserRole::STUDENT,
            UserRole::NewStudent => UserRole::NEW_STUDENT,
            UserRole::Parent => UserRole::PARENT,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::TREASURER => Ok(UserRole::Treasurer),
            UserRole::HEADMASTER => Ok(UserRole::Headmaster),
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::NEW_STUDENT => Ok(UserRole::NewStudent),
            UserRole::PARENT => Ok(UserRole::Parent),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// User status
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(serde::de::Error::custom(format!(
                "invalid user status: '{s}'. Supported statuses: active, inactive"
            ))),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(format!("Invalid user status: {s}")),
        }
    }
}

// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing, default)] // never echoed in JSON responses
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub display_name: Option<String>,
    pub phone: Option<String>,
    pub student_id: Option<i64>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    // Generate an access/refresh token pair for this user.
    pub async fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("Failed to generate token pair: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in UserRole::all_roles() {
            let parsed = role.to_string().parse::<UserRole>().unwrap();
            assert_eq!(&&parsed, role);
        }
    }

    #[test]
    fn test_treasury_roles_exclude_headmaster() {
        assert!(!UserRole::treasury_roles().contains(&&UserRole::Headmaster));
        assert!(UserRole::finance_read_roles().contains(&&UserRole::Headmaster));
    }

    #[test]
    fn test_invalid_role_rejected() {
        assert!("bendahara".parse::<UserRole>().is_err());
    }
}
