use serde::{Deserialize, Serialize};

// Expense category
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Operational,
    Salary,
    Maintenance,
    Activity,
    Other,
}

impl<'de> Deserialize<'de> for ExpenseCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ExpenseCategory>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid expense category: '{s}'. Supported categories: operational, salary, maintenance, activity, other"
            ))
        })
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseCategory::Operational => write!(f, "operational"),
            ExpenseCategory::Salary => write!(f, "salary"),
            ExpenseCategory::Maintenance => write!(f, "maintenance"),
            ExpenseCategory::Activity => write!(f, "activity"),
            ExpenseCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "operational" => Ok(ExpenseCategory::Operational),
            "salary" => Ok(ExpenseCategory::Salary),
            "maintenance" => Ok(ExpenseCategory::Maintenance),
            "activity" => Ok(ExpenseCategory::Activity),
            "other" => Ok(ExpenseCategory::Other),
            _ => Err(format!("Invalid expense category: {s}")),
        }
    }
}

// Expense entity
#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub category: ExpenseCategory,
    pub amount: i64,
    pub expense_date: chrono::DateTime<chrono::Utc>,
    pub description: Option<String>,
    pub recorded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
