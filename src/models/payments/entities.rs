use serde::{Deserialize, Serialize};

// Payment method
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Transfer,
    VirtualAccount,
}

impl PaymentMethod {
    /// Cash is recorded by the treasurer and completes immediately;
    /// transfer/VA settle asynchronously and start as pending.
    pub fn is_async(&self) -> bool {
        !matches!(self, PaymentMethod::Cash)
    }
}

impl<'de> Deserialize<'de> for PaymentMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<PaymentMethod>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid payment method: '{s}'. Supported methods: cash, transfer, virtual_account"
            ))
        })
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Transfer => write!(f, "transfer"),
            PaymentMethod::VirtualAccount => write!(f, "virtual_account"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "transfer" => Ok(PaymentMethod::Transfer),
            "virtual_account" => Ok(PaymentMethod::VirtualAccount),
            _ => Err(format!("Invalid payment method: {s}")),
        }
    }
}

// Payment status. Completed/failed/refunded are terminal: once reached,
// the payment row is never edited again.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PaymentStatus::Pending)
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<PaymentStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid payment status: '{s}'. Supported statuses: pending, completed, failed, refunded"
            ))
        })
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Failed => write!(f, "failed"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "failed" => Ok(PaymentStatus::Failed),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(format!("Invalid payment status: {s}")),
        }
    }
}

// Payment entity
#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub id: i64,
    pub reference_number: String,
    pub billing_id: i64,
    pub amount: i64,
    pub admin_fee: i64,
    pub total_paid: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub verified_by: Option<i64>,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Unique payment reference: `PAY-` plus an uppercase UUID without hyphens.
pub fn generate_reference_number() -> String {
    let raw = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
    format!("PAY-{}", &raw[..20])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!PaymentStatus::Pending.is_terminal());
        assert!(PaymentStatus::Completed.is_terminal());
        assert!(PaymentStatus::Failed.is_terminal());
        assert!(PaymentStatus::Refunded.is_terminal());
    }

    #[test]
    fn test_cash_is_synchronous() {
        assert!(!PaymentMethod::Cash.is_async());
        assert!(PaymentMethod::Transfer.is_async());
        assert!(PaymentMethod::VirtualAccount.is_async());
    }

    #[test]
    fn test_reference_number_shape() {
        let r = generate_reference_number();
        assert!(r.starts_with("PAY-"));
        assert_eq!(r.len(), 24);
        assert_ne!(r, generate_reference_number());
    }
}
