use serde::{Deserialize, Serialize};

// Billing type
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BillingType {
    Spp,
    DaftarUlang,
    UangGedung,
    Seragam,
    Kegiatan,
}

impl BillingType {
    pub const SPP: &'static str = "spp";
    pub const DAFTAR_ULANG: &'static str = "daftar_ulang";
    pub const UANG_GEDUNG: &'static str = "uang_gedung";
    pub const SERAGAM: &'static str = "seragam";
    pub const KEGIATAN: &'static str = "kegiatan";
}

impl<'de> Deserialize<'de> for BillingType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<BillingType>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid billing type: '{s}'. Supported types: spp, daftar_ulang, uang_gedung, seragam, kegiatan"
            ))
        })
    }
}

impl std::fmt::Display for BillingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BillingType::Spp => BillingType::SPP,
            BillingType::DaftarUlang => BillingType::DAFTAR_ULANG,
            BillingType::UangGedung => BillingType::UANG_GEDUNG,
            BillingType::Seragam => BillingType::SERAGAM,
            BillingType::Kegiatan => BillingType::KEGIATAN,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for BillingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            BillingType::SPP => Ok(BillingType::Spp),
            BillingType::DAFTAR_ULANG => Ok(BillingType::DaftarUlang),
            BillingType::UANG_GEDUNG => Ok(BillingType::UangGedung),
            BillingType::SERAGAM => Ok(BillingType::Seragam),
            BillingType::KEGIATAN => Ok(BillingType::Kegiatan),
            _ => Err(format!("Invalid billing type: {s}")),
        }
    }
}

// Billing status.
//
// Stored transitions: billed -> partial -> paid driven by payment
// application; billed -> cancelled, billed/partial -> waived by treasurer
// action. `overdue` is never stored: it is the effective read-side view of
// `billed` past its due date.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BillingStatus {
    Unbilled,
    Billed,
    Partial,
    Paid,
    Overdue,
    Cancelled,
    Waived,
}

impl BillingStatus {
    /// Status is a pure function of amounts for the payment-driven states.
    pub fn recompute(paid_amount: i64, total_amount: i64) -> Self {
        if paid_amount >= total_amount {
            BillingStatus::Paid
        } else if paid_amount > 0 {
            BillingStatus::Partial
        } else {
            BillingStatus::Billed
        }
    }

    /// States that accept no further payments.
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            BillingStatus::Paid | BillingStatus::Cancelled | BillingStatus::Waived
        )
    }

    /// Read-side view: a billed obligation past its due date shows as overdue.
    pub fn effective(&self, due_date_ts: i64, now_ts: i64) -> Self {
        match self {
            BillingStatus::Billed if now_ts > due_date_ts => BillingStatus::Overdue,
            other => other.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for BillingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<BillingStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid billing status: '{s}'. Supported statuses: unbilled, billed, partial, paid, overdue, cancelled, waived"
            ))
        })
    }
}

impl std::fmt::Display for BillingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BillingStatus::Unbilled => "unbilled",
            BillingStatus::Billed => "billed",
            BillingStatus::Partial => "partial",
            BillingStatus::Paid => "paid",
            BillingStatus::Overdue => "overdue",
            BillingStatus::Cancelled => "cancelled",
            BillingStatus::Waived => "waived",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for BillingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unbilled" => Ok(BillingStatus::Unbilled),
            "billed" => Ok(BillingStatus::Billed),
            "partial" => Ok(BillingStatus::Partial),
            "paid" => Ok(BillingStatus::Paid),
            "overdue" => Ok(BillingStatus::Overdue),
            "cancelled" => Ok(BillingStatus::Cancelled),
            "waived" => Ok(BillingStatus::Waived),
            _ => Err(format!("Invalid billing status: {s}")),
        }
    }
}

// Billing entity
#[derive(Debug, Clone, Serialize)]
pub struct Billing {
    pub id: i64,
    pub bill_number: String,
    pub student_id: i64,
    pub academic_year_id: i64,
    pub billing_type: BillingType,
    pub month: u32,
    pub year: i32,
    pub total_amount: i64,
    pub paid_amount: i64,
    pub status: BillingStatus,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Billing {
    pub fn outstanding(&self) -> i64 {
        (self.total_amount - self.paid_amount).max(0)
    }
}

/// Format a sequential bill number: `INV/{year}/{month:02}/{seq:04}`.
pub fn format_bill_number(year: i32, month: u32, seq: u64) -> String {
    format!("INV/{year}/{month:02}/{seq:04}")
}

/// Due date for a billing period: the configured day of the billing month,
/// midnight UTC. `None` when the period is not a valid calendar date.
pub fn due_date_for(year: i32, month: u32, due_day: u32) -> Option<chrono::DateTime<chrono::Utc>> {
    use chrono::TimeZone;
    chrono::Utc
        .with_ymd_and_hms(year, month, due_day, 0, 0, 0)
        .single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recompute_full_payment_is_paid() {
        assert_eq!(
            BillingStatus::recompute(500_000, 500_000),
            BillingStatus::Paid
        );
        assert_eq!(
            BillingStatus::recompute(600_000, 500_000),
            BillingStatus::Paid
        );
    }

    #[test]
    fn test_recompute_partial_payment() {
        assert_eq!(
            BillingStatus::recompute(200_000, 500_000),
            BillingStatus::Partial
        );
        assert_eq!(BillingStatus::recompute(1, 500_000), BillingStatus::Partial);
    }

    #[test]
    fn test_recompute_nothing_paid_is_billed() {
        assert_eq!(BillingStatus::recompute(0, 500_000), BillingStatus::Billed);
    }

    #[test]
    fn test_effective_overdue_only_from_billed() {
        let due = 1_000;
        let late = 2_000;
        assert_eq!(
            BillingStatus::Billed.effective(due, late),
            BillingStatus::Overdue
        );
        assert_eq!(
            BillingStatus::Billed.effective(due, due),
            BillingStatus::Billed
        );
        // Partial/paid/terminal states never flip to overdue.
        assert_eq!(
            BillingStatus::Partial.effective(due, late),
            BillingStatus::Partial
        );
        assert_eq!(BillingStatus::Paid.effective(due, late), BillingStatus::Paid);
        assert_eq!(
            BillingStatus::Waived.effective(due, late),
            BillingStatus::Waived
        );
    }

    #[test]
    fn test_closed_states() {
        assert!(BillingStatus::Paid.is_closed());
        assert!(BillingStatus::Cancelled.is_closed());
        assert!(BillingStatus::Waived.is_closed());
        assert!(!BillingStatus::Billed.is_closed());
        assert!(!BillingStatus::Partial.is_closed());
        assert!(!BillingStatus::Overdue.is_closed());
    }

    #[test]
    fn test_bill_number_format() {
        assert_eq!(format_bill_number(2025, 7, 1), "INV/2025/07/0001");
        assert_eq!(format_bill_number(2025, 11, 123), "INV/2025/11/0123");
        assert_eq!(format_bill_number(2026, 1, 10_000), "INV/2026/01/10000");
    }

    #[test]
    fn test_due_date_is_tenth_of_month() {
        let due = due_date_for(2025, 7, 10).unwrap();
        assert_eq!(due.to_rfc3339(), "2025-07-10T00:00:00+00:00");
        assert!(due_date_for(2025, 13, 10).is_none());
    }
}
