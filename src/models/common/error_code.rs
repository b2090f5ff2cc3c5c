//! Business error codes carried in the response envelope.

/// Serialized as the integer `code` field of `ApiResponse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // Generic
    BadRequest = 4000,
    Unauthorized = 4010,
    AuthFailed = 4011,
    TokenInvalid = 4012,
    Forbidden = 4030,
    NotFound = 4040,
    Conflict = 4090,
    TooManyRequests = 4290,
    InternalServerError = 5000,

    // Users
    UserNotFound = 10001,
    UserAlreadyExists = 10002,
    UserNameInvalid = 10003,
    PasswordPolicyViolation = 10004,
    UserCreationFailed = 10005,

    // Students
    StudentNotFound = 11001,
    NisnAlreadyExists = 11002,
    NisnInvalid = 11003,
    StudentStatusInvalid = 11004,

    // Prospective students
    ApplicationNotFound = 12001,
    ApplicationAlreadyProcessed = 12002,

    // Academic master data
    AcademicYearNotFound = 13001,
    AcademicYearAlreadyExists = 13002,
    ClassNotFound = 13003,
    ClassAlreadyExists = 13004,
    AlreadyEnrolled = 13005,

    // Billings
    BillingNotFound = 14001,
    BillingAlreadyExists = 14002,
    BillingNotPayable = 14003,
    BillingGenerationFailed = 14004,

    // Payments
    PaymentNotFound = 15001,
    PaymentAlreadyFinal = 15002,
    PaymentAmountInvalid = 15003,
    PaymentExceedsOutstanding = 15004,

    // Expenses
    ExpenseNotFound = 16001,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values_are_stable() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Forbidden as i32, 4030);
        assert_eq!(ErrorCode::BillingAlreadyExists as i32, 14002);
        assert_eq!(ErrorCode::PaymentAlreadyFinal as i32, 15002);
    }
}
