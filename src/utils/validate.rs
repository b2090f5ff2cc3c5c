use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static NISN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("Invalid NISN regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+62|0)\d{8,13}$").expect("Invalid phone regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // Length: 5 <= x <= 20
    if username.len() < 5 || username.len() > 20 {
        return Err("Username length must be between 5 and 20 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

/// NISN is the Indonesian national student number: exactly 10 digits.
pub fn validate_nisn(nisn: &str) -> Result<(), &'static str> {
    if !NISN_RE.is_match(nisn) {
        return Err("NISN must be exactly 10 digits");
    }
    Ok(())
}

/// Indonesian phone numbers: `+62` or leading `0`, then 8 to 13 digits.
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

/// Password policy validation result
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// Password policy:
/// - at least 8 characters
/// - at least one uppercase letter, one lowercase letter and one digit
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(validate_username("bendahara01").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("a-very-long-username-over-limit").is_err());
    }

    #[test]
    fn test_nisn_validation() {
        assert!(validate_nisn("0061234567").is_ok());
        assert!(validate_nisn("123456789").is_err()); // 9 digits
        assert!(validate_nisn("12345678901").is_err()); // 11 digits
        assert!(validate_nisn("00612345a7").is_err());
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("081234567890").is_ok());
        assert!(validate_phone("+6281234567890").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("0812-345").is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("Rahasia123").is_valid);
        let weak = validate_password("short");
        assert!(!weak.is_valid);
        assert!(weak.error_message().contains("8 characters"));
        assert!(!validate_password("alllowercase1").is_valid);
        assert!(!validate_password("NoDigitsHere").is_valid);
    }
}
