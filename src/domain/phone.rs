//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("Failed to compile phone number regex"));

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time
/// and on every reassignment. A phone number is exactly 10 decimal
/// digits with no formatting characters.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly 10 digits
    /// - The whole string must match; no leading or trailing characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Replace the stored value, running the same validation as [`new`](Self::new).
    ///
    /// On failure the previous value is retained untouched.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        self.0 = phone;
        Ok(())
    }

    /// Validate phone format: an anchored full match, not a search.
    fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123456789").is_err());
        assert!(PhoneNumber::new("12345678901").is_err());
        assert!(PhoneNumber::new("123456789a").is_err());
        assert!(PhoneNumber::new("123-456-7890").is_err());
        assert!(PhoneNumber::new("+1234567890").is_err());
        assert!(PhoneNumber::new(" 1234567890").is_err());
        assert!(PhoneNumber::new("1234567890 ").is_err());
        assert!(PhoneNumber::new("5555555555").is_ok());
    }

    #[test]
    fn test_phone_rejects_embedded_match() {
        // 10 digits surrounded by extra characters must not pass
        assert!(PhoneNumber::new("x1234567890").is_err());
        assert!(PhoneNumber::new("1234567890\n").is_err());
        assert!(PhoneNumber::new("12345678901234567890").is_err());
    }

    #[test]
    fn test_phone_set_replaces_value() {
        let mut phone = PhoneNumber::new("1234567890").unwrap();
        phone.set("5555555555").unwrap();
        assert_eq!(phone.as_str(), "5555555555");
    }

    #[test]
    fn test_phone_set_invalid_keeps_old_value() {
        let mut phone = PhoneNumber::new("1234567890").unwrap();
        let result = phone.set("123");
        assert_eq!(result, Err(ValidationError::InvalidPhone("123".to_string())));
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(format!("{}", phone), "1234567890");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"1234567890\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: PhoneNumber = serde_json::from_str("\"1234567890\"").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"123-456\"");
        assert!(result.is_err());
    }
}
