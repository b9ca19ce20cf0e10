use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BookingIdError;

/// Identifier the backend uses to locate a reservation.
///
/// Always holds trimmed, non-empty text; construct with [`BookingId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingId(String);

impl BookingId {
    pub fn parse(raw: &str) -> Result<Self, BookingIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BookingIdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BookingId {
    type Error = BookingIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BookingId> for String {
    fn from(value: BookingId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let id = BookingId::parse("  BK123\t").expect("valid id");
        assert_eq!(id.as_str(), "BK123");
    }

    #[test]
    fn rejects_blank_input() {
        for raw in ["", " ", "\t\n", "   "] {
            assert!(matches!(BookingId::parse(raw), Err(BookingIdError::Empty)));
        }
    }

    #[test]
    fn keeps_inner_whitespace_and_case() {
        let id = BookingId::parse(" bk 12 ").expect("valid id");
        assert_eq!(id.to_string(), "bk 12");
    }

    #[test]
    fn deserialization_applies_the_same_rules() {
        let id: BookingId = serde_json::from_str("\" BK7 \"").expect("deserialize");
        assert_eq!(id.as_str(), "BK7");
        assert!(serde_json::from_str::<BookingId>("\"  \"").is_err());
    }
}
