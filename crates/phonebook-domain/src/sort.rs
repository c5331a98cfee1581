//! Sort keys for re-ordering a directory

/// Ordering applied by a directory sort
///
/// Name keys compare case-insensitively, the phone key compares the numeric
/// value of the digits, and the timestamp keys compare chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Case-insensitive first name
    FirstName,

    /// Case-insensitive last name
    LastName,

    /// Numeric value of the phone number's digits
    PhoneNumber,

    /// Creation time
    CreatedAt,

    /// Time of the last accepted edit
    UpdatedAt,
}

impl SortKey {
    /// All sort keys, in menu order
    pub const ALL: [SortKey; 5] = [
        SortKey::FirstName,
        SortKey::LastName,
        SortKey::PhoneNumber,
        SortKey::CreatedAt,
        SortKey::UpdatedAt,
    ];

    /// Get the key name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::FirstName => "first_name",
            SortKey::LastName => "last_name",
            SortKey::PhoneNumber => "phone_number",
            SortKey::CreatedAt => "created_at",
            SortKey::UpdatedAt => "updated_at",
        }
    }

    /// Parse a sort key (accepts the persisted field names too)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "first_name" | "first" => Some(SortKey::FirstName),
            "last_name" | "last" => Some(SortKey::LastName),
            "phone_number" | "phone" => Some(SortKey::PhoneNumber),
            "created_at" | "created" | "create_time" => Some(SortKey::CreatedAt),
            "updated_at" | "updated" | "update_time" => Some(SortKey::UpdatedAt),
            _ => None,
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid sort key: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parsing() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!("create_time".parse::<SortKey>(), Ok(SortKey::CreatedAt));
        assert_eq!("PHONE".parse::<SortKey>(), Ok(SortKey::PhoneNumber));
        assert!("email".parse::<SortKey>().is_err());
    }
}
