//! The customer record read from the delimited source.

use serde::Serialize;

/// One customer entry.
///
/// Text fields are `None` when the source row did not carry the column at all and
/// `Some("")` when the column was present but empty. Uniqueness of `id` is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
}

impl Record {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            email: Some(email.into()),
            city: Some(city.into()),
        }
    }

    /// The name, or the empty string when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_read_as_empty() {
        let r = Record {
            id: 1,
            name: None,
            email: None,
            city: None,
        };
        assert_eq!(r.name(), "");
        assert_eq!(r.email(), "");
        assert_eq!(r.city(), "");
    }

    #[test]
    fn test_extreme_ids_are_kept() {
        assert_eq!(Record::new(i32::MIN, "a", "b", "c").id, i32::MIN);
        assert_eq!(Record::new(i32::MAX, "a", "b", "c").id, i32::MAX);
        assert_eq!(Record::new(-1, "a", "b", "c").id, -1);
    }
}
