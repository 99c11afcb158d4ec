//! Registration form fields and the values bound to them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A field of the registration form.
///
/// Ordering follows the on-screen order, which is also the order errors are
/// reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Age,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Age];

    /// The name used for the input element and in change events
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "age" => Ok(Field::Age),
            other => Err(DomainError::unknown_field(other)),
        }
    }
}

/// In-progress values of the registration form.
///
/// Always holds exactly the three fields; an untouched field is an empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    /// Kept as raw text; only checked for being numeric on submit
    pub age: String,
}

impl FormData {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: age.into(),
        }
    }

    /// Current raw value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
        }
    }

    /// Overwrite exactly one field, leaving the others untouched
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
        };
        *slot = value.into();
    }

    /// True when every field is an empty string
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = "phone".parse::<Field>().unwrap_err();
        assert_eq!(err, DomainError::UnknownField("phone".to_string()));
        assert_eq!(err.to_string(), "Unknown form field: phone");
    }

    #[test]
    fn field_names_are_case_sensitive() {
        assert!("Name".parse::<Field>().is_err());
    }

    #[test]
    fn set_overwrites_only_the_named_field() {
        let mut data = FormData::new("Ada", "ada@example.com", "30");
        data.set(Field::Email, "lovelace@example.com");

        assert_eq!(data.name, "Ada");
        assert_eq!(data.email, "lovelace@example.com");
        assert_eq!(data.age, "30");
    }

    #[test]
    fn default_form_is_blank() {
        let data = FormData::default();
        assert!(data.is_blank());
        assert!(!FormData::new("", "", "1").is_blank());
    }
}
