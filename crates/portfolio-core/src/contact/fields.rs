use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    /// Matches the form control's `name` attribute and the template variable.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldName::Name),
            "email" => Ok(FieldName::Email),
            "message" => Ok(FieldName::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Current, untrimmed values of the three form controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn trimmed(&self) -> ContactFields {
        ContactFields::new(self.name.trim(), self.email.trim(), self.message.trim())
    }

    pub fn clear(&mut self) {
        *self = ContactFields::default();
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_attr() {
        for f in FieldName::ALL {
            assert_eq!(f.as_str().parse::<FieldName>(), Ok(f));
        }
        assert_eq!(
            "phone".parse::<FieldName>(),
            Err(UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn set_get_and_clear() {
        let mut fields = ContactFields::default();
        fields.set(FieldName::Email, "  a@b.com ");
        assert_eq!(fields.get(FieldName::Email), "  a@b.com ");
        assert_eq!(fields.trimmed().email, "a@b.com");
        fields.clear();
        assert!(fields.is_empty());
    }
}
