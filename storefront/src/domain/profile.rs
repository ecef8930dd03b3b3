//! Onboarding profile data.
//!
//! A [`Profile`] is the validated registration payload. A [`StoredProfile`]
//! is whatever the profile store currently holds, which may be partial or
//! blank after a logout or an external edit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message shown when registration succeeds.
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful!";

/// Message shown when registration is rejected for missing data.
pub const REGISTRATION_FAILURE_MESSAGE: &str = "Registration unsuccessful. Please enter all data.";

/// The fields captured during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
}

impl ProfileField {
    /// Every field in form order.
    pub const ALL: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    /// Human readable field label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Email => "email",
        }
    }

    /// Key used by key-value profile stores.
    pub const fn store_key(self) -> &'static str {
        match self {
            Self::FirstName => "FIRST_NAME",
            Self::LastName => "LAST_NAME",
            Self::Email => "EMAIL",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Registration rejected because one or more fields were blank.
///
/// ## Invariants
/// - `blank_fields` is non-empty and in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileValidationError {
    blank_fields: Vec<ProfileField>,
}

impl ProfileValidationError {
    pub fn blank_fields(&self) -> &[ProfileField] {
        &self.blank_fields
    }

    /// Whether `field` was among the blank fields.
    pub fn is_blank(&self, field: ProfileField) -> bool {
        self.blank_fields.contains(&field)
    }
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self
            .blank_fields
            .iter()
            .map(|field| field.label())
            .collect();
        write!(f, "profile fields must not be blank: {}", labels.join(", "))
    }
}

impl std::error::Error for ProfileValidationError {}

/// Completed onboarding profile.
///
/// ## Invariants
/// - `first_name`, `last_name`, and `email` are non-empty once trimmed.
///
/// # Examples
/// ```
/// use storefront::domain::{Profile, ProfileField};
///
/// let err = Profile::new("", "Doe", " ").expect_err("blank fields");
/// assert_eq!(err.blank_fields(), &[ProfileField::FirstName, ProfileField::Email]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    first_name: String,
    last_name: String,
    email: String,
}

impl Profile {
    /// Validate the three onboarding fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ProfileValidationError> {
        let profile = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        };

        let blank_fields: Vec<ProfileField> = ProfileField::ALL
            .into_iter()
            .filter(|field| profile.value(*field).trim().is_empty())
            .collect();
        if blank_fields.is_empty() {
            Ok(profile)
        } else {
            Err(ProfileValidationError { blank_fields })
        }
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Value of the given field.
    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => self.first_name(),
            ProfileField::LastName => self.last_name(),
            ProfileField::Email => self.email(),
        }
    }
}

/// Profile values as read back from a store.
///
/// Missing keys read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl StoredProfile {
    /// A stored profile counts as complete when its email is non-blank.
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty()
    }

    /// Every field is blank, which stores treat as no profile at all.
    pub fn is_blank(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email]
            .iter()
            .all(|value| value.trim().is_empty())
    }
}

impl From<&Profile> for StoredProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
        }
    }
}
