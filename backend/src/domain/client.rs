//! Client identity and validated registration data.
//!
//! [`NewClient`] is the only way to describe a client that should be stored,
//! so the blank-field and email rules hold no matter which adapter drives the
//! domain.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::json;

use super::Error;

/// Store-assigned client identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(i32);

impl ClientId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ClientId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failures raised while building a [`NewClient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientValidationError {
    #[error("firstName must not be blank")]
    BlankFirstName,
    #[error("lastName must not be blank")]
    BlankLastName,
    #[error("email must not be blank")]
    BlankEmail,
    #[error("email must look like name@domain.tld")]
    InvalidEmail,
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl ClientValidationError {
    /// Request field the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::BlankFirstName => "firstName",
            Self::BlankLastName => "lastName",
            Self::BlankEmail | Self::InvalidEmail => "email",
            Self::TooLong { field, .. } => field,
        }
    }
}

impl From<ClientValidationError> for Error {
    fn from(value: ClientValidationError) -> Self {
        Self::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": "invalid_field",
        }))
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Returns true when `email` matches `local@domain.tld` with no whitespace
/// and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Longest value accepted for any stored client text column.
pub const CLIENT_FIELD_MAX_CHARS: usize = 120;

fn within_limit(value: &str, field: &'static str) -> Result<(), ClientValidationError> {
    if value.chars().count() > CLIENT_FIELD_MAX_CHARS {
        return Err(ClientValidationError::TooLong {
            field,
            max: CLIENT_FIELD_MAX_CHARS,
        });
    }
    Ok(())
}

/// Unvalidated client fields as received from a driving adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClientDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
}

/// Client data that passed validation and is ready to be stored.
///
/// ## Invariants
/// - Names and email are trimmed and non-empty.
/// - `email` matches `^[^@\s]+@[^@\s]+\.[^@\s]+$`.
/// - Optional fields are `None` rather than blank.
/// - No field exceeds [`CLIENT_FIELD_MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    national_id: Option<String>,
}

fn required(value: String, error: ClientValidationError) -> Result<String, ClientValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed.to_owned())
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

impl NewClient {
    /// Validate a draft.
    ///
    /// # Examples
    /// ```
    /// use travel_agency::domain::{NewClient, NewClientDraft};
    ///
    /// let client = NewClient::new(NewClientDraft {
    ///     first_name: "Ada".into(),
    ///     last_name: "Lovelace".into(),
    ///     email: "a@b.co".into(),
    ///     ..NewClientDraft::default()
    /// })
    /// .expect("valid client");
    /// assert_eq!(client.email(), "a@b.co");
    /// ```
    pub fn new(draft: NewClientDraft) -> Result<Self, ClientValidationError> {
        let first_name = required(draft.first_name, ClientValidationError::BlankFirstName)?;
        let last_name = required(draft.last_name, ClientValidationError::BlankLastName)?;
        let email = required(draft.email, ClientValidationError::BlankEmail)?;
        if !is_valid_email(&email) {
            return Err(ClientValidationError::InvalidEmail);
        }
        let phone = optional(draft.phone);
        let national_id = optional(draft.national_id);

        within_limit(&first_name, "firstName")?;
        within_limit(&last_name, "lastName")?;
        within_limit(&email, "email")?;
        if let Some(phone) = &phone {
            within_limit(phone, "phone")?;
        }
        if let Some(national_id) = &national_id {
            within_limit(national_id, "nationalId")?;
        }

        Ok(Self {
            first_name,
            last_name,
            email,
            phone,
            national_id,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn national_id(&self) -> Option<&str> {
        self.national_id.as_deref()
    }
}
