//! Trips, their country lists, and per-client trip projections.

use chrono::NaiveDate;
use serde_json::json;

use super::Error;

/// Store-assigned trip identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripId(i32);

impl TripId {
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

impl From<i32> for TripId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failures raised while building a [`NewTrip`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripValidationError {
    #[error("name must not be blank")]
    BlankName,
    #[error("maxPeople must be greater than zero, got {max_people}")]
    NonPositiveCapacity { max_people: i32 },
    #[error("dateTo {date_to} must not be before dateFrom {date_from}")]
    InvertedDateRange {
        date_from: NaiveDate,
        date_to: NaiveDate,
    },
    #[error("country names must not be blank (index {index})")]
    BlankCountry { index: usize },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl TripValidationError {
    /// Request field the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::BlankName => "name",
            Self::NonPositiveCapacity { .. } => "maxPeople",
            Self::InvertedDateRange { .. } => "dateTo",
            Self::BlankCountry { .. } => "countries",
            Self::TooLong { field, .. } => field,
        }
    }
}

impl From<TripValidationError> for Error {
    fn from(value: TripValidationError) -> Self {
        let details = match &value {
            TripValidationError::BlankCountry { index } => json!({
                "field": value.field(),
                "index": index,
                "code": "invalid_field",
            }),
            _ => json!({ "field": value.field(), "code": "invalid_field" }),
        };
        Self::invalid_request(value.to_string()).with_details(details)
    }
}

/// Longest trip or country name accepted.
pub const TRIP_NAME_MAX_CHARS: usize = 120;
/// Longest trip description accepted.
pub const TRIP_DESCRIPTION_MAX_CHARS: usize = 220;

fn within_limit(value: &str, field: &'static str, max: usize) -> Result<(), TripValidationError> {
    if value.chars().count() > max {
        return Err(TripValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Unvalidated trip fields as received from a driving adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTripDraft {
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub max_people: i32,
    pub countries: Vec<String>,
}

/// Trip data that passed validation and is ready to be stored.
///
/// ## Invariants
/// - `name` is trimmed and non-empty.
/// - `max_people > 0` and `date_to >= date_from`.
/// - `countries` holds trimmed, non-empty names in first-seen order with
///   duplicates removed.
/// - Names fit [`TRIP_NAME_MAX_CHARS`] and the description fits
///   [`TRIP_DESCRIPTION_MAX_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrip {
    name: String,
    description: Option<String>,
    date_from: NaiveDate,
    date_to: NaiveDate,
    max_people: i32,
    countries: Vec<String>,
}

/// Keep the first occurrence of every name, preserving order.
pub(crate) fn dedup_countries<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut unique: Vec<String> = Vec::new();
    for name in names {
        let name = name.into();
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}

impl NewTrip {
    /// Validate a draft.
    pub fn new(draft: NewTripDraft) -> Result<Self, TripValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(TripValidationError::BlankName);
        }
        within_limit(name, "name", TRIP_NAME_MAX_CHARS)?;
        if draft.max_people <= 0 {
            return Err(TripValidationError::NonPositiveCapacity {
                max_people: draft.max_people,
            });
        }
        if draft.date_to < draft.date_from {
            return Err(TripValidationError::InvertedDateRange {
                date_from: draft.date_from,
                date_to: draft.date_to,
            });
        }

        let mut trimmed = Vec::with_capacity(draft.countries.len());
        for (index, country) in draft.countries.iter().enumerate() {
            let country = country.trim();
            if country.is_empty() {
                return Err(TripValidationError::BlankCountry { index });
            }
            within_limit(country, "countries", TRIP_NAME_MAX_CHARS)?;
            trimmed.push(country);
        }

        let description = draft
            .description
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());
        if let Some(text) = &description {
            within_limit(text, "description", TRIP_DESCRIPTION_MAX_CHARS)?;
        }

        Ok(Self {
            name: name.to_owned(),
            description,
            date_from: draft.date_from,
            date_to: draft.date_to,
            max_people: draft.max_people,
            countries: dedup_countries(trimmed),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn date_from(&self) -> NaiveDate {
        self.date_from
    }

    pub fn date_to(&self) -> NaiveDate {
        self.date_to
    }

    pub fn max_people(&self) -> i32 {
        self.max_people
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }
}

/// Stored trip with its ordered country list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub max_people: i32,
    pub countries: Vec<String>,
}

/// A trip seen through one client's registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTrip {
    pub trip: Trip,
    pub registered_at: NaiveDate,
    pub payment_date: Option<NaiveDate>,
}
