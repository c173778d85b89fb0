//! Domain types shared by the store, the submission workflow and the bill list.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Fixed set of expense categories an employee can file a bill under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseType {
    #[serde(rename = "Transports")]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    Restaurants,
    #[serde(rename = "Hôtel et logement")]
    Lodging,
    #[serde(rename = "Services en ligne")]
    OnlineServices,
    #[serde(rename = "IT et électronique")]
    Electronics,
    #[serde(rename = "Equipement et matériel")]
    Equipment,
    #[serde(rename = "Fournitures de bureau")]
    OfficeSupplies,
}

impl ExpenseType {
    /// All categories, in the order the form offers them.
    pub const ALL: [Self; 7] = [
        Self::Transports,
        Self::Restaurants,
        Self::Lodging,
        Self::OnlineServices,
        Self::Electronics,
        Self::Equipment,
        Self::OfficeSupplies,
    ];

    /// Label shown in the form and stored with the bill.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transports => "Transports",
            Self::Restaurants => "Restaurants et bars",
            Self::Lodging => "Hôtel et logement",
            Self::OnlineServices => "Services en ligne",
            Self::Electronics => "IT et électronique",
            Self::Equipment => "Equipement et matériel",
            Self::OfficeSupplies => "Fournitures de bureau",
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ExpenseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| Error::InvalidField {
                field: "type",
                value: s.to_string(),
            })
    }
}

/// Review status of a bill. New bills are always `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Wire/storage form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Refused => "refused",
        }
    }

    /// Label displayed in the bill list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Accepted => "Accepté",
            Self::Refused => "Refusé",
        }
    }
}

impl FromStr for BillStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "refused" => Ok(Self::Refused),
            other => Err(Error::InvalidField {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Store-assigned identity of a persisted bill.
///
/// Bundled so that the id, file URL and file name are either all present or all absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillIdentity {
    pub id: String,
    pub file_url: String,
    pub file_name: String,
}

/// An expense bill, either a draft (`identity` is `None`) or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(flatten)]
    pub identity: Option<BillIdentity>,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub name: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub vat: Option<String>,
    pub pct: u32,
    pub commentary: Option<String>,
    pub status: BillStatus,
}

impl Bill {
    /// Whether the store has confirmed this bill.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.identity.is_some()
    }

    /// Store id, once persisted.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.id.as_str())
    }

    /// Remote attachment location, once persisted.
    #[must_use]
    pub fn file_url(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.file_url.as_str())
    }

    /// Canonical attachment name, once persisted.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.file_name.as_str())
    }

    /// Date in its canonical zero-padded form.
    #[must_use]
    pub fn canonical_date(&self) -> String {
        self.date.format(CANONICAL_DATE_FORMAT).to_string()
    }
}

/// A file picked by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Name as reported by the file input; may carry a browser path prefix.
    pub file_name: String,
    /// Declared content type.
    pub mime_type: String,
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }
}

/// Result of pushing an attachment through the store's upload channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub key: String,
    pub file_url: String,
}

const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

// Separators accepted by the list's date contract: `-`, `/`, `.` or a space.
const ACCEPTED_DATE_FORMATS: [&str; 4] =
    [CANONICAL_DATE_FORMAT, "%Y/%m/%d", "%Y.%m.%d", "%Y %m %d"];

/// Normalises a bill date to a calendar date.
///
/// Only four-digit years from 1900 to 2099 with two-digit month and day are accepted, so
/// ordering the result matches ordering the canonical `YYYY-MM-DD` strings.
pub fn parse_bill_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let invalid = || Error::InvalidDate {
        value: raw.to_string(),
    };

    let bytes = trimmed.as_bytes();
    if bytes.len() != 10 || !(trimmed.starts_with("19") || trimmed.starts_with("20")) {
        return Err(invalid());
    }
    // chrono tolerates padding spaces inside numeric fields; the contract does not
    let digits_only = [0, 1, 2, 3, 5, 6, 8, 9]
        .iter()
        .all(|&i| bytes[i].is_ascii_digit());
    if !digits_only {
        return Err(invalid());
    }

    ACCEPTED_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(invalid)
}
