//! Unified error codes for the storefront workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Catalog errors (payload validation)
//! - 9xxx: Upstream errors (backend fetch/decode)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are represented as u16 values for efficient serialization and
/// cross-language compatibility with the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 6xxx: Catalog ====================
    /// Attribute value row references an unknown attribute definition
    UnknownAttribute = 6001,
    /// Attribute value or file row references an unknown variant
    UnknownVariant = 6002,
    /// A variant carries two value rows for the same attribute
    DuplicateAttributeValue = 6003,

    // ==================== 9xxx: Upstream ====================
    /// Backend fetch failed (transport or non-success status)
    FetchFailed = 9001,
    /// Backend response could not be decoded
    DecodeFailed = 9002,
    /// Internal error
    InternalError = 9003,
}

/// Classification of errors by domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Catalog,
    Upstream,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            6000..=6999 => ErrorCategory::Catalog,
            9000..=9999 => ErrorCategory::Upstream,
            _ => ErrorCategory::General,
        }
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::UnknownAttribute => "Value row references unknown attribute",
            Self::UnknownVariant => "Row references unknown variant",
            Self::DuplicateAttributeValue => "Duplicate value for attribute on variant",
            Self::FetchFailed => "Failed to fetch product details",
            Self::DecodeFailed => "Failed to decode product details",
            Self::InternalError => "Internal error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            5 => Ok(Self::InvalidRequest),
            6001 => Ok(Self::UnknownAttribute),
            6002 => Ok(Self::UnknownVariant),
            6003 => Ok(Self::DuplicateAttributeValue),
            9001 => Ok(Self::FetchFailed),
            9002 => Ok(Self::DecodeFailed),
            9003 => Ok(Self::InternalError),
            other => Err(InvalidErrorCode(other)),
        }
    }
}
