use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

use crate::errors::AppError;
use crate::normalizer::{
    digits_only, format_cpf, format_phone, validate_cpf, validate_phone, DDD_LEN, LANDLINE_LEN,
};

// ============ Value Types ============

/// A CPF that passed checksum validation. Holds the 11 bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Parses a CPF from user input, punctuation allowed.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if !validate_cpf(raw) {
            return Err(AppError::BadRequest(format!("Invalid CPF: {}", raw.trim())));
        }
        Ok(Self(digits_only(raw)))
    }

    /// The 11 digits, no punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `XXX.XXX.XXX-XX`
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Line type, derived from the digit count alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    /// DDD + 8 digits.
    Landline,
    /// DDD + 9 digits starting with 9.
    Mobile,
}

/// A Brazilian phone number that passed validation, without country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses a phone number from user input, punctuation allowed.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if !validate_phone(raw) {
            return Err(AppError::BadRequest(format!(
                "Invalid phone number: {}",
                raw.trim()
            )));
        }
        Ok(Self(digits_only(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn ddd(&self) -> &str {
        &self.0[..DDD_LEN]
    }

    pub fn subscriber(&self) -> &str {
        &self.0[DDD_LEN..]
    }

    pub fn kind(&self) -> PhoneKind {
        if self.0.len() == LANDLINE_LEN {
            PhoneKind::Landline
        } else {
            PhoneKind::Mobile
        }
    }

    pub fn formatted(&self) -> String {
        format_phone(&self.0)
    }

    /// Digits with the Brazil country code prefixed (`55DDNNNNNNNNN`).
    pub fn international(&self) -> String {
        format!("55{}", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

// ============ API Request Models ============

/// Query string carrying a raw, possibly punctuated identifier.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdentifierQuery {
    /// Raw user input, e.g. `529.982.247-25` or `(71) 99999-8888`.
    pub value: String,
}

/// Query string for the WhatsApp deep link.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WhatsAppQuery {
    /// Phone number with DDD, punctuation allowed.
    #[serde(alias = "phone")]
    pub telefone: String,
    /// Optional text to pre-fill in the chat.
    pub message: Option<String>,
}

// ============ API Response Models ============

/// Result of normalizing a CPF.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CpfNormalization {
    pub input: String,
    pub digits: String,
    pub formatted: String,
    pub valid: bool,
}

/// Result of normalizing a phone number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhoneNormalization {
    pub input: String,
    pub digits: String,
    pub formatted: String,
    pub valid: bool,
    /// Only present for valid numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PhoneKind>,
    /// E.164 form when the number is allocated in the BR numbering plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e164: Option<String>,
}

/// WhatsApp deep link for a validated phone number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WhatsAppLinkResponse {
    /// Number as sent to WhatsApp, country code included.
    pub number: String,
    pub url: String,
}
