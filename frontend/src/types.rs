//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - the analysis endpoint's response
//! - **Detail Types** - bibliometric fields with their labels and fallbacks
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the analysis endpoint.
///
/// Either `error` is set, or the remaining fields describe the generated
/// review. Every field is optional; see [`AnalysisResponse::into_outcome`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    /// Application error reported by the service
    #[serde(default, deserialize_with = "present_text")]
    pub error: Option<String>,
    /// Generated review, Markdown
    #[serde(default, deserialize_with = "lenient_text")]
    pub estado_del_arte: Option<String>,
    /// Bibliometric metadata of the analysed article
    #[serde(flatten)]
    pub details: BibliometricDetails,
    /// Shannon entropy of the generated review
    #[serde(default, deserialize_with = "lenient_number")]
    pub entropia_estado_del_arte: Option<f64>,
    /// Link to the generated Word document
    #[serde(default, deserialize_with = "present_text")]
    pub word_download_url: Option<String>,
}

/// The success half of an [`AnalysisResponse`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisReport {
    pub review: Option<String>,
    pub details: BibliometricDetails,
    pub entropy: Option<f64>,
    pub download_url: Option<String>,
}

impl AnalysisResponse {
    /// Split the response into its error or success path.
    ///
    /// The two are exclusive: when `error` is set nothing else is read.
    pub fn into_outcome(self) -> Result<AnalysisReport, String> {
        if let Some(error) = self.error {
            return Err(error);
        }

        Ok(AnalysisReport {
            review: self.estado_del_arte,
            details: self.details,
            entropy: self.entropia_estado_del_arte,
            download_url: self.word_download_url,
        })
    }
}

// =============================================================================
// Detail Types
// =============================================================================

/// Bibliometric metadata returned alongside the review.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BibliometricDetails {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub authors: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub is_scopus: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub journal: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub quartile: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subject_area: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subject_category: Option<String>,
}

/// One row of the details section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetailField {
    Title,
    Authors,
    IsScopus,
    Journal,
    Quartile,
    Country,
    SubjectArea,
    SubjectCategory,
}

impl DetailField {
    /// Display order of the details section.
    pub const ALL: [DetailField; 8] = [
        DetailField::Title,
        DetailField::Authors,
        DetailField::IsScopus,
        DetailField::Journal,
        DetailField::Quartile,
        DetailField::Country,
        DetailField::SubjectArea,
        DetailField::SubjectCategory,
    ];

    /// Label shown before the value.
    pub fn label(&self) -> &'static str {
        match self {
            DetailField::Title => "Título",
            DetailField::Authors => "Autores",
            DetailField::IsScopus => "Indexado en Scopus",
            DetailField::Journal => "Revista",
            DetailField::Quartile => "Cuartil SCImago",
            DetailField::Country => "País",
            DetailField::SubjectArea => "Área temática",
            DetailField::SubjectCategory => "Categoría temática",
        }
    }

    /// Shown when the response carries no value for this field.
    pub fn fallback(&self) -> &'static str {
        match self {
            DetailField::Title => "Título no disponible",
            DetailField::Authors => "Autores no disponibles",
            DetailField::IsScopus => "No disponible",
            DetailField::Journal => "Revista no disponible",
            DetailField::Quartile => "Cuartil no disponible",
            DetailField::Country => "País no disponible",
            DetailField::SubjectArea => "Área temática no disponible",
            DetailField::SubjectCategory => "Categoría temática no disponible",
        }
    }

    /// DOM id of the value element.
    pub fn element_id(&self) -> &'static str {
        match self {
            DetailField::Title => "detail-title",
            DetailField::Authors => "detail-authors",
            DetailField::IsScopus => "detail-is-scopus",
            DetailField::Journal => "detail-journal",
            DetailField::Quartile => "detail-quartile",
            DetailField::Country => "detail-country",
            DetailField::SubjectArea => "detail-subject-area",
            DetailField::SubjectCategory => "detail-subject-category",
        }
    }
}

impl BibliometricDetails {
    /// Raw value of a field, if the service sent one.
    pub fn get(&self, field: DetailField) -> Option<&str> {
        let value = match field {
            DetailField::Title => &self.title,
            DetailField::Authors => &self.authors,
            DetailField::IsScopus => &self.is_scopus,
            DetailField::Journal => &self.journal,
            DetailField::Quartile => &self.quartile,
            DetailField::Country => &self.country,
            DetailField::SubjectArea => &self.subject_area,
            DetailField::SubjectCategory => &self.subject_category,
        };
        value.as_deref()
    }

    /// Value to display: the field's value or its fallback.
    pub fn display(&self, field: DetailField) -> &str {
        self.get(field).unwrap_or_else(|| field.fallback())
    }
}

// =============================================================================
// Lenient decoding
// =============================================================================

/// Text field that tolerates numbers, booleans and string lists.
///
/// Blank strings decode to `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(|item| item.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Some(Value::Object(_)) | Some(Value::Null) | None => None,
    };
    Ok(text.filter(|s| !s.trim().is_empty()))
}

/// Field whose mere presence matters.
///
/// Only `null` and `""` count as absent. Strings are kept verbatim,
/// whitespace included; any other value becomes its JSON text.
fn present_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    };
    Ok(text.filter(|s| !s.is_empty()))
}

/// Number field that also accepts a numeric string.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Application errors reported by the service are not `AppError`s: they
/// arrive as data in [`AnalysisResponse::error`].
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// The request could not be built.
    #[error("Request error: {0}")]
    Request(String),
    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),
    /// The response body is not an analysis response.
    #[error("Decode error: {0}")]
    Decode(String),
    /// Clipboard write rejected.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    /// A browser API was missing or failed.
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
