//! Multipart submission payloads for the validation endpoints.
//!
//! Each endpoint variant has its own form-field names. The request type
//! captures the fields once and renders them per endpoint.

use {
    reqwest::{
        StatusCode,
        multipart::{Form, Part},
    },
    serde::{Deserialize, Serialize},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP status {code}")]
    Status { code: StatusCode, body: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Selects the validation endpoint a document is submitted to.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum ValidationType {
    General,
    Sme,
    Academic,
}

/// Teacher/student distinction for academic submissions. Forwarded as a
/// form field; both variants route to the same endpoint.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Default)]
pub enum AcademicType {
    Teacher,
    #[default]
    Student,
}

impl AcademicType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }
}

/// The document to validate.
#[derive(Clone, Debug)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

/// Form fields captured alongside the document.
#[derive(Clone, Debug)]
pub struct ValidationRequest {
    pub document: Document,
    pub first_name: String,
    pub last_name: String,
    pub academic_type: Option<AcademicType>,
    pub doc_type: Option<String>,
    pub doc_number: Option<String>,
}

impl ValidationRequest {
    /// Renders the multipart body for the given endpoint variant. The sme
    /// and academic endpoints use their own field names; the general
    /// endpoint takes the captured names unchanged and dispatches server
    /// side on `validationType`.
    pub(crate) fn form(&self, validation_type: ValidationType) -> Result<Form, Error> {
        let document = Part::bytes(self.document.bytes.clone())
            .file_name(self.document.file_name.clone())
            .mime_str(&self.document.mime_type)?;
        let form = match validation_type {
            ValidationType::Sme => Form::new()
                .part("document", document)
                .text("user_name", self.first_name.clone())
                .text("user_lastname", self.last_name.clone()),
            ValidationType::Academic => Form::new()
                .part("document", document)
                .text("user_name", self.first_name.clone())
                .text("user_lastname", self.last_name.clone())
                .text("academic_type", self.academic_type.unwrap_or_default().as_str()),
            ValidationType::General => {
                let mut form = Form::new()
                    .part("document", document)
                    .text("validationType", self.kind())
                    .text("firstName", self.first_name.clone())
                    .text("lastName", self.last_name.clone());
                if let Some(doc_type) = &self.doc_type {
                    form = form.text("docType", doc_type.clone());
                }
                if let Some(doc_number) = &self.doc_number {
                    form = form.text("docNumber", doc_number.clone());
                }
                form
            }
        };
        Ok(form)
    }

    // The combined endpoint recognizes an academic submission by its
    // academic-type field and treats everything else as sme.
    fn kind(&self) -> &'static str {
        if self.academic_type.is_some() { "academic" } else { "sme" }
    }
}

/// Verdict returned by every validation endpoint.
#[derive(PartialEq, Clone, Debug, Deserialize, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub confidence: f64,
    /// Endpoint-specific analysis details, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
