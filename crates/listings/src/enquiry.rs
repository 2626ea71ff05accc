//! Free-service enquiry form.
//!
//! Validation is presence/format only. Submission goes through an
//! [`EnquirySink`]; the bundled [`UiOnlySink`] just logs the enquiry,
//! since there is no backend to deliver it to.

use anyhow::Result;
use catalog::{Country, ServiceType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{info, warn};

/// Countries offered by the form's "study country" selector.
pub const STUDY_COUNTRIES: &[Country] = &[
    Country::Uk,
    Country::Usa,
    Country::Canada,
    Country::Australia,
    Country::Germany,
    Country::Ireland,
    Country::Other,
];

pub const CONFIRMATION: &str = "Thanks! Our team will reach out soon.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnquiryForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub service: ServiceType,
    pub study_country: Country,
    /// Free text, e.g. "Sep 2026".
    pub intake: String,
    /// Free text, e.g. "£150-£250/wk".
    pub budget: String,
    pub message: String,
    pub consent: bool,
}

impl Default for EnquiryForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            email: String::new(),
            service: ServiceType::AccommodationShortlist,
            study_country: Country::Uk,
            intake: String::new(),
            budget: String::new(),
            message: String::new(),
            consent: true,
        }
    }
}

/// Form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FullName,
    Phone,
    Email,
    Consent,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::FullName => "full name",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Consent => "consent",
        };
        f.write_str(name)
    }
}

/// Every failed rule, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    errors: BTreeMap<FormField, &'static str>,
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for FormErrors {}

impl FormErrors {
    fn insert(&mut self, field: FormField, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages in field order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.errors.values().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }
}

impl EnquiryForm {
    /// Check required fields; all failures are reported at once.
    pub fn validate(&self) -> std::result::Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        if self.full_name.trim().is_empty() {
            errors.insert(FormField::FullName, "Name is required");
        }
        if self.phone.trim().is_empty() {
            errors.insert(FormField::Phone, "Phone is required");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            errors.insert(FormField::Email, "Valid email is required");
        }
        if !self.consent {
            errors.insert(FormField::Consent, "Please accept the consent");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validate, then hand the enquiry to `sink`.
    ///
    /// Validation failures come back as a [`FormErrors`] inside the
    /// `anyhow::Error`, so callers can `downcast_ref` to show per-field
    /// messages.
    pub fn submit(&self, sink: &dyn EnquirySink) -> Result<Receipt> {
        if let Err(errors) = self.validate() {
            warn!(failed = errors.len(), "Enquiry rejected");
            return Err(errors.into());
        }
        sink.submit(self)
    }
}

/// What the user sees after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub service: ServiceType,
    pub study_country: Country,
    pub confirmation: &'static str,
    /// Delivery note from the sink.
    pub note: String,
}

/// Where validated enquiries go.
pub trait EnquirySink: Send + Sync {
    /// Sink name (for logging/debugging)
    fn name(&self) -> &str;

    fn submit(&self, form: &EnquiryForm) -> Result<Receipt>;
}

/// Accepts every enquiry and delivers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOnlySink;

impl UiOnlySink {
    pub const NOTE: &'static str = "UI only, backend later";
}

impl EnquirySink for UiOnlySink {
    fn name(&self) -> &str {
        "ui_only"
    }

    fn submit(&self, form: &EnquiryForm) -> Result<Receipt> {
        info!(
            sink = self.name(),
            service = %form.service,
            country = %form.study_country,
            "Enquiry accepted"
        );
        Ok(Receipt {
            service: form.service,
            study_country: form.study_country,
            confirmation: CONFIRMATION,
            note: Self::NOTE.to_string(),
        })
    }
}
