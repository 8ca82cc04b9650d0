//! Contact form state and validation.
//!
//! DESIGN
//! ======
//! `validate` is a pure function over a `FormState` snapshot. `submit` runs
//! it to completion before touching anything, so a rejected submit leaves the
//! form exactly as typed and an accepted one resets everything at once.
//! Submissions stay in the browser; there is no contact endpoint.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

/// Acknowledgment shown after a successful submit.
pub const SUBMITTED_TEXT: &str = "Form submitted!";

/// License categories offered in the form's select box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LicenseType {
    Office,
    Antivirus,
    Design,
}

impl LicenseType {
    pub const ALL: [Self; 3] = [Self::Office, Self::Antivirus, Self::Design];

    /// Submitted `<option>` value.
    pub fn value(self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Antivirus => "Antivirus",
            Self::Design => "Design",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Office => "Office Suite",
            Self::Antivirus => "Antivirus",
            Self::Design => "Design Software",
        }
    }
}

/// A required contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Company,
    License,
}

impl ContactField {
    pub const REQUIRED: [Self; 4] = [Self::Name, Self::Email, Self::Company, Self::License];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::License => "License",
        }
    }

    fn required_message(self) -> String {
        format!("{} is required", self.label())
    }
}

/// Current contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Raw select value; one of [`LicenseType::value`] or empty.
    pub license: String,
    pub message: String,
}

impl FormState {
    fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::License => &self.license,
        }
    }
}

/// Per-field error messages from the last validation run.
pub type ValidationErrors = BTreeMap<ContactField, String>;

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    /// Validation failed; errors are shown and nothing else changes.
    Rejected,
    /// Validation passed; carries the acknowledgment to show.
    Accepted { acknowledgment: String },
}

/// Report every empty required field.
///
/// The license is checked for presence only, not against [`LicenseType`].
pub fn validate(form: &FormState) -> ValidationErrors {
    ContactField::REQUIRED
        .into_iter()
        .filter(|field| form.value(*field).is_empty())
        .map(|field| (field, field.required_message()))
        .collect()
}

/// Decide a submit attempt without mutating anything.
///
/// The previous errors never leak into the result: they are replaced
/// wholesale by the fresh validation.
pub fn submit(form: &FormState, _current: &ValidationErrors) -> (SubmitAction, ValidationErrors) {
    let errors = validate(form);
    if errors.is_empty() {
        (SubmitAction::Accepted { acknowledgment: SUBMITTED_TEXT.to_owned() }, ValidationErrors::new())
    } else {
        (SubmitAction::Rejected, errors)
    }
}

/// Contact section state provided via context.
#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub form: FormState,
    pub errors: ValidationErrors,
    /// Last acknowledgment, cleared as soon as the user edits again.
    pub acknowledgment: Option<String>,
}

impl ContactState {
    /// Set one field from user input.
    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.form.name,
            FormField::Email => &mut self.form.email,
            FormField::Company => &mut self.form.company,
            FormField::License => &mut self.form.license,
            FormField::Message => &mut self.form.message,
        };
        *slot = value;
        self.acknowledgment = None;
    }

    /// Validate and apply the outcome atomically.
    pub fn submit(&mut self) -> SubmitAction {
        let (action, errors) = submit(&self.form, &self.errors);
        self.errors = errors;
        match &action {
            SubmitAction::Rejected => {}
            SubmitAction::Accepted { acknowledgment } => {
                self.form = FormState::default();
                self.acknowledgment = Some(acknowledgment.clone());
            }
        }
        action
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Any editable form field, including the optional message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    License,
    Message,
}
