//! Field values and validation for the lead forms.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld shape, matched anywhere in the value
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    ProjectType,
    Budget,
    Message,
}

impl Field {
    /// Key used on the wire and in the form markup.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ProjectType => "projectType",
            Field::Budget => "budget",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    Website,
    Ecommerce,
    Branding,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Website,
        ProjectType::Ecommerce,
        ProjectType::Branding,
        ProjectType::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ProjectType::Website => "website",
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::Branding => "branding",
            ProjectType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Website => "Website Design",
            ProjectType::Ecommerce => "E-commerce Store",
            ProjectType::Branding => "Branding & Identity",
            ProjectType::Other => "Something else",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Budget {
    Starter,
    Standard,
    Premium,
    Enterprise,
}

impl Budget {
    pub const ALL: [Budget; 4] = [
        Budget::Starter,
        Budget::Standard,
        Budget::Premium,
        Budget::Enterprise,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Budget::Starter => "starter",
            Budget::Standard => "standard",
            Budget::Premium => "premium",
            Budget::Enterprise => "enterprise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Budget::Starter => "Under R5,000",
            Budget::Standard => "R5,000 - R10,000",
            Budget::Premium => "R10,000 - R25,000",
            Budget::Enterprise => "R25,000+",
        }
    }
}

/// Current values of every input on a lead form.
///
/// `project_type` and `budget` hold the selected option id, or an empty
/// string when nothing is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::ProjectType => &self.project_type,
            Field::Budget => &self.budget,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::ProjectType => &mut self.project_type,
            Field::Budget => &mut self.budget,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Runs every rule independently and returns the complete error set.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required");
        }

        if self.email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.insert(Field::Email, "Please enter a valid email");
        }

        if self.message.trim().is_empty() {
            errors.insert(Field::Message, "Message is required");
        }

        errors
    }
}

/// Inline error messages keyed by the field that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, &'static str>);

impl FormErrors {
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}
