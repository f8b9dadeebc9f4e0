//! Registration rules for [`NewUser`] candidates.
//!
//! Checks run in a fixed order and every failure is collected, so a client
//! sees all problems with a submission at once:
//!
//! 1. name, surname, gender and birthdate are present (strings non-blank)
//! 2. name and surname start with a capital letter and contain only letters
//!
//! The format rule is only applied to values that passed the presence check,
//! so an absent name yields exactly one violation.

use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

use crate::models::{NewAddress, NewUser};

static PERSON_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z]*$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Violation {
    #[error("Name is required.")]
    NameRequired,
    #[error("Surname is required.")]
    SurnameRequired,
    #[error("Gender is required.")]
    GenderRequired,
    #[error("Birthdate is required.")]
    BirthdateRequired,
    #[error("Name must start with a capital letter and contain only letters.")]
    NameFormat,
    #[error("Surname must start with a capital letter and contain only letters.")]
    SurnameFormat,
}

/// Ordered, non-empty list of violations.
///
/// Displays as one message per line with no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.0.contains(&violation)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A candidate that passed [`validate_candidate`].
///
/// Only constructible through validation, so repositories can rely on every
/// required field being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUser {
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) gender: String,
    pub(crate) birthdate: NaiveDate,
    pub(crate) address: Option<NewAddress>,
}

impl ValidatedUser {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    pub fn address(&self) -> Option<&NewAddress> {
        self.address.as_ref()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

pub fn validate_candidate(candidate: &NewUser) -> Result<ValidatedUser, ValidationErrors> {
    let mut violations = Vec::new();

    let name = non_blank(&candidate.name);
    let surname = non_blank(&candidate.surname);
    let gender = non_blank(&candidate.gender);

    if name.is_none() {
        violations.push(Violation::NameRequired);
    }
    if surname.is_none() {
        violations.push(Violation::SurnameRequired);
    }
    if gender.is_none() {
        violations.push(Violation::GenderRequired);
    }
    if candidate.birthdate.is_none() {
        violations.push(Violation::BirthdateRequired);
    }
    if name.is_some_and(|n| !PERSON_NAME.is_match(n)) {
        violations.push(Violation::NameFormat);
    }
    if surname.is_some_and(|s| !PERSON_NAME.is_match(s)) {
        violations.push(Violation::SurnameFormat);
    }

    match (name, surname, gender, candidate.birthdate) {
        (Some(name), Some(surname), Some(gender), Some(birthdate)) if violations.is_empty() => {
            Ok(ValidatedUser {
                name: name.to_string(),
                surname: surname.to_string(),
                gender: gender.to_string(),
                birthdate,
                address: candidate.address.clone(),
            })
        }
        _ => Err(ValidationErrors(violations)),
    }
}
