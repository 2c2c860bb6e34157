//! Field validators for the comment form.
//!
//! The predicates mirror the form-control validators: `required`, `min_length`
//! and `max_length`. Lengths are counted in characters, not bytes.
use thiserror::Error;

/// A failed field rule. `Display` is the message shown under the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required")]
    Required,
    #[error("Must be at least {0} characters")]
    TooShort(usize),
    #[error("Must be at most {0} characters")]
    TooLong(usize),
}

pub fn required(value: &str) -> bool {
    !value.is_empty()
}

pub fn max_length(len: usize) -> impl Fn(&str) -> bool {
    move |value: &str| value.is_empty() || value.chars().count() <= len
}

pub fn min_length(len: usize) -> impl Fn(&str) -> bool {
    move |value: &str| !value.is_empty() && value.chars().count() >= len
}

/// A validator bound to a field, paired with the error it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
}

impl Rule {
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        let (passed, error) = match *self {
            Rule::Required => (required(value), ValidationError::Required),
            Rule::MinLength(len) => (min_length(len)(value), ValidationError::TooShort(len)),
            Rule::MaxLength(len) => (max_length(len)(value), ValidationError::TooLong(len)),
        };
        if passed {
            Ok(())
        } else {
            Err(error)
        }
    }
}

/// Rules bound to the author field.
pub const AUTHOR_RULES: [Rule; 3] = [Rule::Required, Rule::MinLength(2), Rule::MaxLength(15)];

/// Every failing rule for `value`, in the order the rules are declared.
pub fn failures(rules: &[Rule], value: &str) -> Vec<ValidationError> {
    rules
        .iter()
        .filter_map(|rule| rule.check(value).err())
        .collect()
}
