//! State of the "Submit Comment" modal.
//!
//! The form is either closed, or open with a draft bound to its controls. All
//! changes go through the transition methods below so the component only ever
//! holds one `CommentFormState` in a signal.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::comment::NewComment;
use crate::utils::validators::{failures, ValidationError, AUTHOR_RULES};

/// Options offered by the rating select, in display order.
pub const RATING_OPTIONS: [&str; 5] = ["1", "2", "3", "4", "5"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub rating: String,
    pub author: String,
    pub text: String,
}

impl Default for CommentDraft {
    fn default() -> Self {
        // The select shows its first option until the user picks another.
        Self {
            rating: RATING_OPTIONS[0].to_string(),
            author: String::new(),
            text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Rating,
    Author,
    Text,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("the comment form is not open")]
    NotOpen,
    #[error("author is invalid: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    Invalid(Vec<ValidationError>),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CommentFormState {
    is_open: bool,
    draft: CommentDraft,
    author_touched: bool,
}

impl CommentFormState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn draft(&self) -> &CommentDraft {
        &self.draft
    }

    /// Opens with a fresh draft, or closes and drops the current one.
    pub fn toggle(&mut self) {
        if self.is_open {
            self.reset();
        } else {
            self.draft = CommentDraft::default();
            self.author_touched = false;
            self.is_open = true;
        }
    }

    /// Ignored while closed. Ratings outside `RATING_OPTIONS` are ignored too.
    pub fn update_field(&mut self, field: DraftField, value: String) {
        if !self.is_open {
            return;
        }
        match field {
            DraftField::Rating => {
                if RATING_OPTIONS.contains(&value.as_str()) {
                    self.draft.rating = value;
                }
            }
            DraftField::Author => self.draft.author = value,
            DraftField::Text => self.draft.text = value,
        }
    }

    pub fn touch_author(&mut self) {
        if self.is_open {
            self.author_touched = true;
        }
    }

    pub fn author_errors(&self) -> Vec<ValidationError> {
        failures(&AUTHOR_RULES, &self.draft.author)
    }

    /// Errors to render under the author field; empty until the field is touched.
    pub fn visible_author_errors(&self) -> Vec<ValidationError> {
        if self.is_open && self.author_touched {
            self.author_errors()
        } else {
            Vec::new()
        }
    }

    /// Validates the draft and, when it passes, closes the form and hands back
    /// the comment to emit. A rejected draft stays open for correction.
    pub fn submit(&mut self, campsite_id: u32) -> Result<NewComment, FormError> {
        if !self.is_open {
            return Err(FormError::NotOpen);
        }
        let errors = self.author_errors();
        if !errors.is_empty() {
            self.author_touched = true;
            return Err(FormError::Invalid(errors));
        }
        let draft = std::mem::take(&mut self.draft);
        self.reset();
        Ok(NewComment {
            campsite_id,
            rating: draft.rating,
            author: draft.author,
            text: draft.text,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_form() -> CommentFormState {
        let mut form = CommentFormState::default();
        form.toggle();
        form
    }

    #[test]
    fn test_starts_closed() {
        let form = CommentFormState::default();
        assert!(!form.is_open());
        assert_eq!(form.draft(), &CommentDraft::default());
    }

    #[test]
    fn test_empty_author_is_rejected_and_stays_open() {
        let mut form = open_form();
        let result = form.submit(3);
        assert_eq!(
            result,
            Err(FormError::Invalid(vec![
                ValidationError::Required,
                ValidationError::TooShort(2)
            ]))
        );
        assert!(form.is_open());
        assert_eq!(form.visible_author_errors().len(), 2);
    }

    #[test]
    fn test_valid_submit_emits_and_closes() {
        let mut form = open_form();
        form.update_field(DraftField::Rating, "5".into());
        form.update_field(DraftField::Author, "Al".into());
        form.update_field(DraftField::Text, "Great spot".into());

        let mut emitted = Vec::new();
        if let Ok(comment) = form.submit(7) {
            emitted.push(comment);
        }

        assert_eq!(
            emitted,
            vec![NewComment {
                campsite_id: 7,
                rating: "5".into(),
                author: "Al".into(),
                text: "Great spot".into(),
            }]
        );
        assert!(!form.is_open());
        assert_eq!(form.draft(), &CommentDraft::default());
    }

    #[test]
    fn test_rejected_draft_is_preserved() {
        let mut form = open_form();
        form.update_field(DraftField::Author, "A".into());
        form.update_field(DraftField::Text, "Lovely lake".into());
        assert!(form.submit(1).is_err());
        assert_eq!(form.draft().author, "A");
        assert_eq!(form.draft().text, "Lovely lake");

        form.update_field(DraftField::Author, "Ann".into());
        let comment = form.submit(1).unwrap();
        assert_eq!(comment.author, "Ann");
        assert_eq!(comment.rating, "1");
    }

    #[test]
    fn test_toggle_without_submit_emits_nothing() {
        let mut form = open_form();
        form.update_field(DraftField::Author, "Bo".into());
        form.toggle();
        assert!(!form.is_open());
        assert_eq!(form.submit(1), Err(FormError::NotOpen));
    }

    #[test]
    fn test_reopen_starts_fresh_draft() {
        let mut form = open_form();
        form.update_field(DraftField::Author, "Bo".into());
        form.touch_author();
        form.toggle();
        form.toggle();
        assert!(form.draft().author.is_empty());
        assert!(form.visible_author_errors().is_empty());
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = open_form();
        form.update_field(DraftField::Author, "A".into());
        assert!(form.visible_author_errors().is_empty());
        form.touch_author();
        assert_eq!(form.visible_author_errors(), vec![ValidationError::TooShort(2)]);
    }

    #[test]
    fn test_rating_outside_options_is_ignored() {
        let mut form = open_form();
        form.update_field(DraftField::Rating, "9".into());
        assert_eq!(form.draft().rating, "1");
        form.update_field(DraftField::Rating, "4".into());
        assert_eq!(form.draft().rating, "4");
    }

    #[test]
    fn test_edits_while_closed_are_ignored() {
        let mut form = CommentFormState::default();
        form.update_field(DraftField::Author, "Bo".into());
        form.touch_author();
        assert_eq!(form, CommentFormState::default());
    }

    #[test]
    fn test_state_serializes() {
        let mut form = open_form();
        form.update_field(DraftField::Author, "Bo".into());
        let json = serde_json::to_string(&form).unwrap();
        let restored: CommentFormState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, form);
    }
}
