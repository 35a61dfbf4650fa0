//! Project form gathering and validation.
//!
//! The form holds the raw field values as entered by the user. `parse`
//! applies the board's field rules and either produces a validated
//! [`ProjectDraft`] or the first violated rule as an error. Rejected input
//! never reaches the store.

use tracing::warn;

use crate::error::{InputError, Result};
use crate::rules::{NumberRules, TextRules};

/// Minimum trimmed length for a project description.
pub const DESCRIPTION_MIN_LEN: usize = 5;
/// Smallest allowed people count.
pub const PEOPLE_MIN: u32 = 1;
/// Largest allowed people count.
pub const PEOPLE_MAX: u32 = 5;

/// Raw project form fields, as entered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectForm {
    /// Entered title.
    pub title: String,
    /// Entered description.
    pub description: String,
    /// Entered people count, still a string.
    pub people: String,
}

impl ProjectForm {
    /// Creates a form from raw field values.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Validates the form and returns the trimmed field triple.
    ///
    /// Rules: title required; description required with a minimum trimmed
    /// length of [`DESCRIPTION_MIN_LEN`]; people numeric within
    /// [`PEOPLE_MIN`]..=[`PEOPLE_MAX`].
    pub fn parse(&self) -> Result<ProjectDraft> {
        let draft = self.check();
        if let Err(ref e) = draft {
            warn!(reason = %e, "Rejected project form");
        }
        draft
    }

    fn check(&self) -> Result<ProjectDraft> {
        if !TextRules::new().required().check(&self.title) {
            return Err(InputError::EmptyTitle);
        }

        if !TextRules::new().required().check(&self.description) {
            return Err(InputError::EmptyDescription);
        }
        if !TextRules::new().min_len(DESCRIPTION_MIN_LEN).check(&self.description) {
            return Err(InputError::DescriptionTooShort {
                min: DESCRIPTION_MIN_LEN,
                got: self.description.trim().len(),
            });
        }

        let people: u32 = self
            .people
            .trim()
            .parse()
            .map_err(|_| InputError::PeopleNotANumber(self.people.trim().to_string()))?;
        let bounds = NumberRules::new().min(PEOPLE_MIN as i64).max(PEOPLE_MAX as i64);
        if !bounds.check(people as i64) {
            return Err(InputError::PeopleOutOfRange {
                min: PEOPLE_MIN,
                max: PEOPLE_MAX,
                got: people,
            });
        }

        Ok(ProjectDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            people,
        })
    }
}

/// A validated, trimmed field triple ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    /// Trimmed title.
    pub title: String,
    /// Trimmed description.
    pub description: String,
    /// People count within bounds.
    pub people: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProjectForm {
        ProjectForm::new("Learn Rust", "Work through the book", "3")
    }

    #[test]
    fn test_valid_form_parses() {
        let draft = valid_form().parse().unwrap();

        assert_eq!(draft.title, "Learn Rust");
        assert_eq!(draft.description, "Work through the book");
        assert_eq!(draft.people, 3);
    }

    #[test]
    fn test_accepted_fields_are_trimmed() {
        let form = ProjectForm::new("  Learn Rust  ", "  Work through the book  ", " 3 ");
        let draft = form.parse().unwrap();

        assert_eq!(draft.title, "Learn Rust");
        assert_eq!(draft.description, "Work through the book");
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut form = valid_form();
        form.title = "   ".to_string();

        assert_eq!(form.parse(), Err(InputError::EmptyTitle));
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut form = valid_form();
        form.description = "".to_string();

        assert_eq!(form.parse(), Err(InputError::EmptyDescription));
    }

    #[test]
    fn test_short_description_rejected() {
        let mut form = valid_form();
        form.description = "abcd".to_string();

        assert_eq!(
            form.parse(),
            Err(InputError::DescriptionTooShort { min: 5, got: 4 })
        );
    }

    #[test]
    fn test_five_character_description_accepted() {
        let mut form = valid_form();
        form.description = "abcde".to_string();

        assert!(form.parse().is_ok());
    }

    #[test]
    fn test_non_numeric_people_rejected() {
        let mut form = valid_form();
        form.people = "many".to_string();

        assert_eq!(
            form.parse(),
            Err(InputError::PeopleNotANumber("many".to_string()))
        );
    }

    #[test]
    fn test_people_bounds() {
        for (value, ok) in [("0", false), ("1", true), ("5", true), ("6", false)] {
            let mut form = valid_form();
            form.people = value.to_string();
            assert_eq!(form.parse().is_ok(), ok, "people = {}", value);
        }
    }

    #[test]
    fn test_out_of_range_error_carries_bounds() {
        let mut form = valid_form();
        form.people = "6".to_string();

        assert_eq!(
            form.parse(),
            Err(InputError::PeopleOutOfRange {
                min: 1,
                max: 5,
                got: 6
            })
        );
    }
}
