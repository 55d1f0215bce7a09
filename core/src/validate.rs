//! Local checks run before a request is built.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Argument;

/// Minimum number of premises a savable argument carries.
pub const MIN_PREMISES: usize = 2;

/// Check an argument in order: conclusion, premise count, premise uniqueness.
pub fn validate_argument(argument: &Argument) -> Result<(), ValidationError> {
    if argument.conclusion.is_empty() {
        return Err(ValidationError::MissingConclusion);
    }
    validate_premises(&argument.premises)
}

/// Reports the first premise that repeats an earlier one.
pub fn validate_premises(premises: &[String]) -> Result<(), ValidationError> {
    if premises.len() < MIN_PREMISES {
        return Err(ValidationError::TooFewPremises);
    }
    let mut seen = HashSet::with_capacity(premises.len());
    for premise in premises {
        if !seen.insert(premise.as_str()) {
            return Err(ValidationError::DuplicatePremise(premise.clone()));
        }
    }
    Ok(())
}

pub fn validate_conclusion_query(conclusion: &str) -> Result<(), ValidationError> {
    if conclusion.is_empty() {
        return Err(ValidationError::EmptyConclusionQuery);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn socrates() -> Argument {
        Argument::new("Socrates is mortal", ["Socrates is a man", "All men are mortal"])
    }

    #[test]
    fn valid_argument_passes() {
        assert_eq!(validate_argument(&socrates()), Ok(()));
    }

    #[test]
    fn missing_conclusion_is_checked_first() {
        let argument = Argument::new("", ["only one"]);
        assert_eq!(validate_argument(&argument), Err(ValidationError::MissingConclusion));
    }

    #[test]
    fn one_premise_is_too_few() {
        let argument = Argument::new("Socrates is mortal", ["only one"]);
        assert_eq!(validate_argument(&argument), Err(ValidationError::TooFewPremises));
    }

    #[test]
    fn no_premises_is_too_few() {
        let argument = Argument::new("Socrates is mortal", Vec::<String>::new());
        assert_eq!(validate_argument(&argument), Err(ValidationError::TooFewPremises));
    }

    #[test]
    fn first_duplicate_is_reported() {
        let argument = Argument::new("c", ["a", "b", "c", "b", "a"]);
        assert_eq!(
            validate_argument(&argument),
            Err(ValidationError::DuplicatePremise("b".to_string()))
        );
    }

    #[test]
    fn premises_are_compared_exactly() {
        let argument = Argument::new("c", ["All men are mortal", "all men are mortal"]);
        assert_eq!(validate_argument(&argument), Ok(()));
    }

    #[test]
    fn empty_conclusion_query_is_rejected() {
        assert_eq!(validate_conclusion_query(""), Err(ValidationError::EmptyConclusionQuery));
        assert_eq!(validate_conclusion_query("Socrates is mortal"), Ok(()));
    }
}
