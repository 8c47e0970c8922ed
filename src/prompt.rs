use crate::error::Error;
use dialoguer::Input;

/// Source of interactive yes/no answers
pub trait Confirmation: Send + Sync {
    /// Ask `question` and return the raw answer
    ///
    /// # Errors
    ///
    /// Returns [`Error::Prompt`] if the answer cannot be read
    fn ask(&self, question: &str) -> Result<String, Error>;
}

/// Reads the answer from the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Confirmation for Console {
    fn ask(&self, question: &str) -> Result<String, Error> {
        Ok(Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?)
    }
}

/// `true` only for a `y` or `Y` answer
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes("Y"));
        assert!(is_yes(" y\n"));
        assert!(!is_yes("yes"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
        assert!(!is_yes("N"));
    }
}
