use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Text shown on a cell whose clue is still hidden.
pub const MASKED: &str = "?";

/// How far a clue has been revealed; only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    ShowingQuestion,
    ShowingAnswer,
}

impl RevealState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::ShowingAnswer)
    }

    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => ShowingQuestion,
            ShowingQuestion | ShowingAnswer => ShowingAnswer,
        }
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Text currently on display for this clue.
    pub fn face(&self) -> &str {
        use RevealState::*;
        match self.state {
            Hidden => MASKED,
            ShowingQuestion => &self.question,
            ShowingAnswer => &self.answer,
        }
    }

    /// Advances the reveal state, returning the text to show next.
    ///
    /// Hidden emits the question, ShowingQuestion emits the answer, ShowingAnswer emits nothing and stays put.
    pub fn reveal(&mut self) -> Option<&str> {
        if self.state.is_terminal() {
            return None;
        }
        self.state = self.state.next();
        Some(self.face())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_emits_question_then_answer_then_nothing() {
        let mut clue = Clue::new("2+2", "4");
        assert_eq!(clue.state(), RevealState::Hidden);
        assert_eq!(clue.face(), MASKED);

        assert_eq!(clue.reveal(), Some("2+2"));
        assert_eq!(clue.state(), RevealState::ShowingQuestion);

        assert_eq!(clue.reveal(), Some("4"));
        assert_eq!(clue.state(), RevealState::ShowingAnswer);

        assert_eq!(clue.reveal(), None);
        assert_eq!(clue.state(), RevealState::ShowingAnswer);
        assert_eq!(clue.face(), "4");
    }

    #[test]
    fn terminal_state_has_no_successor() {
        assert_eq!(RevealState::ShowingAnswer.next(), RevealState::ShowingAnswer);
        assert!(RevealState::ShowingAnswer.is_terminal());
        assert!(!RevealState::ShowingQuestion.is_terminal());
    }
}
