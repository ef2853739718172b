use log::{debug, info};

use super::answer::{parse_answer, RESET_ANSWER};
use super::{BeanBoard, BeanColor, Level, Operator, Problem, ProblemGenerator};

/// Feedback texts shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FeedbackTexts {
    pub correct: String,
    pub recount_beans: String,
    pub try_again: String,
}

impl Default for FeedbackTexts {
    fn default() -> Self {
        FeedbackTexts {
            correct: "🎊😺😸 BRAVO 😹😽🎊".to_string(),
            recount_beans: "🌟 Recount your beans! 🌟".to_string(),
            try_again: "😭 Try again! 😭".to_string(),
        }
    }
}

/// Result of a processed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    /// Typed answer was wrong but the bean count equals the solution
    BeanCountMatch,
    TryAgain,
}

/// Raw key as delivered by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Enter,
    Escape,
    Char(char),
}

/// How the answer field should take focus after an answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusHint {
    /// Answer is still the reset value; the typed key replaces it
    SelectAll,
    PlaceCursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyReaction {
    Submitted(Option<SubmitOutcome>),
    AnswerReset,
    FocusAnswer(FocusHint),
    Ignored,
}

/// Owner of all per-session state; every user action goes through here.
pub struct GameSession {
    level: Level,
    operator: Operator,
    problem: Problem,
    answer: String,
    beans: BeanBoard,
    message: String,
    can_answer: bool,
    texts: FeedbackTexts,
    generator: ProblemGenerator,
}

impl GameSession {
    pub fn new(level: Level, operator: Operator, texts: FeedbackTexts) -> Self {
        Self::with_generator(level, operator, texts, ProblemGenerator::new())
    }

    pub fn with_generator(
        level: Level,
        operator: Operator,
        texts: FeedbackTexts,
        mut generator: ProblemGenerator,
    ) -> Self {
        let problem = generator.generate(level, operator);
        GameSession {
            level,
            operator,
            problem,
            answer: RESET_ANSWER.to_string(),
            beans: BeanBoard::new(),
            message: String::new(),
            can_answer: true,
            texts,
            generator,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn beans(&self) -> &BeanBoard {
        &self.beans
    }

    /// Current feedback; empty means nothing is shown
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn can_answer(&self) -> bool {
        self.can_answer
    }

    /// Replace the current problem, adopting its operator.
    pub fn load_problem(&mut self, problem: Problem) {
        self.operator = problem.operator();
        self.problem = problem;
    }

    fn regenerate(&mut self) {
        self.problem = self.generator.generate(self.level, self.operator);
    }

    /// Check the typed answer, then the bean count, against the solution.
    ///
    /// Returns `None` without touching anything while answering is disarmed.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        if !self.can_answer {
            debug!("submit ignored, answering disarmed");
            return None;
        }

        let asked = self.problem.to_string();
        let correct = self.problem.solution();
        let outcome = if parse_answer(&self.answer) == Some(correct) {
            self.message = self.texts.correct.clone();
            self.regenerate();
            self.beans.clear();
            self.can_answer = false;
            SubmitOutcome::Correct
        } else if i64::try_from(self.beans.count()).ok() == Some(correct) {
            self.message = self.texts.recount_beans.clone();
            SubmitOutcome::BeanCountMatch
        } else {
            self.message = self.texts.try_again.clone();
            SubmitOutcome::TryAgain
        };
        info!("{} = {:?} -> {:?}", asked, self.answer, outcome);
        self.answer = RESET_ANSWER.to_string();
        Some(outcome)
    }

    pub fn change_operator(&mut self, operator: Operator) {
        info!("operator -> {}", operator.name());
        self.operator = operator;
        self.regenerate();
    }

    pub fn change_level(&mut self, level: Level) {
        info!("level -> {}", level);
        self.level = level;
        self.regenerate();
    }

    /// Replace the board wholesale and clear the feedback.
    pub fn on_board_change(&mut self, board: BeanBoard) {
        self.beans = board;
        self.message.clear();
    }

    pub fn add_bean(&mut self, color: BeanColor) {
        let mut board = self.beans.clone();
        board.add(color);
        debug!("bean {} added, {} on board", color, board.count());
        self.on_board_change(board);
    }

    /// Remove the bean at `position`; feedback is cleared even if no bean is there.
    pub fn remove_bean(&mut self, position: usize) {
        let mut board = self.beans.clone();
        if let Some(color) = board.remove(position) {
            debug!("bean {} removed from {}, {} left", color, position, board.count());
        }
        self.on_board_change(board);
    }

    /// Direct edit of the answer field.
    pub fn set_answer(&mut self, text: impl Into<String>) {
        self.answer = text.into();
    }

    pub fn reset_answer(&mut self) {
        self.answer = RESET_ANSWER.to_string();
    }

    /// React to a key press.
    ///
    /// Digits and `-` clear the feedback and re-arm answering; that is the only
    /// way answering is re-armed after a correct submission.
    pub fn handle_key(&mut self, key: GameKey) -> KeyReaction {
        match key {
            GameKey::Enter => KeyReaction::Submitted(self.submit()),
            GameKey::Escape => {
                self.reset_answer();
                KeyReaction::AnswerReset
            }
            GameKey::Char(c) if c.is_ascii_digit() || c == '-' => {
                if !self.message.is_empty() {
                    self.message.clear();
                }
                self.can_answer = true;

                let hint = if self.answer == RESET_ANSWER {
                    FocusHint::SelectAll
                } else {
                    FocusHint::PlaceCursor
                };
                KeyReaction::FocusAnswer(hint)
            }
            GameKey::Char(_) => KeyReaction::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(operator: Operator, operands: Vec<i64>) -> GameSession {
        let mut session = GameSession::with_generator(
            Level::Simple,
            operator,
            FeedbackTexts::default(),
            ProblemGenerator::with_seed(17),
        );
        session.load_problem(Problem::new(operator, operands));
        session
    }

    #[test]
    fn test_initial_state() {
        let session = GameSession::with_generator(
            Level::Simple,
            Operator::Addition,
            FeedbackTexts::default(),
            ProblemGenerator::with_seed(1),
        );
        assert_eq!(session.level(), Level::Simple);
        assert_eq!(session.operator(), Operator::Addition);
        assert_eq!(session.problem().operands().len(), 2);
        assert_eq!(session.answer(), "0");
        assert!(session.beans().is_empty());
        assert!(session.message().is_empty());
        assert!(session.can_answer());
    }

    #[test]
    fn test_correct_answer_disarms_until_digit() {
        let mut session = session_with(Operator::Addition, vec![3, 4]);
        session.add_bean(1);
        session.set_answer("7");

        assert_eq!(session.submit(), Some(SubmitOutcome::Correct));
        assert_eq!(session.message(), FeedbackTexts::default().correct);
        assert!(session.beans().is_empty());
        assert_eq!(session.answer(), "0");
        assert!(!session.can_answer());

        let next_problem = session.problem().clone();
        session.set_answer("99");
        assert_eq!(session.submit(), None);
        assert_eq!(session.answer(), "99");
        assert_eq!(session.problem(), &next_problem);
        assert_eq!(session.message(), FeedbackTexts::default().correct);
    }

    #[test]
    fn test_enter_after_correct_is_noop() {
        let mut session = session_with(Operator::Addition, vec![3, 4]);
        session.set_answer("7");
        assert_eq!(
            session.handle_key(GameKey::Enter),
            KeyReaction::Submitted(Some(SubmitOutcome::Correct))
        );
        assert_eq!(session.handle_key(GameKey::Enter), KeyReaction::Submitted(None));
    }

    #[test]
    fn test_bean_count_match_keeps_board_and_arm() {
        let mut session = session_with(Operator::Addition, vec![3, 4]);
        for color in 0..7 {
            session.add_bean(color);
        }

        assert_eq!(session.submit(), Some(SubmitOutcome::BeanCountMatch));
        assert_eq!(session.message(), FeedbackTexts::default().recount_beans);
        assert_eq!(session.beans().count(), 7);
        assert!(session.can_answer());
        assert_eq!(session.problem().operands(), &[3, 4]);
    }

    #[test]
    fn test_wrong_answer_try_again() {
        let mut session = session_with(Operator::Addition, vec![3, 4]);
        session.set_answer("5");

        assert_eq!(session.submit(), Some(SubmitOutcome::TryAgain));
        assert_eq!(session.message(), FeedbackTexts::default().try_again);
        assert_eq!(session.answer(), "0");
        assert!(session.can_answer());
    }

    #[test]
    fn test_not_a_number_is_try_again() {
        let mut session = session_with(Operator::Subtraction, vec![0, 0]);
        session.set_answer("");
        session.add_bean(3);
        assert_eq!(session.submit(), Some(SubmitOutcome::TryAgain));
    }

    #[test]
    fn test_typed_answer_wins_over_bean_count() {
        let mut session = session_with(Operator::Multiplication, vec![2, 3]);
        for _ in 0..6 {
            session.add_bean(0);
        }
        session.set_answer("6");
        assert_eq!(session.submit(), Some(SubmitOutcome::Correct));
        assert!(session.beans().is_empty());
    }

    #[test]
    fn test_negative_solution_never_matches_beans() {
        let mut session = session_with(Operator::Subtraction, vec![3, 10]);
        assert_eq!(session.submit(), Some(SubmitOutcome::TryAgain));
        session.set_answer("-7");
        assert_eq!(session.submit(), Some(SubmitOutcome::Correct));
    }

    #[test]
    fn test_digit_rearms_and_clears_message() {
        let mut session = session_with(Operator::Addition, vec![1, 1]);
        session.set_answer("2");
        session.submit();
        assert!(!session.can_answer());

        assert_eq!(
            session.handle_key(GameKey::Char('5')),
            KeyReaction::FocusAnswer(FocusHint::SelectAll)
        );
        assert!(session.can_answer());
        assert!(session.message().is_empty());

        session.set_answer("5");
        assert_eq!(
            session.handle_key(GameKey::Char('-')),
            KeyReaction::FocusAnswer(FocusHint::PlaceCursor)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut session = session_with(Operator::Addition, vec![1, 1]);
        session.set_answer("2");
        session.submit();

        assert_eq!(session.handle_key(GameKey::Char('a')), KeyReaction::Ignored);
        assert!(!session.can_answer());
        assert!(!session.message().is_empty());
    }

    #[test]
    fn test_escape_resets_answer_only() {
        let mut session = session_with(Operator::Addition, vec![1, 1]);
        session.set_answer("3");
        session.submit();
        session.set_answer("12");

        assert_eq!(session.handle_key(GameKey::Escape), KeyReaction::AnswerReset);
        assert_eq!(session.answer(), "0");
        assert_eq!(session.message(), FeedbackTexts::default().try_again);
    }

    #[test]
    fn test_change_level_regenerates_and_keeps_rest() {
        let mut session = session_with(Operator::Addition, vec![1000, 1000]);
        session.add_bean(2);
        session.set_answer("8");

        session.change_level(Level::Hard);
        assert_eq!(session.level(), Level::Hard);
        assert_ne!(session.problem().operands(), &[1000, 1000]);
        assert!(session.problem().operands().iter().all(|n| (0..=100).contains(n)));
        assert_eq!(session.beans().count(), 1);
        assert_eq!(session.answer(), "8");
        assert!(session.can_answer());
    }

    #[test]
    fn test_change_operator_regenerates() {
        let mut session = session_with(Operator::Addition, vec![1000, 1000]);
        session.change_operator(Operator::Multiplication);
        assert_eq!(session.operator(), Operator::Multiplication);
        assert_eq!(session.problem().operator(), Operator::Multiplication);
        assert!(session.problem().operands().iter().all(|n| (1..=3).contains(n)));
    }

    #[test]
    fn test_board_change_clears_message() {
        let mut session = session_with(Operator::Addition, vec![1, 1]);
        session.submit();
        assert!(!session.message().is_empty());

        session.remove_bean(4);
        assert!(session.message().is_empty());
        assert!(session.can_answer());

        session.submit();
        session.on_board_change(BeanBoard::from_beans(vec![1, 2]));
        assert!(session.message().is_empty());
        assert_eq!(session.beans().beans(), &[1, 2]);
    }

    #[test]
    fn test_remove_bean_by_position() {
        let mut session = session_with(Operator::Addition, vec![1, 1]);
        session.add_bean(2);
        session.add_bean(5);
        session.remove_bean(0);
        assert_eq!(session.beans(), &BeanBoard::from_beans(vec![5]));
    }
}
