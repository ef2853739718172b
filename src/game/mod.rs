//! Core game logic: operators and levels, problem generation and evaluation,
//! the bean board, and the session controller that ties them together.

mod answer;
mod beans;
mod generator;
mod level;
mod operator;
mod problem;
mod session;

pub use answer::{parse_answer, RESET_ANSWER};
pub use beans::{BeanBoard, BeanColor, BOARD_CELLS, BOARD_COLUMNS, BOARD_ROWS, PALETTE_SIZE};
pub use generator::ProblemGenerator;
pub use level::Level;
pub use operator::Operator;
pub use problem::{evaluate, Problem};
pub use session::{FeedbackTexts, FocusHint, GameKey, GameSession, KeyReaction, SubmitOutcome};
