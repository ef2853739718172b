//! # Bean Math
//!
//! An arithmetic practice game for children. A random equation is shown at one
//! of three difficulty levels; the player answers by typing a number or by
//! placing colored beans on a grid until their count matches the result.
//!
//! ## Modules
//!
//! - [`game`] — Core logic: operators, levels, problem generation, evaluation,
//!   bean board, session controller
//! - [`ui`] — Terminal UI: page layout, bean grid, keyboard and mouse handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
