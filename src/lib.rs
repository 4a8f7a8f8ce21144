//! # Connect Four
//!
//! Two-player Connect Four for the terminal. A 7x6 board engine with gravity
//! placement, four-in-a-row detection and lock state, driven either by a
//! Ratatui front end or a plain line prompt.
//!
//! ## Modules
//!
//! - [`game`] — Board engine, tokens and palette, player roster
//! - [`ui`] — Turn session, board rendering, TUI and prompt front ends
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
