//! Core types and definitions for the ARTILLERY game.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, board layout, commands, events, and constants.
//! It has no dependency on a terminal or any input mechanism.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod layout;
pub mod types;
