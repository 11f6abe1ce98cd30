//! Use cases

pub mod run_turn;
