pub mod config;
pub mod diagnostics;
pub mod dynamics;
pub mod error;
pub mod grid;
pub mod simulation;
pub mod state;
pub mod trace;
