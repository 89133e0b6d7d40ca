pub mod pulse;
pub mod simulation;
