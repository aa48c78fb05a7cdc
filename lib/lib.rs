/// Chess domain types and the rules engine.
pub mod chess;
/// The line-oriented text protocol.
pub mod protocol;
