mod board;
mod color;
mod file;
mod game;
mod movegen;
mod moves;
mod piece;
mod rank;
mod role;
mod square;

pub use board::*;
pub use color::*;
pub use file::*;
pub use game::*;
pub use movegen::*;
pub use moves::*;
pub use piece::*;
pub use rank::*;
pub use role::*;
pub use square::*;
