mod error;
mod moves;
mod piece;
mod position;
mod square;
mod status;
mod view;
pub mod piece_moves;

#[cfg(test)]
mod tests;

pub use error::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::*;
pub use status::*;
pub use view::*;
pub use piece_moves::SquareSet;
