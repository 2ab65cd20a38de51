pub mod direction;
pub mod grid_world;

pub use direction::{encode, StateLabel};
pub use grid_world::{Action, Board, Cell, GridWorld, Pos};
