pub mod food;
pub mod game;
pub mod snake;
pub mod term;

/// Signed so that a step onto or past the wall ring is representable
/// before the collision check runs.
pub type GridInt = i16;

/// (row, column)
pub type Coords = (GridInt, GridInt);
