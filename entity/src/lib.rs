//! SeaORM entities for the `scientists`, `planets` and `missions` tables.

pub mod prelude;

pub mod mission;
pub mod planet;
pub mod scientist;
