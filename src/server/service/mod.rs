//! Service layer for business logic.
//!
//! Services coordinate repositories, run multi-row writes inside a transaction, translate
//! constraint violations into validation errors and assemble the DTOs returned by controllers.

pub mod mission;
pub mod planet;
pub mod scientist;
