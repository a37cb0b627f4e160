//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so the
//! same operations run against a plain connection or inside a transaction owned by the caller.

pub mod mission;
pub mod planet;
pub mod scientist;
