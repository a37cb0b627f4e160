//! Test fixture modules for database record creation.
//!
//! Fixtures insert records during test execution (Phase 2 of the test architecture):
//!
//! - `scientist` - Scientist records
//! - `planet` - Planet records
//! - `mission` - Mission records, optionally creating the scientist & planet they reference
//! - `factory` - In-memory models for tests that don't touch the database

pub mod factory;
pub mod mission;
pub mod planet;
pub mod scientist;
