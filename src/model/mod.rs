//! Request and response shapes exchanged with API clients.
//!
//! Each endpoint has its own output structure; nested records are embedded through separate
//! DTO types without back-references so serialization always terminates.

pub mod api;
pub mod mission;
pub mod planet;
pub mod scientist;
