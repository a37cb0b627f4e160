//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every handler and type
//! aliases for database models along with their conversions into API DTOs.

pub mod app;
pub mod db;
