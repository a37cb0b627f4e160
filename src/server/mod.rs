//! Server application core modules.
//!
//! This module contains all server-side functionality for the Voyager application: HTTP
//! routing, request handlers, business logic services, database repositories, error
//! handling and configuration.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
