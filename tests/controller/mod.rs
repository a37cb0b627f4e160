//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, verifying status codes, response
//! bodies and error handling against an in-memory database.

mod scientist;

use voyager_test_utils::prelude::*;

use crate::util::{body_json, error_messages};
