//! Voyager: a REST API tracking scientists, the planets they visit, and the missions that
//! take them there.

pub mod model;
pub mod server;
