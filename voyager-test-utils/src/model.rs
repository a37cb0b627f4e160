//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main voyager crate to keep fixture signatures readable.

/// Type alias for scientist database model.
pub type ScientistModel = entity::scientist::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for mission database model.
pub type MissionModel = entity::mission::Model;
