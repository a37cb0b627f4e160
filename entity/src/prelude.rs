pub use super::mission::Entity as Mission;
pub use super::planet::Entity as Planet;
pub use super::scientist::Entity as Scientist;
