use sea_orm::DatabaseConnection;

use crate::{
    model::planet::PlanetDto,
    server::{data::planet::PlanetRepository, error::Error},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }
}
