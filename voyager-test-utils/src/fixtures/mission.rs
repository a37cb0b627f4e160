use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{MissionModel, PlanetModel, ScientistModel},
    TestContext,
};

impl TestContext {
    pub fn mission<'a>(&'a self) -> MissionFixtures<'a> {
        MissionFixtures { setup: self }
    }
}

pub struct MissionFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> MissionFixtures<'a> {
    /// Insert a mission referencing existing scientist & planet record IDs.
    pub async fn insert_mission(
        &self,
        name: &str,
        scientist_id: i32,
        planet_id: i32,
    ) -> Result<MissionModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Mission::insert(entity::mission::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                scientist_id: ActiveValue::Set(scientist_id),
                planet_id: ActiveValue::Set(planet_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mission along with a new scientist & planet for it to reference.
    ///
    /// # Returns
    /// - `(MissionModel, ScientistModel, PlanetModel)` - The created records
    pub async fn insert_mock_mission(
        &self,
        name: &str,
        scientist_name: &str,
        planet_name: &str,
    ) -> Result<(MissionModel, ScientistModel, PlanetModel), TestError> {
        let scientist = self
            .setup
            .scientist()
            .insert_mock_scientist(scientist_name)
            .await?;
        let planet = self.setup.planet().insert_mock_planet(planet_name).await?;

        let mission = self.insert_mission(name, scientist.id, planet.id).await?;

        Ok((mission, scientist, planet))
    }
}
