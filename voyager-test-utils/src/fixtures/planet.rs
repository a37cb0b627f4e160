use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::PlanetModel, TestContext};

impl TestContext {
    pub fn planet<'a>(&'a self) -> PlanetFixtures<'a> {
        PlanetFixtures { setup: self }
    }
}

pub struct PlanetFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PlanetFixtures<'a> {
    /// Insert a planet with the provided name and placeholder details.
    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                distance_from_earth: ActiveValue::Set("225 million km".to_string()),
                nearest_star: ActiveValue::Set("Sun".to_string()),
                image: ActiveValue::Set(format!(
                    "https://example.com/planets/{}.jpg",
                    name.to_lowercase()
                )),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
