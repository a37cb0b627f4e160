use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::model::planet::PlanetDto;

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet from the provided details, the ID of `planet` is ignored
    ///
    /// Planets are not created through the API, this is used when seeding the database.
    pub async fn create(&self, planet: PlanetDto) -> Result<entity::planet::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            distance_from_earth: ActiveValue::Set(planet.distance_from_earth),
            nearest_star: ActiveValue::Set(planet.nearest_star),
            image: ActiveValue::Set(planet.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets all planets ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }
}
