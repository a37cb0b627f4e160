use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::mission::CreateMissionDto;

pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    /// Creates a new instance of [`MissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new mission
    ///
    /// # Errors
    /// - Foreign key violation if the scientist or planet does not exist
    /// - Unique constraint violation if the name is taken or the scientist is already on a mission
    pub async fn create(&self, mission: CreateMissionDto) -> Result<entity::mission::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mission = entity::mission::ActiveModel {
            name: ActiveValue::Set(mission.name),
            scientist_id: ActiveValue::Set(mission.scientist_id),
            planet_id: ActiveValue::Set(mission.planet_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        mission.insert(self.db).await
    }

    /// Gets the missions of a scientist along with the planet each one visits
    pub async fn get_many_by_scientist_id(
        &self,
        scientist_id: i32,
    ) -> Result<Vec<(entity::mission::Model, Option<entity::planet::Model>)>, DbErr> {
        entity::prelude::Mission::find()
            .filter(entity::mission::Column::ScientistId.eq(scientist_id))
            .find_also_related(entity::planet::Entity)
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every mission the scientist is on
    pub async fn delete_by_scientist_id(&self, scientist_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Mission::delete_many()
            .filter(entity::mission::Column::ScientistId.eq(scientist_id))
            .exec(self.db)
            .await
    }
}
