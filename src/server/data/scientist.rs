use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::scientist::{CreateScientistDto, UpdateScientistDto};

pub struct ScientistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScientistRepository<'a, C> {
    /// Creates a new instance of [`ScientistRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new scientist
    ///
    /// Fails with a unique constraint violation if the name is already taken.
    pub async fn create(
        &self,
        scientist: CreateScientistDto,
    ) -> Result<entity::scientist::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let scientist = entity::scientist::ActiveModel {
            name: ActiveValue::Set(scientist.name),
            field_of_study: ActiveValue::Set(scientist.field_of_study),
            avatar: ActiveValue::Set(scientist.avatar),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        scientist.insert(self.db).await
    }

    pub async fn get(&self, scientist_id: i32) -> Result<Option<entity::scientist::Model>, DbErr> {
        entity::prelude::Scientist::find_by_id(scientist_id)
            .one(self.db)
            .await
    }

    /// Gets all scientists ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::scientist::Model>, DbErr> {
        entity::prelude::Scientist::find()
            .order_by_asc(entity::scientist::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `changes` to a scientist & refreshes `updated_at`
    ///
    /// Fields sent as `null` are skipped, callers reject them beforehand.
    ///
    /// Returns `Ok(None)` if the scientist does not exist.
    pub async fn update(
        &self,
        scientist_id: i32,
        changes: UpdateScientistDto,
    ) -> Result<Option<entity::scientist::Model>, DbErr> {
        let scientist = match entity::prelude::Scientist::find_by_id(scientist_id)
            .one(self.db)
            .await?
        {
            Some(scientist) => scientist,
            None => return Ok(None),
        };

        let mut scientist_am = scientist.into_active_model();
        if let Some(Some(name)) = changes.name {
            scientist_am.name = ActiveValue::Set(name);
        }
        if let Some(Some(field_of_study)) = changes.field_of_study {
            scientist_am.field_of_study = ActiveValue::Set(field_of_study);
        }
        if let Some(Some(avatar)) = changes.avatar {
            scientist_am.avatar = ActiveValue::Set(avatar);
        }
        scientist_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let scientist = scientist_am.update(self.db).await?;

        Ok(Some(scientist))
    }

    /// Deletes a scientist
    ///
    /// Returns OK regardless of scientist existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, scientist_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Scientist::delete_by_id(scientist_id)
            .exec(self.db)
            .await
    }
}
