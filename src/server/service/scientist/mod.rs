//! Scientist service layer.
//!
//! Business logic for creating, reading, updating and deleting scientists. Updates & deletes
//! run inside a transaction so a failure part way through leaves no partial changes behind.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        planet::PlanetDto,
        scientist::{
            CreateScientistDto, ScientistDetailDto, ScientistDto, ScientistMissionDto,
            UpdateScientistDto,
        },
    },
    server::{
        data::{mission::MissionRepository, scientist::ScientistRepository},
        error::{
            validation::{map_unique_name, ValidationError},
            Error,
        },
    },
};

pub struct ScientistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScientistService<'a> {
    /// Creates a new instance of [`ScientistService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all scientists ordered by ID, without their missions
    pub async fn get_scientists(&self) -> Result<Vec<ScientistDto>, Error> {
        let scientist_repo = ScientistRepository::new(self.db);

        let scientists = scientist_repo.get_all().await?;

        Ok(scientists.into_iter().map(ScientistDto::from).collect())
    }

    /// Creates a new scientist
    ///
    /// # Errors
    /// - [`ValidationError::BlankName`] if the name is empty or whitespace
    /// - [`ValidationError::DuplicateName`] if another scientist already has the name
    pub async fn create_scientist(
        &self,
        scientist: CreateScientistDto,
    ) -> Result<ScientistDto, Error> {
        ValidationError::check_name(&scientist.name)?;

        let scientist_repo = ScientistRepository::new(self.db);
        let scientist = scientist_repo
            .create(scientist)
            .await
            .map_err(map_unique_name)?;

        Ok(ScientistDto::from(scientist))
    }

    /// Gets a scientist along with each of their missions & the planet visited
    ///
    /// Returns `Ok(None)` if the scientist does not exist.
    pub async fn get_scientist(
        &self,
        scientist_id: i32,
    ) -> Result<Option<ScientistDetailDto>, Error> {
        let scientist_repo = ScientistRepository::new(self.db);
        let mission_repo = MissionRepository::new(self.db);

        let Some(scientist) = scientist_repo.get(scientist_id).await? else {
            return Ok(None);
        };

        let missions = mission_repo
            .get_many_by_scientist_id(scientist.id)
            .await?
            .into_iter()
            .map(|(mission, planet)| {
                // Only occurs if the planet_id foreign key is not enforced
                let planet = planet.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find planet ID {} for mission ID {}",
                        mission.planet_id, mission.id
                    ))
                })?;

                Ok(ScientistMissionDto {
                    id: mission.id,
                    name: mission.name,
                    scientist_id: mission.scientist_id,
                    planet_id: mission.planet_id,
                    planet: PlanetDto::from(planet),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Some(ScientistDetailDto {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
            avatar: scientist.avatar,
            missions,
        }))
    }

    /// Returns true if a scientist with the provided ID exists
    pub async fn scientist_exists(&self, scientist_id: i32) -> Result<bool, Error> {
        let scientist_repo = ScientistRepository::new(self.db);

        Ok(scientist_repo.get(scientist_id).await?.is_some())
    }

    /// Applies the fields present in `changes` to a scientist
    ///
    /// The scientist is looked up before `changes` is validated. An update without any fields
    /// returns the scientist unchanged. Returns `Ok(None)` if the scientist does not exist.
    ///
    /// # Errors
    /// - [`ValidationError::NullField`] if a field is sent as `null`
    /// - [`ValidationError::BlankName`] if a new name is provided which is empty or whitespace
    /// - [`ValidationError::DuplicateName`] if another scientist already has the new name
    pub async fn update_scientist(
        &self,
        scientist_id: i32,
        changes: UpdateScientistDto,
    ) -> Result<Option<ScientistDto>, Error> {
        let txn = self.db.begin().await?;

        let scientist_repo = ScientistRepository::new(&txn);
        let Some(scientist) = scientist_repo.get(scientist_id).await? else {
            return Ok(None);
        };

        ValidationError::check_update(&changes)?;

        if changes.is_empty() {
            return Ok(Some(ScientistDto::from(scientist)));
        }

        let scientist = scientist_repo
            .update(scientist_id, changes)
            .await
            .map_err(map_unique_name)?;

        txn.commit().await?;

        Ok(scientist.map(ScientistDto::from))
    }

    /// Deletes a scientist along with all of their missions
    ///
    /// Returns `Ok(false)` if the scientist does not exist.
    pub async fn delete_scientist(&self, scientist_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        let scientist_repo = ScientistRepository::new(&txn);
        let mission_repo = MissionRepository::new(&txn);

        if scientist_repo.get(scientist_id).await?.is_none() {
            return Ok(false);
        }

        let missions = mission_repo.delete_by_scientist_id(scientist_id).await?;
        scientist_repo.delete(scientist_id).await?;

        txn.commit().await?;

        tracing::debug!(
            scientist_id = %scientist_id,
            missions_deleted = missions.rows_affected,
            "Deleted scientist"
        );

        Ok(true)
    }
}
