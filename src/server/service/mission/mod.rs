//! Mission service layer.
//!
//! A mission is inserted inside a transaction together with the lookups of the scientist
//! & planet it references, so the response always reflects the rows the mission was linked to.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        mission::{CreateMissionDto, MissionDto},
        planet::PlanetDto,
        scientist::ScientistDto,
    },
    server::{
        data::{
            mission::MissionRepository, planet::PlanetRepository, scientist::ScientistRepository,
        },
        error::{
            validation::{map_mission_constraint, ValidationError},
            Error,
        },
    },
};

pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    /// Creates a new instance of [`MissionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a scientist on a mission to a planet
    ///
    /// # Errors
    /// - [`ValidationError::BlankName`] if the name is empty or whitespace
    /// - [`ValidationError::DuplicateName`] if another mission already has the name
    /// - [`ValidationError::ScientistAlreadyOnMission`] if the scientist already has a mission
    /// - [`ValidationError::UnknownScientistOrPlanet`] if either referenced record does not exist
    pub async fn create_mission(&self, mission: CreateMissionDto) -> Result<MissionDto, Error> {
        ValidationError::check_name(&mission.name)?;

        let txn = self.db.begin().await?;

        let mission_repo = MissionRepository::new(&txn);
        let scientist_repo = ScientistRepository::new(&txn);
        let planet_repo = PlanetRepository::new(&txn);

        let mission = mission_repo
            .create(mission)
            .await
            .map_err(map_mission_constraint)?;

        // Both lookups only fail if the foreign keys on missions are not enforced
        let scientist = scientist_repo.get(mission.scientist_id).await?.ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to find scientist ID {} for newly created mission ID {}",
                mission.scientist_id, mission.id
            ))
        })?;
        let planet = planet_repo.get(mission.planet_id).await?.ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to find planet ID {} for newly created mission ID {}",
                mission.planet_id, mission.id
            ))
        })?;

        txn.commit().await?;

        Ok(MissionDto {
            id: mission.id,
            name: mission.name,
            scientist_id: mission.scientist_id,
            planet_id: mission.planet_id,
            scientist: ScientistDto::from(scientist),
            planet: PlanetDto::from(planet),
        })
    }
}
