use serde::{Deserialize, Serialize};

use crate::model::{planet::PlanetDto, scientist::ScientistDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MissionDto {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub scientist: ScientistDto,
    pub planet: PlanetDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateMissionDto {
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
}
