
use voyager_test_utils::prelude::*;

use crate::model::mission::CreateMissionDto;

fn new_mission(name: &str, scientist_id: i32, planet_id: i32) -> CreateMissionDto {
    CreateMissionDto {
        name: name.to_string(),
        scientist_id,
        planet_id,
    }
}
