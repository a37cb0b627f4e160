
use voyager_test_utils::prelude::*;

use crate::model::scientist::{CreateScientistDto, UpdateScientistDto};

fn new_scientist(name: &str) -> CreateScientistDto {
    CreateScientistDto {
        name: name.to_string(),
        field_of_study: "Computer Science".to_string(),
        avatar: "a.png".to_string(),
    }
}

fn rename(name: &str) -> UpdateScientistDto {
    UpdateScientistDto {
        name: Some(Some(name.to_string())),
        ..Default::default()
    }
}
