use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::ScientistModel, TestContext};

impl TestContext {
    pub fn scientist<'a>(&'a self) -> ScientistFixtures<'a> {
        ScientistFixtures { setup: self }
    }
}

pub struct ScientistFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ScientistFixtures<'a> {
    /// Insert a scientist with the provided name and placeholder details.
    pub async fn insert_mock_scientist(&self, name: &str) -> Result<ScientistModel, TestError> {
        self.insert_scientist(name, "Astrophysics", &mock_avatar_url(name))
            .await
    }

    pub async fn insert_scientist(
        &self,
        name: &str,
        field_of_study: &str,
        avatar: &str,
    ) -> Result<ScientistModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Scientist::insert(entity::scientist::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                field_of_study: ActiveValue::Set(field_of_study.to_string()),
                avatar: ActiveValue::Set(avatar.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

fn mock_avatar_url(name: &str) -> String {
    let slug = name.to_lowercase().replace(' ', "-");
    format!("https://example.com/avatars/{}.png", slug)
}
