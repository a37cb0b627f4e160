use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use voyager::{
    model::{
        api::MessageDto,
        scientist::{CreateScientistDto, ScientistDetailDto, ScientistDto, UpdateScientistDto},
    },
    server::controller::scientist::{
        create_scientist, delete_scientist, get_scientist, get_scientists, update_scientist,
    },
};

use super::*;

fn new_scientist(name: &str) -> CreateScientistDto {
    CreateScientistDto {
        name: name.to_string(),
        field_of_study: "CS".to_string(),
        avatar: "a.png".to_string(),
    }
}

mod get_scientists {
    use super::*;

    /// Expect 200 with every scientist ordered by ID
    #[tokio::test]
    async fn returns_scientists() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_resource_tables()
            .with_mock_scientist("Ada Lovelace")
            .with_mock_scientist("Carl Sagan")
            .build()
            .await?;

        let result = get_scientists(State(test.to_app_state())).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let scientists: Vec<ScientistDto> = body_json(resp).await;
        assert_eq!(scientists.len(), 2);
        assert_eq!(scientists[0].name, "Ada Lovelace");

        Ok(())
    }

    /// Expect 422 with a generic message when required tables are not present
    #[tokio::test]
    async fn fails_when_tables_missing() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = get_scientists(State(test.to_app_state())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }
}

mod create_scientist {
    use super::*;

    /// Expect 201 with the created scientist
    #[tokio::test]
    async fn creates_scientist() -> Result<(), TestError> {
        let test = TestBuilder::new().with_resource_tables().build().await?;

        let result = create_scientist(
            State(test.to_app_state()),
            Ok(Json(new_scientist("Ada"))),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let scientist: ScientistDto = body_json(resp).await;
        assert_eq!(scientist.name, "Ada");
        assert_eq!(scientist.field_of_study, "CS");
        assert_eq!(scientist.avatar, "a.png");

        Ok(())
    }

    /// Expect 422 when the name is already in use
    #[tokio::test]
    async fn fails_for_duplicate_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_resource_tables()
            .with_mock_scientist("Ada")
            .build()
            .await?;

        let result = create_scientist(
            State(test.to_app_state()),
            Ok(Json(new_scientist("Ada"))),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_messages(resp).await, vec!["name must be unique"]);

        Ok(())
    }

    /// Expect 422 for a blank name
    #[tokio::test]
    async fn fails_for_blank_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_resource_tables().build().await?;

        let result =
            create_scientist(State(test.to_app_state()), Ok(Json(new_scientist(" ")))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_messages(resp).await, vec!["name must not be empty"]);

        Ok(())
    }
}

mod get_scientist {
    use super::*;

    /// Expect 200 with the scientist's mission & planet embedded
    #[tokio::test]
    async fn returns_scientist_with_missions() -> Result<(), TestError> {
        let test = TestBuilder::new().with_resource_tables().build().await?;
        let (mission_model, scientist_model, planet_model) = test
            .mission()
            .insert_mock_mission("Ares", "Ada", "Mars")
            .await?;

        let result = get_scientist(State(test.to_app_state()), Path(scientist_model.id)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let scientist: ScientistDetailDto = body_json(resp).await;
        assert_eq!(scientist.name, "Ada");
        assert_eq!(scientist.missions.len(), 1);
        assert_eq!(scientist.missions[0].id, mission_model.id);
        assert_eq!(
            scientist.missions[0].planet,
            crate::util::planet_dto(&planet_model)
        );

        Ok(())
    }

    /// Expect 404 for scientist ID that does not exist
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_resource_tables().build().await?;

        let result = get_scientist(State(test.to_app_state()), Path(1)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_messages(resp).await, vec!["scientist not found"]);

        Ok(())
    }
}

mod update_scientist {
    use super::*;

    /// Expect 200 with only the provided field changed
    #[tokio::test]
    async fn updates_scientist() -> Result<(), TestError> {
        let test = TestBuilder::new().with_resource_tables().build().await?;
        let scientist_model = test.scientist().insert_mock_scientist("Ada").await?;

        let changes = UpdateScientistDto {
            field_of_study: Some(Some("Mathematics".to_string())),
            ..Default::default()
        };
        let result = update_scientist(
            State(test.to_app_state()),
            Path(scientist_model.id),
            Ok(Json(changes)),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let scientist: ScientistDto = body_json(resp).await;
        assert_eq!(scientist.name, "Ada");
        assert_eq!(scientist.field_of_study, "Mathematics");
        assert_eq!(scientist.avatar, scientist_model.avatar);

        Ok(())
    }

    /// Expect 404 for scientist ID that does not exist
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_resource_tables().build().await?;

        let changes = UpdateScientistDto {
            name: Some(Some("Ada".to_string())),
            ..Default::default()
        };
        let result =
            update_scientist(State(test.to_app_state()), Path(1), Ok(Json(changes))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete_scientist {
    use super::*;

    /// Expect 200 with a confirmation message
    #[tokio::test]
    async fn deletes_scientist() -> Result<(), TestError> {
        let test = TestBuilder::new().with_resource_tables().build().await?;
        let (_, scientist_model, _) = test
            .mission()
            .insert_mock_mission("Ares", "Ada", "Mars")
            .await?;

        let result =
            delete_scientist(State(test.to_app_state()), Path(scientist_model.id)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: MessageDto = body_json(resp).await;
        assert_eq!(body.message, "scientist deleted");

        let result = get_scientist(State(test.to_app_state()), Path(scientist_model.id)).await;
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 404 for scientist ID that does not exist
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_resource_tables().build().await?;

        let result = delete_scientist(State(test.to_app_state()), Path(1)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
