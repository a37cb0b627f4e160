use axum::http::StatusCode;
use sea_orm::EntityTrait;
use voyager::model::mission::MissionDto;

use super::*;

/// Expect 201 with the scientist & planet embedded
#[tokio::test]
async fn creates_mission() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;
    let scientist_model = test.scientist().insert_mock_scientist("Ada").await?;
    let planet_model = test.planet().insert_mock_planet("Mars").await?;

    let body = serde_json::json!({
        "name": "Ares",
        "scientist_id": scientist_model.id,
        "planet_id": planet_model.id,
    })
    .to_string();
    let resp = send(app(&test), Method::POST, "/missions", Some(&body)).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let mission: MissionDto = body_json(resp).await;
    assert_eq!(mission.scientist.name, "Ada");
    assert_eq!(mission.planet.name, "Mars");

    Ok(())
}

/// Expect 422 & no row for a scientist & planet which do not exist
#[tokio::test]
async fn rejects_unknown_references() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let resp = send(
        app(&test),
        Method::POST,
        "/missions",
        Some(r#"{"name": "Ares", "scientist_id": 1, "planet_id": 1}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_messages(resp).await.len(), 1);
    let missions = entity::prelude::Mission::find().all(&test.db).await?;
    assert!(missions.is_empty());

    Ok(())
}

/// Expect 422 for a second mission of the same scientist
#[tokio::test]
async fn rejects_second_mission_for_scientist() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .with_mock_planet("Jupiter")
        .build()
        .await?;
    let (_, scientist_model, _) = test
        .mission()
        .insert_mock_mission("Ares", "Ada", "Mars")
        .await?;

    let body = serde_json::json!({
        "name": "Juno",
        "scientist_id": scientist_model.id,
        "planet_id": 1,
    })
    .to_string();
    let resp = send(app(&test), Method::POST, "/missions", Some(&body)).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_messages(resp).await,
        vec!["scientist can only go on a mission once"]
    );

    Ok(())
}

/// Expect 422 with the error list shape for a body missing fields
#[tokio::test]
async fn rejects_missing_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let resp = send(app(&test), Method::POST, "/missions", Some(r#"{"name": "Ares"}"#)).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_messages(resp).await.len(), 1);

    Ok(())
}
