use axum::http::StatusCode;

use super::*;

/// Expect a preflight request from any origin to be allowed
#[tokio::test]
async fn allows_preflight_from_any_origin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_resource_tables().build().await?;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/scientists")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );

    Ok(())
}

/// Expect the OpenAPI document to list every resource path
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(app(&test), Method::GET, "/api/docs/openapi.json", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/scientists"));
    assert!(paths.contains_key("/scientists/{id}"));
    assert!(paths.contains_key("/planets"));
    assert!(paths.contains_key("/missions"));

    Ok(())
}
