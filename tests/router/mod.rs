//! Tests driving the full application router, including middleware & request extraction.

mod cors;
mod mission;

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use tower::ServiceExt;
use voyager::server::startup;
use voyager_test_utils::prelude::*;

use crate::util::{body_json, error_messages};

fn app(test: &TestContext) -> Router {
    startup::build_app(test.db.clone())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(request.body(body).unwrap()).await.unwrap()
}
