//! End-to-end procedure tests driving the full HTTP application.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::{
    model::bug::{CreateBugDto, DeleteBugDto, UpdateBugDto},
    server::{middleware::cors::cors_layer, router::app, state::AppState},
};


const ORIGIN: &str = "http://localhost:5173";

/// Full application wired to an in-memory database.
struct TestApp {
    app: Router,
    context: TestContext,
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new().with_bug_tables().build().await.unwrap();
        let db = context.db.as_ref().unwrap().clone();

        Self {
            app: app(AppState::new(db), cors_layer(ORIGIN).unwrap()),
            context,
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    async fn raw(&self, method: Method, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, ORIGIN)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn query(&self, procedure: &str) -> TestResponse {
        self.raw(Method::GET, &format!("/v1/trpc/{}", procedure), "")
            .await
    }

    async fn mutate(&self, procedure: &str, input: Value) -> TestResponse {
        self.raw(
            Method::POST,
            &format!("/v1/trpc/{}", procedure),
            &input.to_string(),
        )
        .await
    }

    async fn create(&self, dto: CreateBugDto) -> TestResponse {
        self.mutate("bugs.createBug", serde_json::to_value(dto).unwrap())
            .await
    }

    async fn list(&self) -> Vec<Value> {
        let response = self.query("bugs.getBugs").await;
        assert_eq!(response.status, StatusCode::OK);

        response.data().as_array().unwrap().clone()
    }
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// Payload of a successful `{ "result": { "data": ... } }` envelope.
    fn data(&self) -> Value {
        self.json()["result"]["data"].clone()
    }

    fn error_message(&self) -> String {
        self.json()["error"]["message"]
            .as_str()
            .unwrap()
            .to_string()
    }

    fn error_code(&self) -> String {
        self.json()["error"]["code"].as_str().unwrap().to_string()
    }

    fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

fn bug(title: &str, status: &str) -> CreateBugDto {
    CreateBugDto {
        title: title.to_string(),
        description: None,
        status: status.to_string(),
    }
}
