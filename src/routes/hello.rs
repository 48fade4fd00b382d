use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Debug, Clone)]
pub struct HelloResponse {
    #[serde(rename = "Hello")]
    pub hello: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Hello, world!", body = HelloResponse)
    )
)]
pub async fn get() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HelloResponse {
            hello: String::from("World"),
        }),
    )
}
