use axum::{Router, routing::get};
use log::info;
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod args;
pub mod routes;

use crate::args::Args;
use crate::routes::hello;

#[derive(OpenApi)]
#[openapi(paths(hello::get))]
pub struct ApiDoc;

pub fn app() -> Router {
    Router::new()
        .route("/", get(hello::get))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

#[tokio::main]
async fn main() {
    let args = Args::load();
    env_logger::init();

    let listener = TcpListener::bind(format!("{}:{}", args.host, args.port))
        .await
        .unwrap();
    info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app()).await.unwrap();
}
