//! URL table and the permalink helpers that mirror it.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::Method,
    routing::{any, get, MethodRouter},
    Json, Router,
};
use serde::Serialize;

use crate::api::{CatalogRequest, ListKind, ShowKind, View};
use crate::feeds::FeedRoute;
use crate::state::AppState;

#[derive(Serialize)]
struct ApiStatus {
    status: &'static str,
    version: &'static str,
}

pub fn artists_path() -> String {
    "/artists/".to_string()
}

pub fn artist_path(pk: i32) -> String {
    format!("/artists/{pk}/")
}

pub fn albums_path() -> String {
    "/albums/".to_string()
}

pub fn album_path(pk: i32) -> String {
    format!("/albums/{pk}/")
}

pub fn tag_path(name: &str) -> String {
    format!("/tags/{}/", urlencoding::encode(name))
}

pub fn feed_path(name: &str) -> String {
    format!("/feeds/{name}/")
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        // Artists
        .route("/artists/", view(View::List(ListKind::Artists)))
        .route("/artists/{pk}/", view_with_params(View::Show(ShowKind::Artist)))
        .route("/artists/juid/{juid}/", view_with_params(View::Show(ShowKind::Artist)))
        .route("/artists/mbgid/{mbgid}/", view_with_params(View::Show(ShowKind::Artist)))
        // Albums
        .route("/albums/", view(View::List(ListKind::Albums)))
        .route("/albums/{pk}/", view_with_params(View::Show(ShowKind::Album)))
        .route("/albums/juid/{juid}/", view_with_params(View::Show(ShowKind::Album)))
        .route("/albums/mbgid/{mbgid}/", view_with_params(View::Show(ShowKind::Album)))
        // Geography
        .route("/countries/", view(View::List(ListKind::Countries)))
        .route("/countries/{code}/", view_with_params(View::Show(ShowKind::Country)))
        .route("/countries/juid/{juid}/", view_with_params(View::Show(ShowKind::Country)))
        .route("/cities/", view(View::List(ListKind::Cities)))
        .route("/cities/{pk}/", view_with_params(View::Show(ShowKind::City)))
        .route("/cities/juid/{juid}/", view_with_params(View::Show(ShowKind::City)))
        // Licenses
        .route("/licenses/", view(View::List(ListKind::Licenses)))
        .route("/licenses/{pk}/", view_with_params(View::Show(ShowKind::License)))
        .route("/licenses/juid/{juid}/", view_with_params(View::Show(ShowKind::License)))
        // Tags
        .route("/tags_cloud/", view(View::List(ListKind::TagCloud)))
        .route("/tags/{tag}/", view_with_params(View::Show(ShowKind::Tag)))
        // Feeds
        .route("/feeds/{feed_name}/", view_with_params(View::Feed(FeedRoute::Named)))
        .route(
            "/feeds/albumsfor/{artist_id}/",
            view_with_params(View::Feed(FeedRoute::AlbumsFor)),
        )
        .with_state(state)
}

/// GET /healthz
async fn healthz() -> Json<ApiStatus> {
    Json(ApiStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Route without path segments. Every method reaches the view so it can
/// answer 405 itself.
fn view(view: View) -> MethodRouter<Arc<AppState>> {
    any(
        move |State(state): State<Arc<AppState>>,
              method: Method,
              Query(query): Query<HashMap<String, String>>| async move {
            let request = CatalogRequest {
                method,
                params: HashMap::new(),
                query,
            };
            view.handle(&state, request).await
        },
    )
}

fn view_with_params(view: View) -> MethodRouter<Arc<AppState>> {
    any(
        move |State(state): State<Arc<AppState>>,
              method: Method,
              Path(params): Path<HashMap<String, String>>,
              Query(query): Query<HashMap<String, String>>| async move {
            let request = CatalogRequest {
                method,
                params,
                query,
            };
            view.handle(&state, request).await
        },
    )
}
