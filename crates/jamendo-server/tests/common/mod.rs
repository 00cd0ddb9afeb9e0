// Shared fixtures for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, FixedOffset};
use jamendo_db::entities::tagged_item::TaggableKind;
use jamendo_db::entities::{album, artist, city, country, license, state, track};
use jamendo_db::sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use jamendo_db::{tagging, DatabaseConfig};
use jamendo_migration::{Migrator, MigratorTrait};
use jamendo_server::{config::CatalogConfig, routes, state::AppState};
use tower::ServiceExt;

/// Fresh in-memory database with the full schema.
pub async fn test_db() -> DatabaseConnection {
    let db = jamendo_db::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");
    db
}

pub fn test_app(db: DatabaseConnection) -> Router {
    let state = Arc::new(AppState {
        db,
        config: CatalogConfig::default(),
    });
    routes::router(state)
}

/// A point in time `days` days after 2010-01-01, in UTC.
pub fn day(days: i64) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2010-01-01T00:00:00+00:00").unwrap() + Duration::days(days)
}

pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, "GET", uri).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

/// Names of the records in a JSON `object_list`.
pub fn names(page: &serde_json::Value) -> Vec<String> {
    page["object_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["name"].as_str().unwrap().to_string())
        .collect()
}

pub async fn insert_artist(
    db: &DatabaseConnection,
    uid: i32,
    name: &str,
    added_at: DateTime<FixedOffset>,
) -> artist::Model {
    artist::ActiveModel {
        uid: Set(uid),
        mbgid: Set(None),
        name: Set(name.to_string()),
        image: Set(None),
        url: Set(format!("http://www.jamendo.com/artist/{uid}")),
        album_count: Set(1),
        city_id: Set(None),
        latitude: Set(None),
        longitude: Set(None),
        added_at: Set(added_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_album(
    db: &DatabaseConnection,
    artist_id: i32,
    uid: i32,
    name: &str,
    added_at: DateTime<FixedOffset>,
) -> album::Model {
    album::ActiveModel {
        uid: Set(uid),
        mbgid: Set(None),
        name: Set(name.to_string()),
        url: Set(format!("http://www.jamendo.com/album/{uid}")),
        image: Set(None),
        release_date: Set(None),
        filename: Set(format!("{uid}.zip")),
        genre_id: Set(None),
        license_id: Set(None),
        artist_id: Set(artist_id),
        track_count: Set(1),
        duration: Set(0),
        added_at: Set(added_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_track(
    db: &DatabaseConnection,
    album: &album::Model,
    name: &str,
    numalbum: i32,
) -> track::Model {
    track::ActiveModel {
        uid: Set(None),
        mbgid: Set(None),
        name: Set(name.to_string()),
        url: Set(String::new()),
        duration: Set(180),
        album_id: Set(album.id),
        artist_id: Set(album.artist_id),
        numalbum: Set(numalbum),
        filename: Set(format!("{name}.mp3")),
        genre_id: Set(None),
        license_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_license(db: &DatabaseConnection, uid: i32, name: &str) -> license::Model {
    license::ActiveModel {
        uid: Set(uid),
        license_class: Set("cc".to_string()),
        name: Set(name.to_string()),
        url: Set(format!("http://creativecommons.org/licenses/{uid}/")),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_country(
    db: &DatabaseConnection,
    code: &str,
    numcode: i32,
    name: &str,
) -> country::Model {
    country::ActiveModel {
        code: Set(code.to_string()),
        numcode: Set(numcode),
        name: Set(name.to_uppercase()),
        printable_name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

/// A city inside a fresh state of the given country.
pub async fn insert_city(
    db: &DatabaseConnection,
    country_code: &str,
    uid: Option<i32>,
    name: &str,
) -> city::Model {
    let state = state::ActiveModel {
        code: Set(Some(format!("{name}-state"))),
        name: Set(Some(format!("{name} state"))),
        country_code: Set(Some(country_code.to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    city::ActiveModel {
        uid: Set(uid),
        name: Set(name.to_string()),
        state_id: Set(Some(state.id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn tag(db: &DatabaseConnection, kind: TaggableKind, object_id: i32, names: &[&str]) {
    tagging::update_tags(db, kind, object_id, names)
        .await
        .unwrap();
}
