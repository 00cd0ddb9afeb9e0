//! List pages: every record of a kind, optionally narrowed by name.

use std::collections::HashMap;

use axum::response::{IntoResponse, Response};
use jamendo_db::entities::{album, artist, city, country, license, tagged_item::TaggableKind};
use jamendo_db::tagging::{self, CloudTag};
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, QueryFilter,
    QueryOrder,
};
use serde::Serialize;

use super::context::Page;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Artists,
    Albums,
    Countries,
    Cities,
    Licenses,
    TagCloud,
}

#[derive(Debug, Serialize)]
pub struct Listing<T: Serialize> {
    pub object_list: Vec<T>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CloudListing {
    pub kind: TaggableKind,
    pub object_list: Vec<CloudTag>,
    pub name: Option<String>,
}

impl ListKind {
    pub fn template(&self) -> &'static str {
        match self {
            ListKind::Artists => "jamendo/artist_list.html",
            ListKind::Albums => "jamendo/album_list.html",
            ListKind::Countries => "jamendo/country_list.html",
            ListKind::Cities => "jamendo/city_list.html",
            ListKind::Licenses => "jamendo/license_list.html",
            ListKind::TagCloud => "jamendo/tag_cloud.html",
        }
    }

    pub async fn list(
        &self,
        state: &AppState,
        query: &HashMap<String, String>,
    ) -> Result<Response, ApiError> {
        let db = &state.db;
        let name = name_filter(query);
        let filter = name.map(|needle| NameFilter::new(db, needle));
        let sql_filter = filter.filter(|f| f.in_sql);
        let template = self.template();

        let response = match self {
            ListKind::Artists => {
                let mut select = artist::Entity::find();
                if let Some(f) = sql_filter {
                    select = select.filter(name_contains(artist::Column::Name, f.needle));
                }
                let mut object_list = select
                    .order_by_asc(artist::Column::Name)
                    .order_by_asc(artist::Column::Id)
                    .all(db)
                    .await?;
                if let Some(f) = filter {
                    f.retain(&mut object_list, |a| &a.name);
                }
                Page::new(template, &state.config, listing(object_list, name)).into_response()
            }
            ListKind::Albums => {
                let mut select = album::Entity::find();
                if let Some(f) = sql_filter {
                    select = select.filter(name_contains(album::Column::Name, f.needle));
                }
                let mut object_list = select
                    .order_by_asc(album::Column::Name)
                    .order_by_asc(album::Column::ReleaseDate)
                    .order_by_asc(album::Column::Id)
                    .all(db)
                    .await?;
                if let Some(f) = filter {
                    f.retain(&mut object_list, |a| &a.name);
                }
                Page::new(template, &state.config, listing(object_list, name)).into_response()
            }
            ListKind::Countries => {
                let mut select = country::Entity::find();
                select = match (name, sql_filter) {
                    (Some(_), Some(f)) => select.filter(name_contains(country::Column::Name, f.needle)),
                    (Some(_), None) => select,
                    // The empty code stands for "unknown country".
                    (None, _) => select.filter(country::Column::Code.ne("")),
                };
                let mut object_list = select
                    .order_by_asc(country::Column::Name)
                    .order_by_asc(country::Column::Id)
                    .all(db)
                    .await?;
                if let Some(f) = filter {
                    f.retain(&mut object_list, |c| &c.name);
                }
                Page::new(template, &state.config, listing(object_list, name)).into_response()
            }
            ListKind::Cities => {
                let mut select = city::Entity::find();
                if let Some(f) = sql_filter {
                    select = select.filter(name_contains(city::Column::Name, f.needle));
                }
                let mut object_list = select
                    .order_by_asc(city::Column::Name)
                    .order_by_asc(city::Column::Id)
                    .all(db)
                    .await?;
                if let Some(f) = filter {
                    f.retain(&mut object_list, |c| &c.name);
                }
                Page::new(template, &state.config, listing(object_list, name)).into_response()
            }
            ListKind::Licenses => {
                let mut select = license::Entity::find();
                if let Some(f) = sql_filter {
                    select = select.filter(name_contains(license::Column::Name, f.needle));
                }
                let mut object_list = select
                    .order_by_asc(license::Column::Name)
                    .order_by_asc(license::Column::Id)
                    .all(db)
                    .await?;
                if let Some(f) = filter {
                    f.retain(&mut object_list, |l| &l.name);
                }
                Page::new(template, &state.config, listing(object_list, name)).into_response()
            }
            ListKind::TagCloud => {
                let kind = cloud_kind(query)?;
                let mut object_list = tagging::cloud_for_kind(db, kind).await?;
                if let Some(needle) = name {
                    object_list.retain(|tag| name_matches(&tag.name, needle));
                }
                let context = CloudListing {
                    kind,
                    object_list,
                    name: name.map(str::to_string),
                };
                Page::new(template, &state.config, context).into_response()
            }
        };

        Ok(response)
    }
}

/// Where the name filter runs for the connected backend.
///
/// SQLite's built-in `lower()` folds ASCII only, so there the filter is applied
/// to the fetched rows with Unicode case folding on both sides. Elsewhere
/// `lower()` is Unicode-aware and the filter stays in SQL.
#[derive(Debug, Clone, Copy)]
struct NameFilter<'a> {
    needle: &'a str,
    in_sql: bool,
}

impl<'a> NameFilter<'a> {
    fn new(db: &DatabaseConnection, needle: &'a str) -> Self {
        Self {
            needle,
            in_sql: db.get_database_backend() != DbBackend::Sqlite,
        }
    }

    fn retain<T>(&self, rows: &mut Vec<T>, name: impl Fn(&T) -> &String) {
        if !self.in_sql {
            rows.retain(|row| name_matches(name(row), self.needle));
        }
    }
}

/// Case-insensitive substring test using Unicode lowercasing.
pub fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(&needle.to_lowercase())
}

fn listing<T: Serialize>(object_list: Vec<T>, name: Option<&str>) -> Listing<T> {
    Listing {
        object_list,
        name: name.map(str::to_string),
    }
}

/// The trimmed `name` query parameter, if it is non-empty.
pub fn name_filter(query: &HashMap<String, String>) -> Option<&str> {
    query
        .get("name")
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

const LIKE_ESCAPE: char = '!';

/// Escape `LIKE` metacharacters so they match literally.
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive substring match on a text column, for backends whose
/// `lower()` folds the same characters as `str::to_lowercase`.
fn name_contains<C: ColumnTrait>(column: C, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// Album tags derive from their tracks, so only artist and track clouds exist.
fn cloud_kind(query: &HashMap<String, String>) -> Result<TaggableKind, ApiError> {
    let raw = match query.get("kind").map(String::as_str) {
        None | Some("") => return Ok(TaggableKind::Artist),
        Some(raw) => raw,
    };
    match TaggableKind::parse(raw) {
        Some(kind @ (TaggableKind::Artist | TaggableKind::Track)) => Ok(kind),
        _ => Err(ApiError::BadRequest(format!(
            "unsupported tag cloud kind {raw:?}; expected artist or track"
        ))),
    }
}
