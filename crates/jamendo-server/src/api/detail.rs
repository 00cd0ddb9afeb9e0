//! Show pages: one record picked by the first identifying route parameter,
//! plus the records shown alongside it.

use std::collections::HashMap;

use axum::response::{IntoResponse, Response};
use jamendo_db::entities::tagged_item::TaggableKind;
use jamendo_db::entities::{
    album, artist, city, country, genre, license, state, tag, tag_info, track,
};
use jamendo_db::tagging;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use serde::Serialize;

use super::context::Page;
use super::lookup::{self, Identifier, Lookup, Strategy};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowKind {
    Artist,
    Album,
    Country,
    City,
    License,
    Tag,
}

#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    pub object: artist::Model,
    pub city: Option<city::Model>,
    pub albums: Vec<album::Model>,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AlbumDetail {
    pub object: album::Model,
    pub artist: Option<artist::Model>,
    pub genre: Option<genre::Model>,
    pub license: Option<license::Model>,
    pub tracks: Vec<track::Model>,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CountryDetail {
    pub object: country::Model,
    pub artists: Vec<artist::Model>,
}

#[derive(Debug, Serialize)]
pub struct CityDetail {
    pub object: city::Model,
    pub state: Option<state::Model>,
    pub artists: Vec<artist::Model>,
}

#[derive(Debug, Serialize)]
pub struct LicenseDetail {
    pub object: license::Model,
    pub albums: Vec<album::Model>,
}

#[derive(Debug, Serialize)]
pub struct TagDetail {
    pub object: tag::Model,
    pub info: Option<tag_info::Model>,
    pub artists: Vec<artist::Model>,
    pub albums: Vec<album::Model>,
    pub tracks: Vec<track::Model>,
}

impl ShowKind {
    pub fn lookups(&self) -> &'static [Lookup] {
        match self {
            ShowKind::Artist => lookup::ARTIST,
            ShowKind::Album => lookup::ALBUM,
            ShowKind::Country => lookup::COUNTRY,
            ShowKind::City => lookup::CITY,
            ShowKind::License => lookup::LICENSE,
            ShowKind::Tag => lookup::TAG,
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            ShowKind::Artist => "jamendo/artist_detail.html",
            ShowKind::Album => "jamendo/album_detail.html",
            ShowKind::Country => "jamendo/country_detail.html",
            ShowKind::City => "jamendo/city_detail.html",
            ShowKind::License => "jamendo/license_detail.html",
            ShowKind::Tag => "jamendo/tag_detail.html",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ShowKind::Artist => "artist",
            ShowKind::Album => "album",
            ShowKind::Country => "country",
            ShowKind::City => "city",
            ShowKind::License => "license",
            ShowKind::Tag => "tag",
        }
    }

    pub async fn show(
        &self,
        state: &AppState,
        params: &HashMap<String, String>,
    ) -> Result<Response, ApiError> {
        let id = lookup::identify(self.lookups(), params)?;
        let db = &state.db;
        let template = self.template();
        let not_found = || ApiError::NotFound(format!("no {} with {}={}", self.label(), id.param, id.value));

        let response = match self {
            ShowKind::Artist => {
                let object = find_artist(db, &id).await?.ok_or_else(not_found)?;
                Page::new(template, &state.config, artist_detail(db, object).await?).into_response()
            }
            ShowKind::Album => {
                let object = find_album(db, &id).await?.ok_or_else(not_found)?;
                Page::new(template, &state.config, album_detail(db, object).await?).into_response()
            }
            ShowKind::Country => {
                let object = find_country(db, &id).await?.ok_or_else(not_found)?;
                Page::new(template, &state.config, country_detail(db, object).await?)
                    .into_response()
            }
            ShowKind::City => {
                let object = find_city(db, &id).await?.ok_or_else(not_found)?;
                Page::new(template, &state.config, city_detail(db, object).await?).into_response()
            }
            ShowKind::License => {
                let object = find_license(db, &id).await?.ok_or_else(not_found)?;
                Page::new(template, &state.config, license_detail(db, object).await?)
                    .into_response()
            }
            ShowKind::Tag => {
                let object = find_tag(db, &id).await?.ok_or_else(not_found)?;
                Page::new(template, &state.config, tag_detail(db, object).await?).into_response()
            }
        };

        Ok(response)
    }
}

// ─── Record resolution ──────────────────────────────────────────────

/// Equality on an integer column; `None` when the value is not an integer.
fn int_condition<C: ColumnTrait>(column: C, id: &Identifier<'_>) -> Option<SimpleExpr> {
    id.as_int().map(|value| column.eq(value))
}

/// First record matching `condition` by ascending `order`.
async fn first_match<E, C>(
    db: &DatabaseConnection,
    condition: Option<SimpleExpr>,
    order: C,
) -> Result<Option<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    let Some(condition) = condition else {
        return Ok(None);
    };
    E::find().filter(condition).order_by_asc(order).one(db).await
}

pub async fn find_artist(
    db: &DatabaseConnection,
    id: &Identifier<'_>,
) -> Result<Option<artist::Model>, DbErr> {
    let condition = match id.strategy {
        Strategy::PrimaryKey => int_condition(artist::Column::Id, id),
        Strategy::ExternalId => int_condition(artist::Column::Uid, id),
        Strategy::AlternateId => Some(artist::Column::Mbgid.eq(id.value)),
        Strategy::NaturalKey => None,
    };
    first_match::<artist::Entity, _>(db, condition, artist::Column::Id).await
}

pub async fn find_album(
    db: &DatabaseConnection,
    id: &Identifier<'_>,
) -> Result<Option<album::Model>, DbErr> {
    let condition = match id.strategy {
        Strategy::PrimaryKey => int_condition(album::Column::Id, id),
        Strategy::ExternalId => int_condition(album::Column::Uid, id),
        Strategy::AlternateId => Some(album::Column::Mbgid.eq(id.value)),
        Strategy::NaturalKey => None,
    };
    first_match::<album::Entity, _>(db, condition, album::Column::Id).await
}

/// Countries are keyed by their code; the remote catalog refers to them by
/// numeric code.
pub async fn find_country(
    db: &DatabaseConnection,
    id: &Identifier<'_>,
) -> Result<Option<country::Model>, DbErr> {
    let condition = match id.strategy {
        Strategy::NaturalKey => Some(country::Column::Code.eq(id.value)),
        Strategy::ExternalId => int_condition(country::Column::Numcode, id),
        Strategy::PrimaryKey | Strategy::AlternateId => None,
    };
    first_match::<country::Entity, _>(db, condition, country::Column::Id).await
}

pub async fn find_city(
    db: &DatabaseConnection,
    id: &Identifier<'_>,
) -> Result<Option<city::Model>, DbErr> {
    let condition = match id.strategy {
        Strategy::PrimaryKey => int_condition(city::Column::Id, id),
        Strategy::ExternalId => int_condition(city::Column::Uid, id),
        Strategy::AlternateId | Strategy::NaturalKey => None,
    };
    first_match::<city::Entity, _>(db, condition, city::Column::Id).await
}

pub async fn find_license(
    db: &DatabaseConnection,
    id: &Identifier<'_>,
) -> Result<Option<license::Model>, DbErr> {
    let condition = match id.strategy {
        Strategy::PrimaryKey => int_condition(license::Column::Id, id),
        Strategy::ExternalId => int_condition(license::Column::Uid, id),
        Strategy::AlternateId | Strategy::NaturalKey => None,
    };
    first_match::<license::Entity, _>(db, condition, license::Column::Id).await
}

pub async fn find_tag(
    db: &DatabaseConnection,
    id: &Identifier<'_>,
) -> Result<Option<tag::Model>, DbErr> {
    let condition = match id.strategy {
        Strategy::NaturalKey => Some(tag::Column::Name.eq(id.value)),
        _ => None,
    };
    first_match::<tag::Entity, _>(db, condition, tag::Column::Id).await
}

// ─── Auxiliary contexts ─────────────────────────────────────────────

fn tag_names(tags: Vec<tag::Model>) -> Vec<String> {
    tags.into_iter().map(|t| t.name).collect()
}

async fn artist_detail(db: &DatabaseConnection, object: artist::Model) -> Result<ArtistDetail, DbErr> {
    let albums = album::Entity::find()
        .filter(album::Column::ArtistId.eq(object.id))
        .order_by_desc(album::Column::ReleaseDate)
        .order_by_asc(album::Column::Name)
        .all(db)
        .await?;

    let city = match object.city_id {
        Some(city_id) => city::Entity::find_by_id(city_id).one(db).await?,
        None => None,
    };

    let tags = tag_names(tagging::tags_for(db, TaggableKind::Artist, object.id).await?);

    Ok(ArtistDetail {
        object,
        city,
        albums,
        tags,
    })
}

async fn album_detail(db: &DatabaseConnection, object: album::Model) -> Result<AlbumDetail, DbErr> {
    let artist = artist::Entity::find_by_id(object.artist_id).one(db).await?;

    let tracks = track::Entity::find()
        .filter(track::Column::AlbumId.eq(object.id))
        .order_by_asc(track::Column::Numalbum)
        .order_by_asc(track::Column::Id)
        .all(db)
        .await?;

    let genre = match object.genre_id {
        Some(genre_id) => genre::Entity::find_by_id(genre_id).one(db).await?,
        None => None,
    };
    let license = match object.license_id {
        Some(license_id) => license::Entity::find_by_id(license_id).one(db).await?,
        None => None,
    };

    let tags = tag_names(tagging::album_tags(db, object.id).await?);

    Ok(AlbumDetail {
        object,
        artist,
        genre,
        license,
        tracks,
        tags,
    })
}

async fn country_detail(
    db: &DatabaseConnection,
    object: country::Model,
) -> Result<CountryDetail, DbErr> {
    let artists = artist::Entity::find()
        .join(JoinType::InnerJoin, artist::Relation::City.def())
        .join(JoinType::InnerJoin, city::Relation::State.def())
        .filter(state::Column::CountryCode.eq(object.code.as_str()))
        .distinct()
        .order_by_asc(artist::Column::Name)
        .order_by_asc(artist::Column::Id)
        .all(db)
        .await?;

    Ok(CountryDetail { object, artists })
}

async fn city_detail(db: &DatabaseConnection, object: city::Model) -> Result<CityDetail, DbErr> {
    let state = match object.state_id {
        Some(state_id) => state::Entity::find_by_id(state_id).one(db).await?,
        None => None,
    };

    let artists = artist::Entity::find()
        .filter(artist::Column::CityId.eq(object.id))
        .order_by_asc(artist::Column::Name)
        .order_by_asc(artist::Column::Id)
        .all(db)
        .await?;

    Ok(CityDetail {
        object,
        state,
        artists,
    })
}

async fn license_detail(
    db: &DatabaseConnection,
    object: license::Model,
) -> Result<LicenseDetail, DbErr> {
    let albums = album::Entity::find()
        .filter(album::Column::LicenseId.eq(object.id))
        .order_by_asc(album::Column::Name)
        .order_by_asc(album::Column::ReleaseDate)
        .order_by_asc(album::Column::Id)
        .all(db)
        .await?;

    Ok(LicenseDetail { object, albums })
}

async fn tag_detail(db: &DatabaseConnection, object: tag::Model) -> Result<TagDetail, DbErr> {
    let info = tag_info::Entity::find()
        .filter(tag_info::Column::TagId.eq(object.id))
        .order_by_asc(tag_info::Column::Id)
        .one(db)
        .await?;

    let artist_ids = tagging::object_ids_for_tag(db, object.id, TaggableKind::Artist).await?;
    let artists = if artist_ids.is_empty() {
        Vec::new()
    } else {
        artist::Entity::find()
            .filter(artist::Column::Id.is_in(artist_ids))
            .order_by_asc(artist::Column::Name)
            .order_by_asc(artist::Column::Id)
            .all(db)
            .await?
    };

    let track_ids = tagging::object_ids_for_tag(db, object.id, TaggableKind::Track).await?;
    let tracks = if track_ids.is_empty() {
        Vec::new()
    } else {
        track::Entity::find()
            .filter(track::Column::Id.is_in(track_ids))
            .order_by_asc(track::Column::Name)
            .order_by_asc(track::Column::Id)
            .all(db)
            .await?
    };

    // Albums carry the tags of their tracks.
    let mut album_ids: Vec<i32> = tracks.iter().map(|t| t.album_id).collect();
    album_ids.sort_unstable();
    album_ids.dedup();
    let albums = if album_ids.is_empty() {
        Vec::new()
    } else {
        album::Entity::find()
            .filter(album::Column::Id.is_in(album_ids))
            .order_by_asc(album::Column::Name)
            .order_by_asc(album::Column::ReleaseDate)
            .order_by_asc(album::Column::Id)
            .all(db)
            .await?
    };

    Ok(TagDetail {
        object,
        info,
        artists,
        albums,
        tracks,
    })
}
