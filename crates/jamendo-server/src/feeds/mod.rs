//! Atom syndication of recently added artists and albums.

pub mod atom;
pub mod content;
pub mod stream;

use std::collections::HashMap;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, FixedOffset};
use jamendo_db::entities::tagged_item::TaggableKind;
use jamendo_db::entities::{album, artist, tag};
use jamendo_db::tagging;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use self::atom::{Content, Entry, Feed, Link, ATOM_CONTENT_TYPE};
use self::stream::{stream_url, AudioEncoding};
use crate::config::CatalogConfig;
use crate::error::ApiError;
use crate::routes::{album_path, albums_path, artist_path, artists_path, feed_path};
use crate::state::AppState;

/// 2009-01-01T00:00:00Z, reported as `updated` by feeds with no entries.
pub const FALLBACK_UPDATED_TIMESTAMP: i64 = 1_230_768_000;

const REMOTE_ARTISTS_PAGE: &str = "http://www.jamendo.com/en/artists/";
const REMOTE_ALBUMS_PAGE: &str = "http://www.jamendo.com/en/albums/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedRoute {
    /// `/feeds/{feed_name}/`
    Named,
    /// `/feeds/albumsfor/{artist_id}/`
    AlbumsFor,
}

impl FeedRoute {
    pub async fn serve(
        &self,
        state: &AppState,
        params: &HashMap<String, String>,
    ) -> Result<Response, ApiError> {
        let feed = match self {
            FeedRoute::Named => match params.get("feed_name").map(String::as_str) {
                Some("artists") => artists_feed(state).await?,
                Some("albums") => albums_feed(state).await?,
                Some("albumsfor") => {
                    return Err(ApiError::BadRequest(
                        "the albumsfor feed needs an artist id".to_string(),
                    ))
                }
                other => {
                    return Err(ApiError::NotFound(format!(
                        "no feed named {:?}",
                        other.unwrap_or_default()
                    )))
                }
            },
            FeedRoute::AlbumsFor => {
                albums_for_feed(state, params.get("artist_id").map(String::as_str)).await?
            }
        };

        tracing::debug!(id = %feed.id, entries = feed.entries.len(), "feed built");
        Ok(atom_response(&feed))
    }
}

pub fn atom_response(feed: &Feed) -> Response {
    ([(header::CONTENT_TYPE, ATOM_CONTENT_TYPE)], feed.to_xml()).into_response()
}

pub fn fallback_updated() -> DateTime<FixedOffset> {
    DateTime::from_timestamp(FALLBACK_UPDATED_TIMESTAMP, 0)
        .unwrap_or_default()
        .fixed_offset()
}

/// Latest of the given modification times, or the fixed fallback.
pub fn feed_updated<'a, I>(stamps: I) -> DateTime<FixedOffset>
where
    I: IntoIterator<Item = &'a DateTime<FixedOffset>>,
{
    stamps
        .into_iter()
        .max()
        .copied()
        .unwrap_or_else(fallback_updated)
}

fn feed_links(config: &CatalogConfig, feed: &str, alternate: &str, related: &str) -> Vec<Link> {
    vec![
        Link::new(config.site_url(feed))
            .rel("self")
            .media_type("application/atom+xml"),
        Link::new(config.site_url(alternate))
            .rel("alternate")
            .media_type("text/html"),
        Link::new(related).rel("related").media_type("text/html"),
    ]
}

fn tag_terms(tags: Vec<tag::Model>) -> Vec<String> {
    tags.into_iter().map(|t| t.name).collect()
}

fn artist_entry(config: &CatalogConfig, artist: &artist::Model, tags: Vec<tag::Model>) -> Entry {
    let permalink = config.site_url(&artist_path(artist.id));
    let categories = tag_terms(tags);
    Entry {
        id: permalink.clone(),
        title: artist.name.clone(),
        updated: artist.modified_at,
        published: artist.added_at,
        author: artist.name.clone(),
        links: vec![Link::new(permalink.clone()).rel("alternate")],
        content: Some(Content {
            base: config.site_root(),
            html: content::artist_content(artist, &permalink, &categories),
        }),
        categories,
    }
}

fn album_entry(
    config: &CatalogConfig,
    album: &album::Model,
    artist_name: &str,
    tags: Vec<tag::Model>,
    enclosure: Option<AudioEncoding>,
) -> Entry {
    let permalink = config.site_url(&album_path(album.id));
    let categories = tag_terms(tags);
    let mut links = vec![Link::new(permalink.clone()).rel("alternate")];
    if let Some(encoding) = enclosure {
        links.push(
            Link::new(stream_url(album.uid, encoding))
                .rel("enclosure")
                .media_type(encoding.media_type()),
        );
    }

    Entry {
        id: permalink.clone(),
        title: format!("{} - {}", album.name, artist_name),
        updated: album.modified_at,
        published: album.added_at,
        author: album.name.clone(),
        links,
        content: Some(Content {
            base: config.site_root(),
            html: content::album_content(album, artist_name, &permalink, &categories),
        }),
        categories,
    }
}

/// The most recently added artists.
pub async fn artists_feed(state: &AppState) -> Result<Feed, ApiError> {
    let config = &state.config;
    let artists = artist::Entity::find()
        .order_by_desc(artist::Column::AddedAt)
        .order_by_desc(artist::Column::Id)
        .limit(config.items_per_feed)
        .all(&state.db)
        .await?;

    let mut entries = Vec::with_capacity(artists.len());
    for artist in &artists {
        let tags = tagging::tags_for(&state.db, TaggableKind::Artist, artist.id).await?;
        entries.push(artist_entry(config, artist, tags));
    }

    Ok(Feed {
        id: config.site_url(&feed_path("artists")),
        title: format!("Artists in {}", config.site_name),
        subtitle: "Artists recently added to Jamendo.com".to_string(),
        updated: feed_updated(artists.iter().map(|a| &a.modified_at)),
        links: feed_links(config, &feed_path("artists"), &artists_path(), REMOTE_ARTISTS_PAGE),
        entries,
    })
}

/// The most recently added albums, each with an MP3 stream enclosure.
pub async fn albums_feed(state: &AppState) -> Result<Feed, ApiError> {
    let config = &state.config;
    let albums = album::Entity::find()
        .order_by_desc(album::Column::AddedAt)
        .order_by_desc(album::Column::Id)
        .limit(config.items_per_feed)
        .all(&state.db)
        .await?;

    let mut artist_ids: Vec<i32> = albums.iter().map(|a| a.artist_id).collect();
    artist_ids.sort_unstable();
    artist_ids.dedup();
    let artist_names: HashMap<i32, String> = if artist_ids.is_empty() {
        HashMap::new()
    } else {
        artist::Entity::find()
            .filter(artist::Column::Id.is_in(artist_ids))
            .all(&state.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a.name))
            .collect()
    };

    let mut entries = Vec::with_capacity(albums.len());
    for album in &albums {
        let tags = tagging::album_tags(&state.db, album.id).await?;
        let artist_name = match artist_names.get(&album.artist_id) {
            Some(name) => name.as_str(),
            None => {
                tracing::warn!(
                    album_id = album.id,
                    artist_id = album.artist_id,
                    "album references a missing artist"
                );
                ""
            }
        };
        entries.push(album_entry(
            config,
            album,
            artist_name,
            tags,
            Some(AudioEncoding::Mp3),
        ));
    }

    Ok(Feed {
        id: config.site_url(&feed_path("albums")),
        title: format!("Albums in {}", config.site_name),
        subtitle: "Albums recently added to Jamendo.com".to_string(),
        updated: feed_updated(albums.iter().map(|a| &a.modified_at)),
        links: feed_links(config, &feed_path("albums"), &albums_path(), REMOTE_ALBUMS_PAGE),
        entries,
    })
}

/// Every album of one artist, by name.
pub async fn albums_for_feed(state: &AppState, artist_id: Option<&str>) -> Result<Feed, ApiError> {
    let config = &state.config;
    let raw_id = artist_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("the albumsfor feed needs an artist id".to_string()))?;

    let not_found = || ApiError::NotFound(format!("no artist with pk={raw_id}"));
    let pk: i32 = raw_id.parse().map_err(|_| not_found())?;
    let artist = artist::Entity::find_by_id(pk)
        .one(&state.db)
        .await?
        .ok_or_else(not_found)?;

    let albums = album::Entity::find()
        .filter(album::Column::ArtistId.eq(artist.id))
        .order_by_asc(album::Column::Name)
        .order_by_asc(album::Column::Id)
        .all(&state.db)
        .await?;

    let tags = tagging::tags_for(&state.db, TaggableKind::Artist, artist.id).await?;
    let entries = albums
        .iter()
        .map(|album| album_entry(config, album, &artist.name, tags.clone(), None))
        .collect();

    let path = feed_path(&format!("albumsfor/{}", artist.id));
    Ok(Feed {
        id: config.site_url(&path),
        title: format!("{}: albums in {}", artist.name, config.site_name),
        subtitle: "List of all its albums in Jamendo.com".to_string(),
        updated: feed_updated(albums.iter().map(|a| &a.modified_at)),
        links: feed_links(config, &path, &artist_path(artist.id), &artist.url),
        entries,
    })
}
