//! Tag queries over the `tagged_items` join table.
//!
//! Artists and tracks carry their own tags. An album's tags are never read
//! from rows attached to the album itself: they are the deduplicated union of
//! the tags of its tracks (see [`album_tags`]).

use std::collections::BTreeSet;

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::Serialize;

use crate::entities::tagged_item::{self, TaggableKind};
use crate::entities::{tag, track};

/// Number of font-size buckets a cloud is spread over.
pub const CLOUD_STEPS: u32 = 4;

/// Tags attached to one object, ordered by name.
pub async fn tags_for<C>(db: &C, kind: TaggableKind, object_id: i32) -> Result<Vec<tag::Model>, DbErr>
where
    C: ConnectionTrait,
{
    tag::Entity::find()
        .join(JoinType::InnerJoin, tag::Relation::TaggedItem.def())
        .filter(tagged_item::Column::Kind.eq(kind))
        .filter(tagged_item::Column::ObjectId.eq(object_id))
        .order_by_asc(tag::Column::Name)
        .all(db)
        .await
}

/// Effective tags of an album: the union of the tags of its tracks.
pub async fn album_tags<C>(db: &C, album_id: i32) -> Result<Vec<tag::Model>, DbErr>
where
    C: ConnectionTrait,
{
    let track_ids: Vec<i32> = track::Entity::find()
        .select_only()
        .column(track::Column::Id)
        .filter(track::Column::AlbumId.eq(album_id))
        .into_tuple()
        .all(db)
        .await?;

    if track_ids.is_empty() {
        return Ok(Vec::new());
    }

    tag::Entity::find()
        .join(JoinType::InnerJoin, tag::Relation::TaggedItem.def())
        .filter(tagged_item::Column::Kind.eq(TaggableKind::Track))
        .filter(tagged_item::Column::ObjectId.is_in(track_ids))
        .distinct()
        .order_by_asc(tag::Column::Name)
        .all(db)
        .await
}

/// Ids of the objects of `kind` carrying the tag.
pub async fn object_ids_for_tag<C>(db: &C, tag_id: i32, kind: TaggableKind) -> Result<Vec<i32>, DbErr>
where
    C: ConnectionTrait,
{
    tagged_item::Entity::find()
        .select_only()
        .column(tagged_item::Column::ObjectId)
        .filter(tagged_item::Column::TagId.eq(tag_id))
        .filter(tagged_item::Column::Kind.eq(kind))
        .order_by_asc(tagged_item::Column::ObjectId)
        .into_tuple()
        .all(db)
        .await
}

/// Replace the tag set of one object with `names`.
///
/// Names are trimmed and deduplicated; missing tags are created and
/// associations no longer listed are removed.
pub async fn update_tags<C>(
    db: &C,
    kind: TaggableKind,
    object_id: i32,
    names: &[&str],
) -> Result<Vec<tag::Model>, DbErr>
where
    C: ConnectionTrait,
{
    let wanted: BTreeSet<String> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect();

    let current = tags_for(db, kind, object_id).await?;
    let stale: Vec<i32> = current
        .iter()
        .filter(|t| !wanted.contains(&t.name))
        .map(|t| t.id)
        .collect();

    if !stale.is_empty() {
        tagged_item::Entity::delete_many()
            .filter(tagged_item::Column::Kind.eq(kind))
            .filter(tagged_item::Column::ObjectId.eq(object_id))
            .filter(tagged_item::Column::TagId.is_in(stale))
            .exec(db)
            .await?;
    }

    for name in &wanted {
        if current.iter().any(|t| &t.name == name) {
            continue;
        }

        let existing = tag::Entity::find()
            .filter(tag::Column::Name.eq(name.as_str()))
            .one(db)
            .await?;
        let tag = match existing {
            Some(tag) => tag,
            None => {
                tag::ActiveModel {
                    name: Set(name.clone()),
                    ..Default::default()
                }
                .insert(db)
                .await?
            }
        };

        tagged_item::ActiveModel {
            tag_id: Set(tag.id),
            kind: Set(kind),
            object_id: Set(object_id),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    tracing::debug!(%kind, object_id, count = wanted.len(), "tags updated");

    tags_for(db, kind, object_id).await
}

/// A tag with its usage count and cloud font-size bucket (1..=steps).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudTag {
    pub name: String,
    pub count: i64,
    pub font_size: u32,
}

#[derive(Debug, FromQueryResult)]
struct TagUsage {
    name: String,
    count: i64,
}

/// Tags used by objects of `kind` with their usage counts, weighted into a
/// cloud and ordered by name.
pub async fn cloud_for_kind<C>(db: &C, kind: TaggableKind) -> Result<Vec<CloudTag>, DbErr>
where
    C: ConnectionTrait,
{
    let usage = tag::Entity::find()
        .select_only()
        .column(tag::Column::Name)
        .column_as(
            Expr::col((tagged_item::Entity, tagged_item::Column::Id)).count(),
            "count",
        )
        .join(JoinType::InnerJoin, tag::Relation::TaggedItem.def())
        .filter(tagged_item::Column::Kind.eq(kind))
        .group_by(tag::Column::Id)
        .group_by(tag::Column::Name)
        .order_by_asc(tag::Column::Name)
        .into_model::<TagUsage>()
        .all(db)
        .await?;

    Ok(calculate_cloud(
        usage.into_iter().map(|u| (u.name, u.count)).collect(),
        CLOUD_STEPS,
    ))
}

/// Spread tag counts over `steps` font sizes with a logarithmic distribution.
///
/// Counts are mapped to `ln(count) * max / ln(max)` (identity when the largest
/// count is 1) and bucketed against `steps` evenly spaced thresholds between
/// the smallest and largest raw count.
pub fn calculate_cloud(tags: Vec<(String, i64)>, steps: u32) -> Vec<CloudTag> {
    let steps = steps.max(1);
    let Some(min_count) = tags.iter().map(|(_, c)| *c).min() else {
        return Vec::new();
    };
    let max_count = tags.iter().map(|(_, c)| *c).max().unwrap_or(min_count);

    let min_weight = min_count as f64;
    let max_weight = max_count as f64;
    let delta = (max_weight - min_weight) / f64::from(steps);
    let thresholds: Vec<f64> = (1..=steps)
        .map(|i| min_weight + f64::from(i) * delta)
        .collect();

    tags.into_iter()
        .map(|(name, count)| {
            let weight = if max_count <= 1 {
                count as f64
            } else {
                (count.max(1) as f64).ln() * max_weight / max_weight.ln()
            };
            let font_size = thresholds
                .iter()
                .position(|t| weight <= *t)
                .map(|i| i as u32 + 1)
                .unwrap_or(steps);
            CloudTag {
                name,
                count,
                font_size,
            }
        })
        .collect()
}
