use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Which table a [`Model::object_id`] points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum TaggableKind {
    #[sea_orm(string_value = "artist")]
    Artist,
    #[sea_orm(string_value = "album")]
    Album,
    #[sea_orm(string_value = "track")]
    Track,
}

impl TaggableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaggableKind::Artist => "artist",
            TaggableKind::Album => "album",
            TaggableKind::Track => "track",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "artist" => Some(TaggableKind::Artist),
            "album" => Some(TaggableKind::Album),
            "track" => Some(TaggableKind::Track),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaggableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Association of a tag with one artist, album or track.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tagged_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tag_id: i32,
    pub kind: TaggableKind,
    pub object_id: i32,
    pub added_at: DateTimeWithTimeZone,
    pub modified_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id"
    )]
    Tag,
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

history_behavior!();
