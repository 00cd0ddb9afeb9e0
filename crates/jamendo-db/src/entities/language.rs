use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// ISO 639-1 code.
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub added_at: DateTimeWithTimeZone,
    pub modified_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::jamendo_user::Entity")]
    JamendoUser,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::jamendo_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JamendoUser.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

history_behavior!();
