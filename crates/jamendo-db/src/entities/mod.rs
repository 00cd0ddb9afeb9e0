//! sea-orm entities mirroring the Jamendo catalog.
//!
//! Every table carries the same three bookkeeping columns: `added_at` (set
//! once on insert), `modified_at` (refreshed on every write) and
//! `updated_at` (last time the row was refreshed from the remote catalog,
//! maintained by the sync process).

/// `ActiveModelBehavior` shared by every catalog entity: stamps `added_at`
/// on insert (unless the caller set it) and `modified_at` on every save.
macro_rules! history_behavior {
    () => {
        #[async_trait::async_trait]
        impl ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
            where
                C: ConnectionTrait,
            {
                let now = chrono::Utc::now().fixed_offset();
                if insert && self.added_at.is_not_set() {
                    self.added_at = sea_orm::ActiveValue::Set(now);
                }
                self.modified_at = sea_orm::ActiveValue::Set(now);
                Ok(self)
            }
        }
    };
}

pub mod album;
pub mod artist;
pub mod city;
pub mod country;
pub mod genre;
pub mod jamendo_user;
pub mod language;
pub mod license;
pub mod playlist;
pub mod radio;
pub mod review;
pub mod state;
pub mod tag;
pub mod tag_info;
pub mod tagged_item;
pub mod track;
