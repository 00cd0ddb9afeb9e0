pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_geography;
mod m20250101_000002_create_genres_and_licenses;
mod m20250101_000003_create_artists;
mod m20250101_000004_create_albums;
mod m20250101_000005_create_tracks;
mod m20250101_000006_create_tags;
mod m20250101_000007_create_community;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_geography::Migration),
            Box::new(m20250101_000002_create_genres_and_licenses::Migration),
            Box::new(m20250101_000003_create_artists::Migration),
            Box::new(m20250101_000004_create_albums::Migration),
            Box::new(m20250101_000005_create_tracks::Migration),
            Box::new(m20250101_000006_create_tags::Migration),
            Box::new(m20250101_000007_create_community::Migration),
        ]
    }
}

/// Bookkeeping columns present on every catalog table.
#[derive(DeriveIden)]
enum History {
    AddedAt,
    ModifiedAt,
    UpdatedAt,
}

trait HistoryColumns {
    /// Append `added_at`, `modified_at` and the nullable `updated_at`.
    fn history_columns(&mut self) -> &mut Self;
}

impl HistoryColumns for TableCreateStatement {
    fn history_columns(&mut self) -> &mut Self {
        self.col(
            ColumnDef::new(History::AddedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(History::ModifiedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(History::UpdatedAt)
                .timestamp_with_time_zone()
                .null(),
        )
    }
}
