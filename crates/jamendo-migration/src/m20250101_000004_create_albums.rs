use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_genres_and_licenses::{Genres, Licenses};
use super::m20250101_000003_create_artists::Artists;
use crate::HistoryColumns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Albums::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Albums::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Albums::Uid).integer().not_null().unique_key())
                    .col(ColumnDef::new(Albums::Mbgid).string_len(48).null())
                    .col(ColumnDef::new(Albums::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(Albums::Url).string_len(512).not_null())
                    .col(ColumnDef::new(Albums::Image).string_len(512).null())
                    .col(ColumnDef::new(Albums::ReleaseDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Albums::Filename).text().not_null())
                    .col(ColumnDef::new(Albums::GenreId).integer().null())
                    .col(ColumnDef::new(Albums::LicenseId).integer().null())
                    .col(ColumnDef::new(Albums::ArtistId).integer().not_null())
                    .col(ColumnDef::new(Albums::TrackCount).integer().not_null().default(1))
                    .col(ColumnDef::new(Albums::Duration).integer().not_null().default(0))
                    .history_columns()
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_albums_artist_id")
                            .from(Albums::Table, Albums::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_albums_genre_id")
                            .from(Albums::Table, Albums::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_albums_license_id")
                            .from(Albums::Table, Albums::LicenseId)
                            .to(Licenses::Table, Licenses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_albums_artist_id")
                    .table(Albums::Table)
                    .col(Albums::ArtistId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_albums_name_release_date")
                    .table(Albums::Table)
                    .col(Albums::Name)
                    .col(Albums::ReleaseDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_albums_license_id")
                    .table(Albums::Table)
                    .col(Albums::LicenseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Albums::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Albums {
    Table,
    Id,
    Uid,
    Mbgid,
    Name,
    Url,
    Image,
    ReleaseDate,
    Filename,
    GenreId,
    LicenseId,
    ArtistId,
    TrackCount,
    Duration,
}
