use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_genres_and_licenses::{Genres, Licenses};
use super::m20250101_000003_create_artists::Artists;
use super::m20250101_000004_create_albums::Albums;
use crate::HistoryColumns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tracks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tracks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tracks::Uid).integer().null().unique_key())
                    .col(ColumnDef::new(Tracks::Mbgid).string_len(48).null())
                    .col(ColumnDef::new(Tracks::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(Tracks::Url).string_len(512).not_null())
                    .col(ColumnDef::new(Tracks::Duration).integer().not_null().default(0))
                    .col(ColumnDef::new(Tracks::AlbumId).integer().not_null())
                    .col(ColumnDef::new(Tracks::ArtistId).integer().not_null())
                    .col(ColumnDef::new(Tracks::Numalbum).integer().not_null().default(1))
                    .col(ColumnDef::new(Tracks::Filename).text().not_null())
                    .col(ColumnDef::new(Tracks::GenreId).integer().null())
                    .col(ColumnDef::new(Tracks::LicenseId).integer().null())
                    .history_columns()
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracks_album_id")
                            .from(Tracks::Table, Tracks::AlbumId)
                            .to(Albums::Table, Albums::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracks_artist_id")
                            .from(Tracks::Table, Tracks::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracks_genre_id")
                            .from(Tracks::Table, Tracks::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracks_license_id")
                            .from(Tracks::Table, Tracks::LicenseId)
                            .to(Licenses::Table, Licenses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracks_album_id")
                    .table(Tracks::Table)
                    .col(Tracks::AlbumId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracks_artist_id")
                    .table(Tracks::Table)
                    .col(Tracks::ArtistId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tracks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tracks {
    Table,
    Id,
    Uid,
    Mbgid,
    Name,
    Url,
    Duration,
    AlbumId,
    ArtistId,
    Numalbum,
    Filename,
    GenreId,
    LicenseId,
}
