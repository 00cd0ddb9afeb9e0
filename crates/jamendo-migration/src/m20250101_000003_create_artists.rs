use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_geography::Cities;
use crate::HistoryColumns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artists::Uid).integer().not_null().unique_key())
                    .col(ColumnDef::new(Artists::Mbgid).string_len(48).null())
                    .col(ColumnDef::new(Artists::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(Artists::Image).string_len(512).null())
                    .col(ColumnDef::new(Artists::Url).string_len(512).not_null())
                    .col(ColumnDef::new(Artists::AlbumCount).integer().not_null().default(1))
                    .col(ColumnDef::new(Artists::CityId).integer().null())
                    .col(ColumnDef::new(Artists::Latitude).double().null())
                    .col(ColumnDef::new(Artists::Longitude).double().null())
                    .history_columns()
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artists_city_id")
                            .from(Artists::Table, Artists::CityId)
                            .to(Cities::Table, Cities::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artists_name")
                    .table(Artists::Table)
                    .col(Artists::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artists_mbgid")
                    .table(Artists::Table)
                    .col(Artists::Mbgid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Artists {
    Table,
    Id,
    Uid,
    Mbgid,
    Name,
    Image,
    Url,
    AlbumCount,
    CityId,
    Latitude,
    Longitude,
}
