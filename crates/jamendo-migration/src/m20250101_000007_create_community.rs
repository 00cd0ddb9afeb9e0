use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_geography::Languages;
use crate::HistoryColumns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JamendoUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JamendoUsers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JamendoUsers::Uid).integer().null().unique_key())
                    .col(ColumnDef::new(JamendoUsers::Name).string_len(255).not_null().default(""))
                    .col(
                        ColumnDef::new(JamendoUsers::Idstr)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(JamendoUsers::Image).string_len(512).null())
                    .col(ColumnDef::new(JamendoUsers::LanguageCode).string_len(2).not_null())
                    .history_columns()
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jamendo_users_language_code")
                            .from(JamendoUsers::Table, JamendoUsers::LanguageCode)
                            .to(Languages::Table, Languages::Code),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::Uid).integer().null().unique_key())
                    .col(ColumnDef::new(Reviews::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(Reviews::Text).text().not_null())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null().default(0))
                    .col(ColumnDef::new(Reviews::LanguageCode).string_len(2).not_null())
                    .history_columns()
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_language_code")
                            .from(Reviews::Table, Reviews::LanguageCode)
                            .to(Languages::Table, Languages::Code),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Playlists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Playlists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Playlists::Uid).integer().null().unique_key())
                    .col(ColumnDef::new(Playlists::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(Playlists::Duration).integer().not_null().default(0))
                    .history_columns()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Radios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Radios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Radios::Uid).integer().null().unique_key())
                    .col(ColumnDef::new(Radios::Idstr).string_len(255).not_null().unique_key())
                    .col(ColumnDef::new(Radios::Name).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(Radios::Duration).integer().not_null().default(0))
                    .col(ColumnDef::new(Radios::Weight).integer().not_null().default(1))
                    .col(ColumnDef::new(Radios::Image).string_len(512).null())
                    .history_columns()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Radios::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Playlists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JamendoUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum JamendoUsers {
    Table,
    Id,
    Uid,
    Name,
    Idstr,
    Image,
    LanguageCode,
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    Id,
    Uid,
    Name,
    Text,
    Rating,
    LanguageCode,
}

#[derive(DeriveIden)]
pub enum Playlists {
    Table,
    Id,
    Uid,
    Name,
    Duration,
}

#[derive(DeriveIden)]
pub enum Radios {
    Table,
    Id,
    Uid,
    Idstr,
    Name,
    Duration,
    Weight,
    Image,
}
