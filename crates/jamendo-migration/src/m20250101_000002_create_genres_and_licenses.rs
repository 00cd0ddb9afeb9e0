use sea_orm_migration::prelude::*;

use crate::HistoryColumns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genres::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Genres::Code).string_len(64).not_null().unique_key())
                    .col(ColumnDef::new(Genres::Name).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Genres::PluralName)
                            .string_len(128)
                            .not_null()
                            .default(""),
                    )
                    .history_columns()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Licenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Licenses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Licenses::Uid).integer().not_null().unique_key())
                    .col(ColumnDef::new(Licenses::LicenseClass).string_len(128).not_null())
                    .col(ColumnDef::new(Licenses::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Licenses::Url).string_len(512).not_null().unique_key())
                    .history_columns()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_licenses_name")
                    .table(Licenses::Table)
                    .col(Licenses::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Licenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genres::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Genres {
    Table,
    Id,
    Code,
    Name,
    PluralName,
}

#[derive(DeriveIden)]
pub enum Licenses {
    Table,
    Id,
    Uid,
    LicenseClass,
    Name,
    Url,
}
