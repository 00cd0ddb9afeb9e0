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
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Countries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Countries::Code)
                            .string_len(4)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Countries::Numcode).integer().not_null().unique_key())
                    .col(ColumnDef::new(Countries::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Countries::PrintableName).string_len(100).not_null())
                    .history_columns()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_countries_name")
                    .table(Countries::Table)
                    .col(Countries::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(States::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(States::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(States::Code).string_len(4).null())
                    .col(ColumnDef::new(States::Name).string_len(100).null())
                    .col(ColumnDef::new(States::CountryCode).string_len(4).null())
                    .history_columns()
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_states_country_code")
                            .from(States::Table, States::CountryCode)
                            .to(Countries::Table, Countries::Code)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_states_code_country")
                    .table(States::Table)
                    .col(States::Code)
                    .col(States::CountryCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cities::Uid).integer().null().unique_key())
                    .col(ColumnDef::new(Cities::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Cities::StateId).integer().null())
                    .history_columns()
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cities_state_id")
                            .from(Cities::Table, Cities::StateId)
                            .to(States::Table, States::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cities_name")
                    .table(Cities::Table)
                    .col(Cities::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Languages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Languages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Languages::Code)
                            .string_len(2)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Languages::Name).text().not_null().default(""))
                    .history_columns()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Languages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(States::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Countries {
    Table,
    Id,
    Code,
    Numcode,
    Name,
    PrintableName,
}

#[derive(DeriveIden)]
pub enum States {
    Table,
    Id,
    Code,
    Name,
    CountryCode,
}

#[derive(DeriveIden)]
pub enum Cities {
    Table,
    Id,
    Uid,
    Name,
    StateId,
}

#[derive(DeriveIden)]
pub enum Languages {
    Table,
    Id,
    Code,
    Name,
}
