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
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tags::Name).string_len(128).not_null().unique_key())
                    .history_columns()
                    .to_owned(),
            )
            .await?;

        // object_id points into artists, albums or tracks depending on kind,
        // so it carries no foreign key.
        manager
            .create_table(
                Table::create()
                    .table(TaggedItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaggedItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TaggedItems::TagId).integer().not_null())
                    .col(ColumnDef::new(TaggedItems::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(TaggedItems::ObjectId).integer().not_null())
                    .history_columns()
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tagged_items_tag_id")
                            .from(TaggedItems::Table, TaggedItems::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tagged_items_unique")
                    .table(TaggedItems::Table)
                    .col(TaggedItems::TagId)
                    .col(TaggedItems::Kind)
                    .col(TaggedItems::ObjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tagged_items_object")
                    .table(TaggedItems::Table)
                    .col(TaggedItems::Kind)
                    .col(TaggedItems::ObjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TagInfos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TagInfos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TagInfos::Uid).integer().null().unique_key())
                    .col(ColumnDef::new(TagInfos::Weight).double().not_null().default(0.0))
                    .col(ColumnDef::new(TagInfos::TagId).integer().not_null())
                    .history_columns()
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_infos_tag_id")
                            .from(TagInfos::Table, TagInfos::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TagInfos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TaggedItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tags {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum TaggedItems {
    Table,
    Id,
    TagId,
    Kind,
    ObjectId,
}

#[derive(DeriveIden)]
pub enum TagInfos {
    Table,
    Id,
    Uid,
    Weight,
    TagId,
}
