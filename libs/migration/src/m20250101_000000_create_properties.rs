use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Properties::Address, 255))
                    .col(double(Properties::Price))
                    .col(integer(Properties::Size))
                    .col(text_null(Properties::Description))
                    .to_owned(),
            )
            .await?;

        // Backs the price and size range searches
        manager
            .create_index(
                Index::create()
                    .name("idx_properties_price")
                    .table(Properties::Table)
                    .col(Properties::Price)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_properties_size")
                    .table(Properties::Table)
                    .col(Properties::Size)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    Address,
    Price,
    Size,
    Description,
}
