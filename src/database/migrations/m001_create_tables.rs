use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create topics table
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Topics::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create webpages table
        manager
            .create_table(
                Table::create()
                    .table(Webpages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Webpages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Webpages::TopicId).integer().not_null())
                    .col(ColumnDef::new(Webpages::Url).string().not_null())
                    .col(ColumnDef::new(Webpages::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-webpages-topic_id")
                            .from(Webpages::Table, Webpages::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create access_records table
        manager
            .create_table(
                Table::create()
                    .table(AccessRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccessRecords::WebpageId).integer().not_null())
                    .col(ColumnDef::new(AccessRecords::Date).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-access_records-webpage_id")
                            .from(AccessRecords::Table, AccessRecords::WebpageId)
                            .to(Webpages::Table, Webpages::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique indexes backing the get-or-create keys
        manager
            .create_index(
                Index::create()
                    .name("idx-topics-name")
                    .table(Topics::Table)
                    .col(Topics::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-webpages-topic_id-url-name")
                    .table(Webpages::Table)
                    .col(Webpages::TopicId)
                    .col(Webpages::Url)
                    .col(Webpages::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-access_records-webpage_id-date")
                    .table(AccessRecords::Table)
                    .col(AccessRecords::WebpageId)
                    .col(AccessRecords::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-access_records-webpage_id-date")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx-webpages-topic_id-url-name")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx-topics-name").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AccessRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Webpages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Topics {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Webpages {
    Table,
    Id,
    TopicId,
    Url,
    Name,
}

#[derive(Iden)]
enum AccessRecords {
    Table,
    Id,
    WebpageId,
    Date,
}
