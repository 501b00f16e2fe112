//! Migration: shared interests and the user/interest join table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Interest::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interest::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Interest::Place).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserInterest::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserInterest::UserId).integer().not_null())
                    .col(ColumnDef::new(UserInterest::InterestId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(UserInterest::UserId)
                            .col(UserInterest::InterestId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_interest_user")
                            .from(UserInterest::Table, UserInterest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_interest_interest")
                            .from(UserInterest::Table, UserInterest::InterestId)
                            .to(Interest::Table, Interest::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserInterest::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Interest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Interest {
    Table,
    Id,
    Place,
}

#[derive(DeriveIden)]
enum UserInterest {
    Table,
    UserId,
    InterestId,
}
