use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegisteredUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RegisteredUsers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(text(RegisteredUsers::Name))
                    .col(text(RegisteredUsers::Surname))
                    .col(text(RegisteredUsers::Gender))
                    .col(date(RegisteredUsers::BirthDate))
                    .to_owned(),
            )
            .await?;

        // One address per user, removed together with the user
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(text_null(Addresses::WorkAddress))
                    .col(text_null(Addresses::HomeAddress))
                    .col(
                        ColumnDef::new(Addresses::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_user_id")
                            .from(Addresses::Table, Addresses::UserId)
                            .to(RegisteredUsers::Table, RegisteredUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addresses::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(RegisteredUsers::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RegisteredUsers {
    Table,
    Id,
    Name,
    Surname,
    Gender,
    BirthDate,
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    WorkAddress,
    HomeAddress,
    UserId,
}
