use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Raffle::Table)
                .col(ColumnDef::new(Raffle::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Raffle::OwnerId).uuid().not_null())
                .col(ColumnDef::new(Raffle::Title).string().not_null())
                .col(ColumnDef::new(Raffle::Description).string().null())
                .col(ColumnDef::new(Raffle::Prize).string().null())
                .col(
                    ColumnDef::new(Raffle::TicketPriceCents)
                        .big_integer()
                        .not_null(),
                )
                .col(ColumnDef::new(Raffle::TicketCount).integer().not_null())
                .col(
                    ColumnDef::new(Raffle::DrawDate)
                        .timestamp_with_time_zone()
                        .null(),
                )
                .col(
                    ColumnDef::new(Raffle::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Raffle::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_raffle_owner")
                        .from(Raffle::Table, Raffle::OwnerId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_raffle_owner")
                .table(Raffle::Table)
                .col(Raffle::OwnerId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Raffle::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Raffle {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    Prize,
    TicketPriceCents,
    TicketCount,
    DrawDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
