use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Ticket::Table)
                .col(ColumnDef::new(Ticket::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Ticket::RaffleId).uuid().not_null())
                .col(ColumnDef::new(Ticket::Number).integer().not_null())
                .col(ColumnDef::new(Ticket::BuyerName).string().not_null())
                .col(ColumnDef::new(Ticket::BuyerContact).string().not_null())
                .col(ColumnDef::new(Ticket::SellerId).uuid().null())
                .col(ColumnDef::new(Ticket::Status).string_len(16).not_null())
                .col(ColumnDef::new(Ticket::ReceiptUrl).string().null())
                .col(
                    ColumnDef::new(Ticket::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_ticket_raffle")
                        .from(Ticket::Table, Ticket::RaffleId)
                        .to(Raffle::Table, Raffle::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_ticket_seller")
                        .from(Ticket::Table, Ticket::SellerId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        // Each number can only be sold once per raffle.
        m.create_index(
            Index::create()
                .name("idx_ticket_raffle_number")
                .table(Ticket::Table)
                .col(Ticket::RaffleId)
                .col(Ticket::Number)
                .unique()
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_ticket_seller")
                .table(Ticket::Table)
                .col(Ticket::SellerId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Ticket::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ticket {
    Table,
    Id,
    RaffleId,
    Number,
    BuyerName,
    BuyerContact,
    SellerId,
    Status,
    ReceiptUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Raffle {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
