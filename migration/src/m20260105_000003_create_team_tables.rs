use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // membership: active non-owner team members
        m.create_table(
            Table::create()
                .table(Membership::Table)
                .col(
                    ColumnDef::new(Membership::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Membership::RaffleId).uuid().not_null())
                .col(ColumnDef::new(Membership::UserId).uuid().not_null())
                .col(ColumnDef::new(Membership::Role).string_len(16).not_null())
                .col(
                    ColumnDef::new(Membership::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_membership_raffle")
                        .from(Membership::Table, Membership::RaffleId)
                        .to(Raffle::Table, Raffle::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_membership_user")
                        .from(Membership::Table, Membership::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        // One membership per user per raffle; the index is the arbiter
        // when two accepts race.
        m.create_index(
            Index::create()
                .name("idx_membership_raffle_user")
                .table(Membership::Table)
                .col(Membership::RaffleId)
                .col(Membership::UserId)
                .unique()
                .to_owned(),
        )
        .await?;

        // invitation: pending/resolved offers, recycled in place
        m.create_table(
            Table::create()
                .table(Invitation::Table)
                .col(
                    ColumnDef::new(Invitation::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Invitation::RaffleId).uuid().not_null())
                .col(ColumnDef::new(Invitation::InvitedEmail).string().not_null())
                .col(ColumnDef::new(Invitation::InvitedUserId).uuid().not_null())
                .col(ColumnDef::new(Invitation::Role).string_len(16).not_null())
                .col(ColumnDef::new(Invitation::Status).string_len(16).not_null())
                .col(
                    ColumnDef::new(Invitation::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Invitation::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_invitation_raffle")
                        .from(Invitation::Table, Invitation::RaffleId)
                        .to(Raffle::Table, Raffle::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_invitation_user")
                        .from(Invitation::Table, Invitation::InvitedUserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_invitation_raffle_email")
                .table(Invitation::Table)
                .col(Invitation::RaffleId)
                .col(Invitation::InvitedEmail)
                .unique()
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_invitation_user")
                .table(Invitation::Table)
                .col(Invitation::InvitedUserId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Invitation::Table).if_exists().to_owned())
            .await?;
        m.drop_table(Table::drop().table(Membership::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Membership {
    Table,
    Id,
    RaffleId,
    UserId,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Invitation {
    Table,
    Id,
    RaffleId,
    InvitedEmail,
    InvitedUserId,
    Role,
    Status,
    CreatedAt,
    UpdatedAt,
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
