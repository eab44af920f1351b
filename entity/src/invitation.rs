use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{InviteStatus, TeamRole};

/// Unique per (raffle_id, invited_email). Declined or orphaned-accepted
/// rows get recycled back to pending instead of inserting a second row.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invitation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub raffle_id: Uuid,
    pub invited_email: String,
    pub invited_user_id: Uuid,
    pub role: TeamRole,
    pub status: InviteStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::raffle::Entity",
        from = "Column::RaffleId",
        to = "super::raffle::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Raffle,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InvitedUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    InvitedUser,
}

impl Related<super::raffle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Raffle.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvitedUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
