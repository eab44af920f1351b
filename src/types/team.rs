use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TeamRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RTeamInvite {
    pub email: String,
    pub role: TeamRole,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RMemberRole {
    pub role: TeamRole,
}

/// Membership joined with the member's identity. Emails live on the user
/// table, so the team view is always this join, never the raw rows.
#[derive(Serialize, Debug)]
pub struct MemberWithEmail {
    pub membership_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    pub joined_at: DateTime<Utc>,
}

/// A pending invitation as shown on the invitee's dashboard, carrying
/// enough raffle context to decide on it.
#[derive(Serialize, Debug)]
pub struct InviteSummary {
    pub invite_id: Uuid,
    pub raffle_id: Uuid,
    pub raffle_title: String,
    pub raffle_description: Option<String>,
    pub ticket_price_cents: i64,
    pub owner_email: String,
    pub role: TeamRole,
    pub created_at: DateTime<Utc>,
}
