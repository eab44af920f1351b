use entity::sea_orm_active_enums::TeamRole;
use serde::Serialize;

/// Effective standing of a user on one raffle, resolved fresh per
/// request. Ownership wins over any membership row; a demoted or removed
/// actor must not keep acting on a stale resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RaffleRole {
    Owner,
    Manager,
    Vendor,
    None,
}

impl From<TeamRole> for RaffleRole {
    fn from(role: TeamRole) -> Self {
        match role {
            TeamRole::Manager => RaffleRole::Manager,
            TeamRole::Vendor => RaffleRole::Vendor,
        }
    }
}

impl RaffleRole {
    pub fn can_invite(&self) -> bool {
        matches!(self, RaffleRole::Owner | RaffleRole::Manager)
    }

    /// Only the owner hands out (or promotes to) the manager role.
    pub fn can_grant_manager(&self) -> bool {
        matches!(self, RaffleRole::Owner)
    }

    /// Owner removes anyone; a manager may only remove vendors.
    pub fn can_remove(&self, target: TeamRole) -> bool {
        match self {
            RaffleRole::Owner => true,
            RaffleRole::Manager => target == TeamRole::Vendor,
            _ => false,
        }
    }

    pub fn can_change_role(&self) -> bool {
        matches!(self, RaffleRole::Owner)
    }

    pub fn can_manage_sales(&self) -> bool {
        matches!(self, RaffleRole::Owner | RaffleRole::Manager)
    }

    pub fn is_member(&self) -> bool {
        !matches!(self, RaffleRole::None)
    }
}
