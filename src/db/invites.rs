use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::team::InviteSummary;
use chrono::Utc;
use entity::invitation::{
    ActiveModel as InviteActive, Entity as Invitation, Model as InviteModel,
};
use entity::sea_orm_active_enums::{InviteStatus, TeamRole};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    SqlErr, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

impl PostgresService {
    /// Create (or resend) an invitation. Precondition order matters and
    /// is what the error kinds hang off:
    ///   permission -> target sanity -> membership -> existing invite.
    /// A declined or orphaned-accepted row is recycled in place rather
    /// than inserted again; the unique (raffle, email) index arbitrates
    /// concurrent inviters.
    pub async fn create_invite(
        &self,
        raffle_id: Uuid,
        inviter_id: Uuid,
        target_email: &str,
        requested_role: TeamRole,
    ) -> Result<InviteModel, AppError> {
        let raffle = self.get_raffle(raffle_id).await?;
        let inviter = self.get_user_by_id(&inviter_id).await?;
        let actor = self.resolve_role(&raffle, inviter_id).await?;

        if !actor.can_invite() {
            return Err(AppError::Forbidden);
        }
        if requested_role == TeamRole::Manager && !actor.can_grant_manager() {
            return Err(AppError::Forbidden);
        }

        let email = target_email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AppError::Validation("email must not be empty".into()));
        }
        if inviter.email == email {
            return Err(AppError::InvalidTarget);
        }

        // Strict policy: invites require an existing account.
        let target = self
            .find_user_by_email(&email)
            .await?
            .ok_or(AppError::UnknownUser)?;
        if target.id == raffle.owner_id {
            return Err(AppError::InvalidTarget);
        }
        if self.find_membership(raffle_id, target.id).await?.is_some() {
            return Err(AppError::AlreadyMember);
        }

        let existing = Invitation::find()
            .filter(entity::invitation::Column::RaffleId.eq(raffle_id))
            .filter(entity::invitation::Column::InvitedEmail.eq(email.clone()))
            .one(&self.database_connection)
            .await?;

        if let Some(invite) = existing {
            if invite.status == InviteStatus::Pending {
                return Err(AppError::DuplicatePending);
            }
            // Declined, or accepted but the membership is gone (member
            // was removed after accepting): resend by recycling the row.
            let now = Utc::now();
            let mut am: InviteActive = invite.into();
            am.status = Set(InviteStatus::Pending);
            am.role = Set(requested_role);
            am.invited_user_id = Set(target.id);
            am.created_at = Set(now);
            am.updated_at = Set(now);
            return Ok(am.update(&self.database_connection).await?);
        }

        let now = Utc::now();
        let model = InviteActive {
            id: Set(crate::utils::token::new_id()),
            raffle_id: Set(raffle_id),
            invited_email: Set(email),
            invited_user_id: Set(target.id),
            role: Set(requested_role),
            status: Set(InviteStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        };
        match model.insert(&self.database_connection).await {
            Ok(invite) => Ok(invite),
            Err(err) => match err.sql_err() {
                // Lost the race against a concurrent inviter.
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::DuplicatePending),
                _ => Err(err.into()),
            },
        }
    }

    pub async fn get_invite(&self, id: Uuid) -> Result<InviteModel, AppError> {
        Ok(Invitation::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Invitation not found".into()))?)
    }

    /// Invitations for a raffle's admin panel. The owner sees every row;
    /// a manager only vendor-role ones; vendors see none.
    pub async fn list_invites_for_raffle(
        &self,
        raffle_id: Uuid,
        acting_user: Uuid,
    ) -> Result<Vec<InviteModel>, AppError> {
        let raffle = self.get_raffle(raffle_id).await?;
        let actor = self.resolve_role(&raffle, acting_user).await?;
        if !actor.can_invite() {
            return Err(AppError::Forbidden);
        }
        let mut finder = Invitation::find()
            .filter(entity::invitation::Column::RaffleId.eq(raffle_id))
            .order_by_desc(entity::invitation::Column::CreatedAt);
        if !actor.can_grant_manager() {
            finder = finder.filter(entity::invitation::Column::Role.eq(TeamRole::Vendor));
        }
        Ok(finder.all(&self.database_connection).await?)
    }

    /// The invitee's dashboard list, with raffle context and the owner's
    /// email joined in. Owner emails come back in one batched query.
    pub async fn list_my_pending_invites(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<InviteSummary>, AppError> {
        let rows = Invitation::find()
            .filter(entity::invitation::Column::InvitedUserId.eq(user_id))
            .filter(entity::invitation::Column::Status.eq(InviteStatus::Pending))
            .order_by_desc(entity::invitation::Column::CreatedAt)
            .find_also_related(entity::raffle::Entity)
            .all(&self.database_connection)
            .await?;

        let owner_ids: Vec<Uuid> = rows
            .iter()
            .filter_map(|(_, raffle)| raffle.as_ref().map(|r| r.owner_id))
            .collect();
        let owner_emails: HashMap<Uuid, String> = entity::user::Entity::find()
            .filter(entity::user::Column::Id.is_in(owner_ids))
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|user| (user.id, user.email))
            .collect();

        let mut out = Vec::with_capacity(rows.len());
        for (invite, raffle) in rows {
            let Some(raffle) = raffle else { continue };
            let Some(owner_email) = owner_emails.get(&raffle.owner_id) else {
                continue;
            };
            out.push(InviteSummary {
                invite_id: invite.id,
                raffle_id: raffle.id,
                raffle_title: raffle.title,
                raffle_description: raffle.description,
                ticket_price_cents: raffle.ticket_price_cents,
                owner_email: owner_email.clone(),
                role: invite.role,
                created_at: invite.created_at,
            });
        }
        Ok(out)
    }

    /// Accept: membership insert and status flip in one transaction, so
    /// no one ever observes a member whose invitation still reads
    /// pending. Losing the membership insert race means someone else
    /// already made us a member; the invitation is marked accepted all
    /// the same.
    pub async fn accept_invite(&self, invite_id: Uuid, acting_user: Uuid) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;

        let invite = Invitation::find_by_id(invite_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Invitation not found".into()))?;

        if invite.invited_user_id != acting_user {
            txn.rollback().await?;
            return Err(AppError::Forbidden);
        }
        if invite.status != InviteStatus::Pending {
            txn.rollback().await?;
            return Err(AppError::InvalidState(
                "invitation is no longer pending".into(),
            ));
        }

        let already_member = entity::membership::Entity::find()
            .filter(entity::membership::Column::RaffleId.eq(invite.raffle_id))
            .filter(entity::membership::Column::UserId.eq(acting_user))
            .one(&txn)
            .await?
            .is_some();

        if !already_member {
            // Losing the insert race against a concurrent accept is
            // absorbed inside the helper; either way the user is a
            // member once it returns.
            self.insert_membership_on(&txn, invite.raffle_id, acting_user, invite.role)
                .await?;
        }

        let mut am: InviteActive = invite.into();
        am.status = Set(InviteStatus::Accepted);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Decline is idempotent on purpose: re-declining an already declined
    /// or accepted invitation just records declined again.
    pub async fn decline_invite(&self, invite_id: Uuid, acting_user: Uuid) -> Result<(), AppError> {
        let invite = self.get_invite(invite_id).await?;
        if invite.invited_user_id != acting_user {
            return Err(AppError::Forbidden);
        }
        let mut am: InviteActive = invite.into();
        am.status = Set(InviteStatus::Declined);
        am.updated_at = Set(Utc::now());
        am.update(&self.database_connection).await?;
        Ok(())
    }

    /// Inviter-side withdrawal: a hard delete, unlike decline which keeps
    /// the row around for recycling.
    pub async fn cancel_invite(&self, invite_id: Uuid, acting_user: Uuid) -> Result<(), AppError> {
        let invite = self.get_invite(invite_id).await?;
        let raffle = self.get_raffle(invite.raffle_id).await?;
        let actor = self.resolve_role(&raffle, acting_user).await?;
        if !actor.can_invite() {
            return Err(AppError::Forbidden);
        }
        invite.delete(&self.database_connection).await?;
        Ok(())
    }
}
