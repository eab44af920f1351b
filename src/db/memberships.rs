use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::role::RaffleRole;
use crate::types::team::MemberWithEmail;
use chrono::Utc;
use entity::membership::{
    ActiveModel as MembershipActive, Entity as Membership, Model as MembershipModel,
};
use entity::sea_orm_active_enums::TeamRole;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::warn;
use uuid::Uuid;

impl PostgresService {
    /// Effective role of a user on a raffle. Ownership is a raffle
    /// column, never a membership row, and always checked first. Resolved
    /// fresh on every call; callers must not cache it across requests.
    pub async fn resolve_role(
        &self,
        raffle: &entity::raffle::Model,
        user_id: Uuid,
    ) -> Result<RaffleRole, AppError> {
        if raffle.owner_id == user_id {
            return Ok(RaffleRole::Owner);
        }
        let membership = self.find_membership(raffle.id, user_id).await?;
        Ok(match membership {
            Some(m) => m.role.into(),
            None => RaffleRole::None,
        })
    }

    pub async fn find_membership(
        &self,
        raffle_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<MembershipModel>, AppError> {
        Ok(Membership::find()
            .filter(entity::membership::Column::RaffleId.eq(raffle_id))
            .filter(entity::membership::Column::UserId.eq(user_id))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn get_membership(&self, id: Uuid) -> Result<MembershipModel, AppError> {
        Ok(Membership::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Membership not found".into()))?)
    }

    /// Team view for the admin panel: memberships joined with the user
    /// table, since emails live with identity, not with the membership.
    pub async fn list_members_with_email(
        &self,
        raffle_id: Uuid,
        acting_user: Uuid,
    ) -> Result<Vec<MemberWithEmail>, AppError> {
        let raffle = self.get_raffle(raffle_id).await?;
        let actor = self.resolve_role(&raffle, acting_user).await?;
        if !actor.can_invite() {
            return Err(AppError::Forbidden);
        }

        let rows = Membership::find()
            .filter(entity::membership::Column::RaffleId.eq(raffle_id))
            .order_by_asc(entity::membership::Column::CreatedAt)
            .find_also_related(entity::user::Entity)
            .all(&self.database_connection)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, user)| {
                user.map(|user| MemberWithEmail {
                    membership_id: membership.id,
                    user_id: membership.user_id,
                    name: user.name,
                    email: user.email,
                    role: membership.role,
                    joined_at: membership.created_at,
                })
            })
            .collect())
    }

    /// Removes a member. The owner removes anyone; a manager only
    /// vendors. Invitation rows for the removed member are cleaned up
    /// best-effort so a later re-invite starts fresh; the removal itself
    /// stands even when that cleanup fails.
    pub async fn remove_member(
        &self,
        membership_id: Uuid,
        acting_user: Uuid,
    ) -> Result<(), AppError> {
        let membership = self.get_membership(membership_id).await?;
        let raffle = self.get_raffle(membership.raffle_id).await?;
        let actor = self.resolve_role(&raffle, acting_user).await?;
        if !actor.can_remove(membership.role) {
            return Err(AppError::Forbidden);
        }

        let removed_user = membership.user_id;
        let raffle_id = membership.raffle_id;
        membership.delete(&self.database_connection).await?;

        let email = match self.get_user_by_id(&removed_user).await {
            Ok(user) => Some(user.email),
            Err(_) => None,
        };
        let mut matcher =
            Condition::any().add(entity::invitation::Column::InvitedUserId.eq(removed_user));
        if let Some(email) = email {
            matcher = matcher.add(entity::invitation::Column::InvitedEmail.eq(email));
        }
        let cleanup = entity::invitation::Entity::delete_many()
            .filter(entity::invitation::Column::RaffleId.eq(raffle_id))
            .filter(matcher)
            .exec(&self.database_connection)
            .await;
        if let Err(err) = cleanup {
            warn!(%raffle_id, %removed_user, "invitation cleanup after removal failed: {err}");
        }

        Ok(())
    }

    /// Promote or demote between vendor and manager. Owner only; the
    /// owner itself is not a membership and can never be targeted here.
    pub async fn set_member_role(
        &self,
        membership_id: Uuid,
        acting_user: Uuid,
        new_role: TeamRole,
    ) -> Result<MembershipModel, AppError> {
        let membership = self.get_membership(membership_id).await?;
        let raffle = self.get_raffle(membership.raffle_id).await?;
        let actor = self.resolve_role(&raffle, acting_user).await?;
        if !actor.can_change_role() {
            return Err(AppError::Forbidden);
        }
        if membership.role == new_role {
            return Err(AppError::NoOp);
        }
        let mut am: MembershipActive = membership.into();
        am.role = Set(new_role);
        Ok(am.update(&self.database_connection).await?)
    }

    /// Membership insert used by the accept path. A conflict on the
    /// (raffle, user) unique index means another accept already made
    /// this user a member; do-nothing absorbs that without erroring, so
    /// the surrounding transaction stays usable on Postgres, where a
    /// failed insert would abort it.
    pub(crate) async fn insert_membership_on(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        raffle_id: Uuid,
        user_id: Uuid,
        role: TeamRole,
    ) -> Result<(), DbErr> {
        Membership::insert(MembershipActive {
            id: Set(crate::utils::token::new_id()),
            raffle_id: Set(raffle_id),
            user_id: Set(user_id),
            role: Set(role),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::membership::Column::RaffleId,
                entity::membership::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(txn)
        .await
        .map(|_| ())
    }
}
