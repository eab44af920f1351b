use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::raffle::{RRaffleCreate, RRaffleUpdate, RaffleWithRole};
use crate::types::role::RaffleRole;
use crate::utils::token;
use chrono::Utc;
use entity::raffle::{ActiveModel as RaffleActive, Entity as Raffle, Model as RaffleModel};
use entity::ticket::Entity as Ticket;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_raffle(
        &self,
        owner_id: Uuid,
        payload: RRaffleCreate,
    ) -> Result<Uuid, AppError> {
        if payload.title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".into()));
        }
        if payload.ticket_count < 1 {
            return Err(AppError::Validation(
                "a raffle needs at least one number".into(),
            ));
        }
        if payload.ticket_price_cents < 0 {
            return Err(AppError::Validation("price cannot be negative".into()));
        }

        let rid = token::new_id();
        let now = Utc::now();
        Raffle::insert(RaffleActive {
            id: Set(rid),
            owner_id: Set(owner_id),
            title: Set(payload.title.trim().to_string()),
            description: Set(payload.description),
            prize: Set(payload.prize),
            ticket_price_cents: Set(payload.ticket_price_cents),
            ticket_count: Set(payload.ticket_count),
            draw_date: Set(payload.draw_date),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(rid)
    }

    pub async fn get_raffle(&self, id: Uuid) -> Result<RaffleModel, AppError> {
        Ok(Raffle::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Raffle not found".into()))?)
    }

    /// Dashboard listing: raffles the user owns plus raffles they joined,
    /// each tagged with the role they hold there.
    pub async fn list_raffles_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<RaffleWithRole>, AppError> {
        let owned = Raffle::find()
            .filter(entity::raffle::Column::OwnerId.eq(user_id))
            .order_by_desc(entity::raffle::Column::CreatedAt)
            .all(&self.database_connection)
            .await?;

        let mut out: Vec<RaffleWithRole> = owned
            .into_iter()
            .map(|raffle| RaffleWithRole {
                raffle,
                my_role: RaffleRole::Owner,
            })
            .collect();

        let joined = entity::membership::Entity::find()
            .filter(entity::membership::Column::UserId.eq(user_id))
            .find_also_related(Raffle)
            .all(&self.database_connection)
            .await?;

        for (membership, raffle) in joined {
            if let Some(raffle) = raffle {
                out.push(RaffleWithRole {
                    raffle,
                    my_role: membership.role.into(),
                });
            }
        }

        Ok(out)
    }

    pub async fn update_raffle(
        &self,
        raffle_id: Uuid,
        acting_user: Uuid,
        patch: RRaffleUpdate,
    ) -> Result<RaffleModel, AppError> {
        let raffle = self.get_raffle(raffle_id).await?;
        if raffle.owner_id != acting_user {
            return Err(AppError::Forbidden);
        }

        if let Some(count) = patch.ticket_count {
            if count < 1 {
                return Err(AppError::Validation(
                    "a raffle needs at least one number".into(),
                ));
            }
            // Resizing with tickets already sold would strand sold numbers.
            if count != raffle.ticket_count && self.sold_ticket_count(raffle_id).await? > 0 {
                return Err(AppError::InvalidState(
                    "cannot change the number count after sales started".into(),
                ));
            }
        }
        if let Some(price) = patch.ticket_price_cents {
            if price < 0 {
                return Err(AppError::Validation("price cannot be negative".into()));
            }
        }

        let mut am: RaffleActive = raffle.into();
        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::Validation("title must not be empty".into()));
            }
            am.title = Set(title.trim().to_string());
        }
        if let Some(description) = patch.description {
            am.description = Set(Some(description));
        }
        if let Some(prize) = patch.prize {
            am.prize = Set(Some(prize));
        }
        if let Some(price) = patch.ticket_price_cents {
            am.ticket_price_cents = Set(price);
        }
        if let Some(count) = patch.ticket_count {
            am.ticket_count = Set(count);
        }
        if let Some(draw_date) = patch.draw_date {
            am.draw_date = Set(Some(draw_date));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    /// Owner-only; tickets, memberships and invitations go with it via
    /// FK cascade.
    pub async fn delete_raffle(&self, raffle_id: Uuid, acting_user: Uuid) -> Result<(), AppError> {
        let raffle = self.get_raffle(raffle_id).await?;
        if raffle.owner_id != acting_user {
            return Err(AppError::Forbidden);
        }
        raffle.delete(&self.database_connection).await?;
        Ok(())
    }

    pub async fn sold_ticket_count(&self, raffle_id: Uuid) -> Result<u64, AppError> {
        Ok(Ticket::find()
            .filter(entity::ticket::Column::RaffleId.eq(raffle_id))
            .count(&self.database_connection)
            .await?)
    }
}
