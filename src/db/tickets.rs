use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::role::RaffleRole;
use crate::types::ticket::{RTicketPurchase, SaleRow};
use chrono::Utc;
use entity::sea_orm_active_enums::TicketStatus;
use entity::ticket::{ActiveModel as TicketActive, Entity as Ticket, Model as TicketModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    SqlErr,
};
use uuid::Uuid;

impl PostgresService {
    /// Sell a number. Public buyers carry no seller; a valid team
    /// member's token on the request records them as the seller. The
    /// unique (raffle, number) index decides who wins a race on the same
    /// number.
    pub async fn purchase_ticket(
        &self,
        raffle_id: Uuid,
        payload: RTicketPurchase,
        buyer_identity: Option<Uuid>,
    ) -> Result<TicketModel, AppError> {
        let raffle = self.get_raffle(raffle_id).await?;
        if payload.number < 1 || payload.number > raffle.ticket_count {
            return Err(AppError::Validation(format!(
                "number must be between 1 and {}",
                raffle.ticket_count
            )));
        }
        if payload.buyer_name.trim().is_empty() {
            return Err(AppError::Validation("buyer name must not be empty".into()));
        }
        if payload.buyer_contact.trim().is_empty() {
            return Err(AppError::Validation(
                "buyer contact must not be empty".into(),
            ));
        }

        // Only owner/team tokens count as sellers; any other identity is
        // an ordinary web sale.
        let seller_id = match buyer_identity {
            Some(user_id) => {
                let role = self.resolve_role(&raffle, user_id).await?;
                role.is_member().then_some(user_id)
            }
            None => None,
        };

        let model = TicketActive {
            id: Set(crate::utils::token::new_id()),
            raffle_id: Set(raffle_id),
            number: Set(payload.number),
            buyer_name: Set(payload.buyer_name.trim().to_string()),
            buyer_contact: Set(payload.buyer_contact.trim().to_string()),
            seller_id: Set(seller_id),
            status: Set(TicketStatus::Pending),
            receipt_url: Set(payload.receipt_url),
            created_at: Set(Utc::now()),
        };
        match model.insert(&self.database_connection).await {
            Ok(ticket) => Ok(ticket),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::AlreadyExists),
                _ => Err(err.into()),
            },
        }
    }

    /// Numbers already sold, for the public grid.
    pub async fn taken_numbers(&self, raffle_id: Uuid) -> Result<Vec<i32>, AppError> {
        self.get_raffle(raffle_id).await?;
        Ok(Ticket::find()
            .select_only()
            .column(entity::ticket::Column::Number)
            .filter(entity::ticket::Column::RaffleId.eq(raffle_id))
            .order_by_asc(entity::ticket::Column::Number)
            .into_tuple()
            .all(&self.database_connection)
            .await?)
    }

    /// Sales table for the admin panel, seller emails joined in.
    /// Owner/manager see everything; a vendor only their own sales.
    pub async fn list_sales(
        &self,
        raffle_id: Uuid,
        acting_user: Uuid,
    ) -> Result<Vec<SaleRow>, AppError> {
        let raffle = self.get_raffle(raffle_id).await?;
        let actor = self.resolve_role(&raffle, acting_user).await?;
        if !actor.is_member() {
            return Err(AppError::Forbidden);
        }

        let mut finder = Ticket::find()
            .filter(entity::ticket::Column::RaffleId.eq(raffle_id))
            .order_by_asc(entity::ticket::Column::Number);
        if actor == RaffleRole::Vendor {
            finder = finder.filter(entity::ticket::Column::SellerId.eq(acting_user));
        }

        let rows = finder
            .find_also_related(entity::user::Entity)
            .all(&self.database_connection)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(ticket, seller)| SaleRow {
                ticket_id: ticket.id,
                number: ticket.number,
                buyer_name: ticket.buyer_name,
                buyer_contact: ticket.buyer_contact,
                status: ticket.status,
                receipt_url: ticket.receipt_url,
                seller_email: seller.map(|u| u.email),
                sold_at: ticket.created_at,
            })
            .collect())
    }

    /// Confirm payment. Owner/manager for any ticket; a vendor only for
    /// tickets they sold themselves.
    pub async fn mark_ticket_paid(
        &self,
        ticket_id: Uuid,
        acting_user: Uuid,
    ) -> Result<TicketModel, AppError> {
        let ticket = Ticket::find_by_id(ticket_id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Ticket not found".into()))?;
        let raffle = self.get_raffle(ticket.raffle_id).await?;
        let actor = self.resolve_role(&raffle, acting_user).await?;

        let own_sale = ticket.seller_id == Some(acting_user);
        if !(actor.can_manage_sales() || (actor == RaffleRole::Vendor && own_sale)) {
            return Err(AppError::Forbidden);
        }
        if ticket.status == TicketStatus::Paid {
            return Err(AppError::NoOp);
        }

        let mut am: TicketActive = ticket.into();
        am.status = Set(TicketStatus::Paid);
        Ok(am.update(&self.database_connection).await?)
    }
}
