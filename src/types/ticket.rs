use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TicketStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RTicketPurchase {
    pub number: i32,
    pub buyer_name: String,
    pub buyer_contact: String,
    pub receipt_url: Option<String>,
}

/// Admin-panel sales row: ticket joined with the seller's email, empty
/// seller meaning a public web sale.
#[derive(Serialize, Debug)]
pub struct SaleRow {
    pub ticket_id: Uuid,
    pub number: i32,
    pub buyer_name: String,
    pub buyer_contact: String,
    pub status: TicketStatus,
    pub receipt_url: Option<String>,
    pub seller_email: Option<String>,
    pub sold_at: DateTime<Utc>,
}
