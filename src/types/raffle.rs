use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::role::RaffleRole;

#[derive(Serialize, Deserialize, Debug)]
pub struct RRaffleCreate {
    pub title: String,
    pub description: Option<String>,
    pub prize: Option<String>,
    pub ticket_price_cents: i64,
    pub ticket_count: i32,
    pub draw_date: Option<DateTime<Utc>>,
}

/// Owner edit payload; absent fields keep their current value.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RRaffleUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub prize: Option<String>,
    pub ticket_price_cents: Option<i64>,
    pub ticket_count: Option<i32>,
    pub draw_date: Option<DateTime<Utc>>,
}

/// A raffle on the caller's dashboard, with the role they hold on it.
#[derive(Serialize, Debug)]
pub struct RaffleWithRole {
    #[serde(flatten)]
    pub raffle: entity::raffle::Model,
    pub my_role: RaffleRole,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RaffleCreateRes {
    pub id: Uuid,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TakenNumbersRes {
    pub numbers: Vec<i32>,
}
