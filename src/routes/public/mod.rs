pub mod purchase;
pub mod raffle;
