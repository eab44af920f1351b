pub mod error;
pub mod raffle;
pub mod response;
pub mod role;
pub mod team;
pub mod ticket;
pub mod user;
