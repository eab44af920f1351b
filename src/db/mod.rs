pub mod invites;
pub mod memberships;
pub mod postgres_service;
pub mod raffles;
pub mod tickets;
pub mod users;
