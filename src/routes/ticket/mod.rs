pub mod mark_paid;
pub mod sales;
