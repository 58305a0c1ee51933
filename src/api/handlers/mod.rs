pub mod auth;
pub mod category;
pub mod client;
pub mod company;
pub mod dashboard;
pub mod health;
pub mod invoice;
pub mod member;
pub mod report;
pub mod transaction;
