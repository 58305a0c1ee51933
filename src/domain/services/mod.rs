pub mod access;
pub mod defaults;
pub mod reports;
pub mod summary;
