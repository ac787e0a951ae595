pub mod authentication;
pub mod common;
pub mod crypto;
pub mod health;
pub mod meal_analysis;
pub mod user;
