pub mod analyze_meal;
pub mod health_check;
