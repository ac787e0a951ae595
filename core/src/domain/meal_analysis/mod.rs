pub mod allergens;
pub mod entities;
pub mod extraction;
pub mod image;
pub mod ports;
pub mod prompt;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
