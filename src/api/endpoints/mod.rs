pub mod conditions;
pub mod health;
pub mod predict;
pub mod symptoms;
