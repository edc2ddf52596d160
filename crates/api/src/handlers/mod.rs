pub mod defects;
pub mod health;
pub mod procedures;
