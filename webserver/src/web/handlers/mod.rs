//! Route handlers

pub mod health;
pub mod performers;
pub mod users;
