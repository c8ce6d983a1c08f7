pub mod cart;
pub mod catalog;
pub mod orders;
pub mod reviews;
pub mod session;
pub mod tracker;
pub mod vendors;
pub mod views;
