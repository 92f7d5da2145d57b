pub mod geometry;
pub mod health;
pub mod input;
pub mod result;
pub mod session;
pub mod store;
pub mod view;
