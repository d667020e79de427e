pub mod analysis;
pub mod health;
pub mod sample;
pub mod server;
pub mod session;
