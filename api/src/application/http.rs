pub mod analysis;
pub mod capture;
pub mod health;
pub mod relay;
pub mod server;
