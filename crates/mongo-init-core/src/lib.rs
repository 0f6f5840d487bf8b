pub mod bootstrap;
pub mod config;
pub mod error;
pub mod event;
pub mod principal;
pub mod session;
