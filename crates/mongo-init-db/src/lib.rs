pub mod mongo_config;
pub mod mongo_session;
pub mod verify;
