pub mod command;
pub mod events;
pub mod session;
pub mod settings;
pub mod sys;
