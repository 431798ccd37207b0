pub mod command_handlers;
pub mod dispatcher;
pub mod error;
pub mod main_types;
