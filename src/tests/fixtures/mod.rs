pub mod clock;
pub mod commands;
pub mod events;
pub mod state;
