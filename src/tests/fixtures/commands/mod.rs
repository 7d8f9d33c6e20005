pub mod add_manual_time_entry;
pub mod start_timer;
pub mod stop_timer;
