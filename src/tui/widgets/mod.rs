pub mod header;
pub mod progress;
pub mod reading;
pub mod statusbar;
pub mod week;
