pub mod app;
pub mod commands;
pub mod input;
pub mod menu;
pub mod render;
pub mod session;

pub use app::Cli;
pub use session::Session;
