pub mod components;
pub mod navigation;
pub mod screens;
pub mod shell;
pub mod styles;

pub use components::TerminalGuard;
pub use navigation::{resolve_title, BackStack, Step};
pub use shell::TopBar;
