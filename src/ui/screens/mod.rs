pub mod checkout;
pub mod menu;
pub mod start;

pub use menu::MenuCursor;
