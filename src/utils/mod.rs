pub mod text;

pub use text::{format_price, pad_to_width};
