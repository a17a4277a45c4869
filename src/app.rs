pub mod bootstrap;
pub mod controller;
pub mod flow;
pub mod state;

pub use flow::{FlowEvent, FlowView, OrderFlow, SubscriptionId, Transition};
pub use state::{Order, OrderTotals};
