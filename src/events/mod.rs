pub mod delegate;
pub mod hover;
pub mod pointer;

pub use hover::{wire_hover_handlers, ElementRegistry, SharedRegistry};
pub use pointer::wire_pointer_handlers;
