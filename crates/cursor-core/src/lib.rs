pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod jitter;
pub mod presentation;
pub mod resolver;
pub mod spring;
pub mod tracker;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use jitter::*;
pub use presentation::*;
pub use resolver::*;
pub use spring::*;
pub use tracker::*;
