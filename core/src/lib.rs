#![no_std]

extern crate alloc;

pub use adjacency::*;
pub use board::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use placer::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod adjacency;
mod board;
mod config;
mod error;
mod event;
mod placer;
mod reveal;
mod session;
mod types;
