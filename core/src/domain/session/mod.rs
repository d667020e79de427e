pub mod entities;
pub mod ports;
pub mod services;
pub mod transitions;

pub use entities::*;
pub use ports::*;
