pub mod coordinator;
pub mod ports;
pub mod session;

pub use coordinator::*;
pub use ports::*;
pub use session::*;
