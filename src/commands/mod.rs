//! Command implementations

mod init;
mod serve;

pub use init::init;
pub use serve::serve;
