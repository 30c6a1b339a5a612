//! CLI commands

mod build;
mod init;
mod validate;

pub use build::BuildCommand;
pub use init::InitCommand;
pub use validate::ValidateCommand;
