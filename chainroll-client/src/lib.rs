pub mod error;
pub mod instruction;
pub mod layout;
pub mod provision;
pub mod state;
pub mod store;
pub mod submit;

pub use {error::ClientError, store::ProgramRef};
