mod backend;
mod errors;
mod local;

pub use backend::PublishBackend;
pub use errors::*;
pub use local::{LocalBackend, UPDATES_MANIFEST};
