pub mod errors;
pub mod path;

pub use errors::*;
pub use path::*;
