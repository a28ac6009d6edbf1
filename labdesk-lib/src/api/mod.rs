//! REST API operations

mod crud;
mod functions;
mod resource;

pub use crud::*;
pub use functions::*;
pub use resource::*;
