mod error;
mod submit;
mod validate;

pub use error::*;
pub use submit::*;
pub use validate::*;
