mod interfaces;
mod upload;

pub use interfaces::*;
pub use upload::*;
