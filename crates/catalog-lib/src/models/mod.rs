pub mod source_descriptor;
pub use source_descriptor::*;

pub mod manifest;
pub use manifest::*;

pub mod version;
pub use version::*;
