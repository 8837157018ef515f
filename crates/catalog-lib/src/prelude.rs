pub use crate::catalog::{Card, Summary};
pub use crate::classification::Classification;
pub use crate::error::Error;
pub use crate::models::{Manifest, SourceDescriptor, Version};
pub use crate::surface::{RenderSurface, Renderer};
