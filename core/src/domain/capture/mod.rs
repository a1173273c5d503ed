pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;

/// Largest still image accepted for analysis, in bytes.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
