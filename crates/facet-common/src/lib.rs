pub mod color;
pub mod errors;

pub use color::Color;
pub use errors::{ConfigError, FacetError, GeometryError, MeshError};

pub type Result<T> = std::result::Result<T, FacetError>;
