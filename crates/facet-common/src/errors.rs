use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("failed to read mesh {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported mesh format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("mesh parse error: {0}")]
    Parse(String),

    #[error("face references vertex {index} but mesh has {count} vertices")]
    InvalidIndex { index: u32, count: usize },

    #[error("mesh has no triangles: {0}")]
    Empty(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("invalid sphere grid {nx}x{ny}: both dimensions must be at least 1")]
    InvalidGrid { nx: u32, ny: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum FacetError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}
