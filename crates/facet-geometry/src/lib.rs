//! Geometry for the facet examples: twisted triangle subdivision, the
//! watertight UV sphere, OBJ/PLY triangle meshes, matrix math, lighting
//! and camera helpers. Nothing in this crate touches the GPU.

pub mod lighting;
pub mod matrix;
pub mod mesh;
pub mod sphere;
pub mod trimesh;
pub mod twist;
pub mod vector;
pub mod view;

pub use lighting::{PhongMaterial, PointLight, MAX_LIGHTS};
pub use matrix::Mat4;
pub use mesh::{IndexedMesh, NormalVertex};
pub use sphere::{build_watertight_sphere, Sphere};
pub use trimesh::{Aabb, TriMesh};
pub use twist::{ColorVertex, TwistTriangle};
pub use view::ViewerCamera;
