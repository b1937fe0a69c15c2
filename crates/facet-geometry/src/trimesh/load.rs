//! OBJ (`tobj`) and PLY (`ply-rs`) readers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use facet_common::MeshError;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

use super::TriMesh;
use crate::vector::Vec3;

fn chunk3(flat: &[f32]) -> Vec<Vec3> {
    flat.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect()
}

/// Read every model in an OBJ file into one mesh. Materials are ignored.
pub(super) fn read_obj(path: &Path) -> Result<TriMesh, MeshError> {
    let (models, _materials) =
        tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS).map_err(|e| match e {
            tobj::LoadError::OpenFileFailed | tobj::LoadError::ReadError => MeshError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other(e.to_string()),
            },
            _ => MeshError::Parse(format!("{}: {e}", path.display())),
        })?;

    let mut mesh = TriMesh::default();
    let mut texcoords: Vec<[f32; 2]> = Vec::new();
    let mut all_have_normals = true;
    let mut all_have_texcoords = true;

    for model in &models {
        let m = &model.mesh;
        let base = mesh.positions.len() as u32;
        let count = m.positions.len() / 3;

        mesh.positions.extend(chunk3(&m.positions));
        if m.normals.len() == m.positions.len() {
            mesh.normals.extend(chunk3(&m.normals));
        } else {
            all_have_normals = false;
        }
        if m.texcoords.len() / 2 == count && count > 0 {
            texcoords.extend(m.texcoords.chunks_exact(2).map(|t| [t[0], t[1]]));
        } else {
            all_have_texcoords = false;
        }
        mesh.indices.extend(m.indices.iter().map(|i| i + base));
    }

    if !all_have_normals {
        mesh.normals.clear();
    }
    if all_have_texcoords && !texcoords.is_empty() {
        mesh.texcoords = Some(texcoords);
    }
    Ok(mesh)
}

/// Numeric scalar property as `f32`.
fn scalar(prop: &Property) -> Option<f32> {
    Some(match *prop {
        Property::Char(v) => v as f32,
        Property::UChar(v) => v as f32,
        Property::Short(v) => v as f32,
        Property::UShort(v) => v as f32,
        Property::Int(v) => v as f32,
        Property::UInt(v) => v as f32,
        Property::Float(v) => v,
        Property::Double(v) => v as f32,
        _ => return None,
    })
}

/// Integer list property as vertex indices.
fn index_list(prop: &Property) -> Option<Vec<i64>> {
    Some(match prop {
        Property::ListChar(v) => v.iter().map(|&i| i as i64).collect(),
        Property::ListUChar(v) => v.iter().map(|&i| i as i64).collect(),
        Property::ListShort(v) => v.iter().map(|&i| i as i64).collect(),
        Property::ListUShort(v) => v.iter().map(|&i| i as i64).collect(),
        Property::ListInt(v) => v.iter().map(|&i| i as i64).collect(),
        Property::ListUInt(v) => v.iter().map(|&i| i as i64).collect(),
        _ => return None,
    })
}

fn vec3_of(element: &DefaultElement, keys: [&str; 3]) -> Option<Vec3> {
    Some([
        scalar(element.get(keys[0])?)?,
        scalar(element.get(keys[1])?)?,
        scalar(element.get(keys[2])?)?,
    ])
}

fn uv_of(element: &DefaultElement) -> Option<[f32; 2]> {
    [("u", "v"), ("s", "t"), ("texture_u", "texture_v")]
        .iter()
        .find_map(|(u, v)| Some([scalar(element.get(*u)?)?, scalar(element.get(*v)?)?]))
}

/// Read the `vertex` and `face` elements of a PLY file (ASCII or binary).
pub(super) fn read_ply(path: &Path) -> Result<TriMesh, MeshError> {
    let file = File::open(path).map_err(|source| MeshError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let ply = Parser::<DefaultElement>::new()
        .read_ply(&mut reader)
        .map_err(|e| MeshError::Parse(format!("{}: {e}", path.display())))?;

    let vertices = ply
        .payload
        .get("vertex")
        .ok_or_else(|| MeshError::Parse(format!("{}: no vertex element", path.display())))?;

    let mut mesh = TriMesh::default();
    let mut normals = Vec::with_capacity(vertices.len());
    let mut texcoords = Vec::with_capacity(vertices.len());

    for (i, vertex) in vertices.iter().enumerate() {
        let position = vec3_of(vertex, ["x", "y", "z"]).ok_or_else(|| {
            MeshError::Parse(format!("{}: vertex {i} has no x/y/z", path.display()))
        })?;
        mesh.positions.push(position);
        if let Some(n) = vec3_of(vertex, ["nx", "ny", "nz"]) {
            normals.push(n);
        }
        if let Some(uv) = uv_of(vertex) {
            texcoords.push(uv);
        }
    }

    if normals.len() == mesh.positions.len() {
        mesh.normals = normals;
    }
    if !texcoords.is_empty() && texcoords.len() == mesh.positions.len() {
        mesh.texcoords = Some(texcoords);
    }

    let count = mesh.positions.len();
    for face in ply.payload.get("face").into_iter().flatten() {
        let Some(list) = face
            .get("vertex_indices")
            .or_else(|| face.get("vertex_index"))
            .and_then(index_list)
        else {
            return Err(MeshError::Parse(format!(
                "{}: face without vertex_indices",
                path.display()
            )));
        };

        let mut ids = Vec::with_capacity(list.len());
        for i in list {
            let index = u32::try_from(i).map_err(|_| {
                MeshError::Parse(format!("{}: vertex index {i} out of range", path.display()))
            })?;
            if index as usize >= count {
                return Err(MeshError::InvalidIndex { index, count });
            }
            ids.push(index);
        }
        for k in 1..ids.len().saturating_sub(1) {
            mesh.indices.extend_from_slice(&[ids[0], ids[k], ids[k + 1]]);
        }
    }

    Ok(mesh)
}
