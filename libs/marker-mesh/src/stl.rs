//! STL export.
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use tracing::info;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Text at the start of binary headers.
const HEADER_TEXT: &[u8] = b"binary STL written by marker-mesh";

/// STL flavour to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    /// Human-readable text STL.
    #[default]
    Ascii,
    /// Compact little-endian binary STL.
    Binary,
}

/// Unit normal of a triangle, zero when degenerate.
fn facet_normal([a, b, c]: [DVec3; 3]) -> DVec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// Write `mesh` as ASCII STL named `name`.
///
/// # Errors
///
/// Returns `EmptyMesh` for a mesh without triangles, or the writer's error.
pub fn write_stl_ascii<W: Write>(mesh: &Mesh, name: &str, mut writer: W) -> MeshResult<()> {
    if mesh.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    writeln!(writer, "solid {name}")?;
    for corners in mesh.triangle_positions() {
        let n = facet_normal(corners);
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in corners {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {name}")?;
    writer.flush()?;
    Ok(())
}

/// Write `mesh` as binary STL.
///
/// # Errors
///
/// Returns `EmptyMesh` for a mesh without triangles, or the writer's error.
pub fn write_stl_binary<W: Write>(mesh: &Mesh, mut writer: W) -> MeshResult<()> {
    if mesh.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    let mut header = [b' '; HEADER_SIZE];
    header[..HEADER_TEXT.len()].copy_from_slice(HEADER_TEXT);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    let count = mesh.triangle_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for corners in mesh.triangle_positions() {
        write_vec3(&mut writer, facet_normal(corners))?;
        for v in corners {
            write_vec3(&mut writer, v)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn write_vec3<W: Write>(writer: &mut W, v: DVec3) -> MeshResult<()> {
    for component in v.to_array() {
        writer.write_all(&(component as f32).to_le_bytes())?;
    }
    Ok(())
}

/// Save `mesh` to `path` in the given format.
///
/// The ASCII solid is named after the file stem.
///
/// # Example
///
/// ```no_run
/// use glam::DVec3;
/// use marker_mesh::{save_stl, Mesh, Solid, StlFormat};
///
/// let cube = Solid::cuboid(DVec3::ZERO, DVec3::ONE).unwrap();
/// save_stl(&Mesh::from_solid(&cube), "cube.stl", StlFormat::Binary).unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(mesh: &Mesh, path: P, format: StlFormat) -> MeshResult<()> {
    let path = path.as_ref();
    if mesh.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    let writer = BufWriter::new(File::create(path)?);
    match format {
        StlFormat::Ascii => {
            let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("mesh");
            write_stl_ascii(mesh, name, writer)?;
        }
        StlFormat::Binary => write_stl_binary(mesh, writer)?,
    }
    info!(
        path = %path.display(),
        triangles = mesh.triangle_count(),
        ?format,
        "wrote STL"
    );
    Ok(())
}
