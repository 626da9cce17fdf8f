use crate::picking::{linear_part, MeshNode, PickRoot};
use glam::{Mat4, Vec3};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch the model bytes over HTTP via the browser's fetch API.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch returned a non-Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} fetching {}", resp.status(), url);
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("array_buffer: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("reading body of {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Parse a glTF binary into the flattened pickable node list.
///
/// The default scene is walked depth-first, accumulating parent transforms,
/// and every mesh primitive becomes one `MeshNode` with its world transform
/// split into a draggable translation and a fixed linear part.
pub fn parse_model(bytes: &[u8]) -> anyhow::Result<PickRoot> {
    let (document, buffers, _images) = gltf::import_slice(bytes)?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| anyhow::anyhow!("model has no scene"))?;

    let mut nodes = Vec::new();
    for node in scene.nodes() {
        collect_meshes(&node, Mat4::IDENTITY, &buffers, &mut nodes);
    }
    if nodes.is_empty() {
        anyhow::bail!("model contains no mesh geometry");
    }
    Ok(PickRoot { nodes })
}

fn collect_meshes(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<MeshNode>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            let reader = primitive.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
            let Some(position_reader) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<Vec3> = position_reader.map(Vec3::from).collect();
            let indices: Vec<u32> = reader
                .read_indices()
                .map(|ix| ix.into_u32().collect())
                .unwrap_or_else(|| (0..positions.len() as u32).collect());
            let normals: Vec<Vec3> = reader
                .read_normals()
                .map(|it| it.map(Vec3::from).collect())
                .unwrap_or_else(|| averaged_normals(&positions, &indices));

            out.push(MeshNode {
                positions,
                normals,
                indices,
                position: world.w_axis.truncate(),
                linear: linear_part(world),
            });
        }
    }

    for child in node.children() {
        collect_meshes(&child, world, buffers, out);
    }
}

/// Per-vertex normals from area-weighted face normals, for primitives that
/// ship without a NORMAL attribute.
fn averaged_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[i1] - positions[i0]).cross(positions[i2] - positions[i0]);
        normals[i0] += face;
        normals[i1] += face;
        normals[i2] += face;
    }
    for n in &mut normals {
        *n = n.normalize_or_zero();
    }
    normals
}
