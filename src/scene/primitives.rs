//! Ready-made meshes for the sandbox demos: quads, ground planes, cuboids
//! and icospheres. All builders fill positions, normals and texture
//! coordinates; colors default to white and bone data stays zeroed.

use std::collections::HashMap;

use crate::errors::*;
use crate::video::assets::mesh::Mesh;
use crate::video::assets::vertex::Vertex;
use crate::video::Context;

/// A unit quad in the XY plane, facing -Z.
pub fn quad(ctx: &Context) -> Result<Mesh> {
    let vertices = vec![
        Vertex::new([-0.5, -0.5, 0.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
        Vertex::new([0.5, -0.5, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0]),
        Vertex::new([0.5, 0.5, 0.0], [0.0, 0.0, -1.0], [1.0, 1.0]),
        Vertex::new([-0.5, 0.5, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0]),
    ];

    let indices = vec![0, 1, 2, 0, 2, 3];

    build(ctx, vertices, indices)
}

/// A ground plane in the XZ plane with the given half-extent, facing +Y.
pub fn plane(ctx: &Context, extent: f32) -> Result<Mesh> {
    let vertices = vec![
        Vertex::new([-extent, 0.0, -extent], [0.0, 1.0, 0.0], [0.0, 0.0]),
        Vertex::new([-extent, 0.0, extent], [0.0, 1.0, 0.0], [0.0, 1.0]),
        Vertex::new([extent, 0.0, extent], [0.0, 1.0, 0.0], [1.0, 1.0]),
        Vertex::new([extent, 0.0, -extent], [0.0, 1.0, 0.0], [1.0, 0.0]),
    ];

    let indices = vec![0, 1, 2, 0, 2, 3];

    build(ctx, vertices, indices)
}

/// A unit cube with per-face normals: 24 vertices, 36 indices.
pub fn cube(ctx: &Context) -> Result<Mesh> {
    cuboid(ctx, [1.0, 1.0, 1.0])
}

/// An axis-aligned cuboid of the given dimensions, centered at the origin.
pub fn cuboid(ctx: &Context, dimensions: [f32; 3]) -> Result<Mesh> {
    let x = dimensions[0] * 0.5;
    let y = dimensions[1] * 0.5;
    let z = dimensions[2] * 0.5;

    let texcoords = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let points = [
        [-x, -y, z],
        [x, -y, z],
        [x, y, z],
        [-x, y, z],
        [-x, -y, -z],
        [x, -y, -z],
        [x, y, -z],
        [-x, y, -z],
    ];

    let normals = [
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    // Four corners per face so that every face keeps its own flat normal.
    let faces = [
        [0, 1, 2, 3],
        [1, 5, 6, 2],
        [5, 4, 7, 6],
        [4, 0, 3, 7],
        [3, 2, 6, 7],
        [4, 5, 1, 0],
    ];

    let mut vertices = Vec::with_capacity(24);
    for (face, corners) in faces.iter().enumerate() {
        for (i, &corner) in corners.iter().enumerate() {
            vertices.push(Vertex::new(points[corner], normals[face], texcoords[i]));
        }
    }

    let mut indices = Vec::with_capacity(36);
    for face in 0..6u32 {
        let base = face * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    build(ctx, vertices, indices)
}

/// A unit sphere built by subdividing an icosahedron `iterations` times.
pub fn sphere(ctx: &Context, iterations: usize) -> Result<Mesh> {
    use std::f32::consts::FRAC_1_PI;

    fn normalize(v: [f32; 3]) -> Vertex {
        let l = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        let v = [v[0] / l, v[1] / l, v[2] / l];
        let uv = [v[0].asin() * FRAC_1_PI + 0.5, v[1].asin() * FRAC_1_PI + 0.5];

        Vertex::new(v, v, uv)
    }

    let t = (1.0f32 + 5.0f32.sqrt()) / 2.0f32;
    let mut vertices = vec![
        normalize([-1.0, t, 0.0]),
        normalize([1.0, t, 0.0]),
        normalize([-1.0, -t, 0.0]),
        normalize([1.0, -t, 0.0]),
        normalize([0.0, -1.0, t]),
        normalize([0.0, 1.0, t]),
        normalize([0.0, -1.0, -t]),
        normalize([0.0, 1.0, -t]),
        normalize([t, 0.0, -1.0]),
        normalize([t, 0.0, 1.0]),
        normalize([-t, 0.0, -1.0]),
        normalize([-t, 0.0, 1.0]),
    ];

    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    {
        let mut cache = HashMap::new();
        let mut mid = |p1: usize, p2: usize| {
            let k = if p1 < p2 { (p1, p2) } else { (p2, p1) };
            if let Some(&v) = cache.get(&k) {
                return v;
            }

            let p1 = vertices[p1];
            let p2 = vertices[p2];
            let mid = normalize([
                (p1.position[0] + p2.position[0]) * 0.5,
                (p1.position[1] + p2.position[1]) * 0.5,
                (p1.position[2] + p2.position[2]) * 0.5,
            ]);

            vertices.push(mid);
            cache.insert(k, vertices.len() - 1);
            vertices.len() - 1
        };

        let mut buf = Vec::new();
        for _ in 0..iterations {
            buf.clear();
            for face in &faces {
                let a = mid(face[0] as usize, face[1] as usize) as u32;
                let b = mid(face[1] as usize, face[2] as usize) as u32;
                let c = mid(face[2] as usize, face[0] as usize) as u32;

                buf.push([face[0], a, c]);
                buf.push([face[1], b, a]);
                buf.push([face[2], c, b]);
                buf.push([a, b, c]);
            }

            ::std::mem::swap(&mut faces, &mut buf);
        }
    }

    let indices = faces.iter().flat_map(|v| v.iter().cloned()).collect();

    build(ctx, vertices, indices)
}

fn build(ctx: &Context, vertices: Vec<Vertex>, indices: Vec<u32>) -> Result<Mesh> {
    let mut mesh = Mesh::new(ctx);
    mesh.vertices = vertices;
    mesh.indices = indices;
    mesh.setup_buffers()?;
    Ok(mesh)
}
