extern crate charcoal;
extern crate env_logger;

use charcoal::prelude::*;
use charcoal::scene::primitives;

fn quad_data() -> (Vec<Vertex>, Vec<u32>) {
    let vertices = vec![
        Vertex::new([-0.5, -0.5, 0.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
        Vertex::new([0.5, -0.5, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0]),
        Vertex::new([0.5, 0.5, 0.0], [0.0, 0.0, -1.0], [1.0, 1.0]),
        Vertex::new([-0.5, 0.5, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0]),
    ];

    (vertices, vec![0, 1, 2, 0, 2, 3])
}

#[test]
fn setup_then_draw() {
    let _ = env_logger::try_init();

    let (ctx, trace) = Context::headless_traced();
    let (vertices, indices) = quad_data();
    let mesh = Mesh::with_data(&ctx, vertices, indices, Vec::new());

    assert!(mesh.is_allocated());
    assert_eq!(mesh.draw(ShaderHandle(1)), Ok(2));

    let trace = trace.borrow();
    assert_eq!(trace.draws, [6]);
    assert_eq!(trace.shader_binds, [ShaderHandle(1)]);
    assert_eq!(trace.live.len(), 3);
}

#[test]
fn draw_before_setup_is_rejected() {
    let (ctx, trace) = Context::headless_traced();
    let mesh = Mesh::new(&ctx);

    assert_eq!(mesh.draw(ShaderHandle(1)), Err(Error::Uninitialized));
    assert!(trace.borrow().draws.is_empty());
}

#[test]
fn clear_then_draw_is_rejected() {
    let (ctx, trace) = Context::headless_traced();
    let (vertices, indices) = quad_data();
    let mut mesh = Mesh::with_data(&ctx, vertices, indices, Vec::new());

    mesh.clear();
    assert!(!mesh.is_allocated());
    assert!(mesh.draw(ShaderHandle(1)).is_err());

    let trace = trace.borrow();
    assert!(trace.draws.is_empty());
    assert!(trace.live.is_empty());
}

#[test]
fn empty_data_draw_is_rejected() {
    let (ctx, trace) = Context::headless_traced();
    let (vertices, indices) = quad_data();
    let mut mesh = Mesh::with_data(&ctx, vertices, indices, Vec::new());

    // Data gone but the allocation still live: the empty-data check fires.
    mesh.vertices.clear();
    mesh.indices.clear();

    assert_eq!(mesh.draw(ShaderHandle(1)), Err(Error::EmptyBuffers));
    assert!(trace.borrow().draws.is_empty());
}

#[test]
fn empty_setup_leaves_triple_unallocated() {
    let (ctx, trace) = Context::headless_traced();
    let mut mesh = Mesh::new(&ctx);

    assert_eq!(mesh.setup_buffers(), Err(Error::EmptyBuffers));
    assert!(!mesh.is_allocated());
    assert!(trace.borrow().live.is_empty());
}

#[test]
fn constructor_swallows_empty_data() {
    let (ctx, trace) = Context::headless_traced();
    let mesh = Mesh::with_data(&ctx, Vec::new(), Vec::new(), Vec::new());

    assert!(!mesh.is_allocated());
    assert!(trace.borrow().live.is_empty());
}

#[test]
fn take_transfers_ownership_of_the_triple() {
    let (ctx, trace) = Context::headless_traced();
    let (vertices, indices) = quad_data();
    let mut source = Mesh::with_data(&ctx, vertices, indices, Vec::new());

    let receiver = source.take();
    assert!(!source.is_allocated());
    assert!(receiver.is_allocated());

    // Dropping the drained source must release nothing.
    drop(source);
    {
        let trace = trace.borrow();
        assert!(trace.released.is_empty());
        assert_eq!(trace.dangling_releases, 0);
    }

    assert_eq!(receiver.draw(ShaderHandle(1)), Ok(2));

    drop(receiver);
    let trace = trace.borrow();
    assert_eq!(trace.released.len(), 3);
    assert_eq!(trace.dangling_releases, 0);
    assert!(trace.live.is_empty());
}

#[test]
fn drop_releases_buffers_before_the_vertex_array() {
    let (ctx, trace) = Context::headless_traced();
    let (vertices, indices) = quad_data();

    {
        let _mesh = Mesh::with_data(&ctx, vertices, indices, Vec::new());
    }

    // Allocation order is vao, vbo, ibo; release order must be reversed.
    let trace = trace.borrow();
    assert_eq!(trace.released, [3, 2, 1]);
}

#[test]
fn repeated_setup_rebuilds_the_triple() {
    let (ctx, trace) = Context::headless_traced();
    let (vertices, indices) = quad_data();
    let mut mesh = Mesh::with_data(&ctx, vertices, indices, Vec::new());

    mesh.setup_buffers().unwrap();
    assert!(mesh.is_allocated());

    let trace = trace.borrow();
    assert_eq!(trace.released, [3, 2, 1]);
    assert_eq!(trace.live, [4, 5, 6]);
}

#[test]
fn failed_buffer_allocation_rolls_setup_back() {
    let _ = env_logger::try_init();

    // The vertex array allocates, the first buffer does not.
    let (ctx, trace) = Context::headless_failing(1);
    let (vertices, indices) = quad_data();
    let mut mesh = Mesh::new(&ctx);
    mesh.vertices = vertices;
    mesh.indices = indices;

    assert!(matches!(mesh.setup_buffers(), Err(Error::Driver(_))));
    assert!(!mesh.is_allocated());

    let trace = trace.borrow();
    assert!(trace.live.is_empty());
    assert_eq!(trace.released, [1]);
    assert_eq!(trace.dangling_releases, 0);
}

#[test]
fn failed_setup_releases_the_partial_triple_in_order() {
    // The vertex array and the vertex buffer allocate, the element buffer
    // does not. The rollback must release both, buffer first.
    let (ctx, trace) = Context::headless_failing(2);
    let (vertices, indices) = quad_data();
    let mut mesh = Mesh::new(&ctx);
    mesh.vertices = vertices;
    mesh.indices = indices;

    assert!(matches!(mesh.setup_buffers(), Err(Error::Driver(_))));
    assert!(!mesh.is_allocated());
    assert!(matches!(mesh.draw(ShaderHandle(1)), Err(Error::Uninitialized)));

    let trace = trace.borrow();
    assert!(trace.live.is_empty());
    assert_eq!(trace.released, [2, 1]);
    assert_eq!(trace.dangling_releases, 0);
}

#[test]
fn unit_cube_issues_one_draw_of_all_indices() {
    let (ctx, trace) = Context::headless_traced();
    let cube = primitives::cube(&ctx).unwrap();

    assert_eq!(cube.draw(ShaderHandle(7)), Ok(12));

    let trace = trace.borrow();
    assert_eq!(trace.draws, [36]);
}

#[test]
fn textures_feed_sequential_units_and_kind_counted_uniforms() {
    let (ctx, trace) = Context::headless_traced();
    let (vertices, indices) = quad_data();

    let textures = vec![
        Texture::new(TextureHandle(10), TextureKind::Diffuse, "a.png"),
        Texture::new(TextureHandle(11), TextureKind::Specular, "b.png"),
        Texture::new(TextureHandle(12), TextureKind::Diffuse, "c.png"),
        Texture::new(TextureHandle(13), TextureKind::Reflection, "d.png"),
    ];

    let mesh = Mesh::with_data(&ctx, vertices, indices, textures);
    mesh.draw(ShaderHandle(1)).unwrap();

    let trace = trace.borrow();
    assert_eq!(
        trace.uniforms,
        [
            ("texture_diffuse1".to_owned(), 0),
            ("texture_specular1".to_owned(), 1),
            ("texture_diffuse2".to_owned(), 2),
            ("texture_reflection1".to_owned(), 3),
        ]
    );
    assert_eq!(
        trace.texture_binds,
        [
            (0, TextureHandle(10)),
            (1, TextureHandle(11)),
            (2, TextureHandle(12)),
            (3, TextureHandle(13)),
        ]
    );
    // The default active unit is restored once the draw is issued.
    assert_eq!(trace.active_texture_resets, 1);
}

#[test]
fn lost_context_fails_the_draw() {
    let ctx = Context::headless_lost();
    let (vertices, indices) = quad_data();
    let mesh = Mesh::with_data(&ctx, vertices, indices, Vec::new());

    assert!(mesh.is_allocated());
    assert_eq!(mesh.draw(ShaderHandle(1)), Err(Error::ContextLost));
}
