//! Triangle strip mesh generation for stroked lines.

/// Floats per stroke vertex: x, y, u, v, alpha.
pub const STROKE_VERTEX_FLOATS: usize = 5;

/// Generate triangle strip vertices for one straight segment.
///
/// `half_width` is the distance from the center line to each strip edge.
/// Both ends get a cap extending `half_width` past the endpoint so a stroke
/// reads as round-ish once the host fades alpha toward `v = 0`.
/// Output: `[x, y, u, v, alpha]` per vertex, four pairs in total. `u` runs
/// across the stroke (0..1), `v` is 0 on the caps and 1 along the body.
pub fn build_segment_strip(start: [f32; 2], end: [f32; 2], half_width: f32, alpha: f32) -> Vec<f32> {
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let len = (dx * dx + dy * dy).sqrt().max(0.001);
    let d = [dx / len, dy / len];
    let perp = [-d[1], d[0]];

    let mut verts = Vec::with_capacity(8 * STROKE_VERTEX_FLOATS);
    let mut push_pair = |center: [f32; 2], v: f32| {
        verts.extend_from_slice(&[
            center[0] + perp[0] * half_width,
            center[1] + perp[1] * half_width,
            0.0,
            v,
            alpha,
        ]);
        verts.extend_from_slice(&[
            center[0] - perp[0] * half_width,
            center[1] - perp[1] * half_width,
            1.0,
            v,
            alpha,
        ]);
    };

    push_pair([start[0] - d[0] * half_width, start[1] - d[1] * half_width], 0.0);
    push_pair(start, 1.0);
    push_pair(end, 1.0);
    push_pair([end[0] + d[0] * half_width, end[1] + d[1] * half_width], 0.0);

    verts
}

/// Convert triangle strip vertices to a triangle list (for WebGL/WebGPU).
pub fn strip_to_triangles(strip_verts: &[f32], floats_per_vert: usize) -> Vec<f32> {
    let num_verts = strip_verts.len() / floats_per_vert;
    if num_verts < 3 {
        return Vec::new();
    }
    let num_tris = num_verts - 2;
    let mut out = Vec::with_capacity(num_tris * 3 * floats_per_vert);
    for i in 0..num_tris {
        // Alternate winding so every triangle faces the same way.
        let (a, b, c) = if i % 2 == 0 {
            (i, i + 1, i + 2)
        } else {
            (i + 1, i, i + 2)
        };
        for idx in [a, b, c] {
            let base = idx * floats_per_vert;
            out.extend_from_slice(&strip_verts[base..base + floats_per_vert]);
        }
    }
    out
}
