use bytemuck::{Pod, Zeroable};

/// Per-instance quad data sent to the GPU.
/// Layout: [x, y, w, h, r, g, b, a]: top-left position, size and fill color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    /// World-space position of the top-left corner.
    pub position: [f32; 2],
    /// World-space size (width, height).
    pub size: [f32; 2],
    /// RGBA fill color, each channel in [0, 1].
    pub color: [f32; 4],
}

/// Per-vertex data for the unit quad. Corners span (0,0) to (1,1) so the
/// instance position addresses the top-left corner.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { position: [0.0, 0.0] },
    QuadVertex { position: [1.0, 0.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [0.0, 1.0] },
];

/// Index buffer for the unit quad (2 triangles).
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];
