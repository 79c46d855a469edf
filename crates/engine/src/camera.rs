use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Orthographic camera for 2D boards laid out in pixel space.
/// World origin is the top-left corner of the board, Y grows downwards.
pub struct Camera2D {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    /// World position shown at the top-left corner of the viewport.
    pub origin: Vec2,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub projection: [[f32; 4]; 4],
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            origin: Vec2::ZERO,
        }
    }

    /// Build an orthographic projection matrix.
    /// `origin` maps to clip (-1, 1), `origin + (width, height)` to (1, -1).
    pub fn projection_matrix(&self) -> Mat4 {
        let left = self.origin.x;
        let right = self.origin.x + self.width;
        let top = self.origin.y;
        let bottom = self.origin.y + self.height;
        Mat4::orthographic_rh(left, right, bottom, top, 0.0, 1.0)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            projection: self.projection_matrix().to_cols_array_2d(),
        }
    }

    /// Fit a `board_width` x `board_height` board into the viewport, keeping
    /// the board's aspect ratio and centering it along the loose axis.
    pub fn fit(&mut self, viewport_width: f32, viewport_height: f32, board_width: f32, board_height: f32) {
        if viewport_width <= 0.0 || viewport_height <= 0.0 || board_width <= 0.0 || board_height <= 0.0 {
            return;
        }
        let horiz_ratio = viewport_width / board_width;
        let vert_ratio = viewport_height / board_height;
        let scale = horiz_ratio.min(vert_ratio);
        self.width = viewport_width / scale;
        self.height = viewport_height / scale;
        self.origin = Vec2::new(
            (board_width - self.width) * 0.5,
            (board_height - self.height) * 0.5,
        );
    }
}
