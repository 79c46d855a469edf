use glam::Vec3;

/// An RGB color with 0-255 channels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Color { red, green, blue }
    }

    fn to_vec3(self) -> Vec3 {
        Vec3::new(self.red, self.green, self.blue)
    }

    fn from_vec3(v: Vec3) -> Self {
        Color::new(v.x, v.y, v.z)
    }
}

/// Fill for dead cells (#aaaadd).
pub const DEAD_COLOR: Color = Color::new(170.0, 170.0, 221.0);
/// Gradient endpoints for live cells, from the top-left corner outwards.
pub const LIFE_START_COLOR: Color = Color::new(246.0, 157.0, 60.0);
pub const LIFE_END_COLOR: Color = Color::new(63.0, 135.0, 166.0);

pub struct GradientManager {
    start_color: Color,
    end_color: Color,
}

impl GradientManager {
    pub fn new(start_color: Color, end_color: Color) -> GradientManager {
        GradientManager {
            start_color,
            end_color,
        }
    }

    /// Linear blend; 0.0 gives the start color, 1.0 the end color. Values
    /// outside [0, 1] extrapolate.
    pub fn interpolate_colors(&self, progress_percentage: f32) -> Color {
        Color::from_vec3(
            self.start_color
                .to_vec3()
                .lerp(self.end_color.to_vec3(), progress_percentage),
        )
    }

    /// Color of a live cell at (row, column): the gradient runs along the
    /// anti-diagonal, reaching the end color 100 cells away from the corner.
    pub fn cell_color(&self, row: usize, column: usize) -> Color {
        self.interpolate_colors((row + column) as f32 / 100.0)
    }
}

impl Default for GradientManager {
    fn default() -> Self {
        GradientManager::new(LIFE_START_COLOR, LIFE_END_COLOR)
    }
}
