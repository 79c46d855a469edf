/// Input event types the engine understands.
/// Carries no game-specific meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A click/tap at an offset inside the canvas, in CSS pixels, together
    /// with the canvas' displayed size at the time of the event.
    PointerDown {
        x: f32,
        y: f32,
        client_width: f32,
        client_height: f32,
    },
}

/// Queue of input events.
/// DOM listeners push into it; the frame loop drains it once per frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Maps pointer positions on a (possibly CSS-scaled) canvas to cells of a
/// `columns` x `rows` grid drawn with `cell_size` world units per cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMapper {
    pub columns: usize,
    pub rows: usize,
    pub cell_size: f32,
}

impl GridMapper {
    pub fn new(columns: usize, rows: usize, cell_size: f32) -> Self {
        Self {
            columns,
            rows,
            cell_size,
        }
    }

    /// Backing-store size of the board in world units.
    pub fn board_size(&self) -> (f32, f32) {
        (
            self.columns as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }

    /// Translate a pointer offset to `(column, row)`.
    /// Returns `None` for a zero-sized canvas or a point outside the board.
    pub fn cell_at(&self, x: f32, y: f32, client_width: f32, client_height: f32) -> Option<(usize, usize)> {
        if client_width <= 0.0 || client_height <= 0.0 || self.cell_size <= 0.0 {
            return None;
        }
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (board_width, board_height) = self.board_size();
        let ratio_x = board_width / client_width;
        let ratio_y = board_height / client_height;

        let column = (x * ratio_x / self.cell_size) as usize;
        let row = (y * ratio_y / self.cell_size) as usize;

        if column < self.columns && row < self.rows {
            Some((column, row))
        } else {
            None
        }
    }

    pub fn map_event(&self, event: &InputEvent) -> Option<(usize, usize)> {
        match *event {
            InputEvent::PointerDown {
                x,
                y,
                client_width,
                client_height,
            } => self.cell_at(x, y, client_width, client_height),
        }
    }
}
