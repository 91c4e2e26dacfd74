/// Cursor tracking for mouse-look.
///
/// Starts in `NotInitialized`; the first sample moves it to `Tracking` and it
/// never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MouseTracker {
    #[default]
    NotInitialized,
    Tracking { last_x: f32, last_y: f32 },
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::NotInitialized
    }

    /// Record a cursor sample and return `(x_offset, y_offset)`.
    ///
    /// The Y offset is inverted: screen Y grows downward, pitch grows upward.
    /// The first sample only seeds the position and yields `(0.0, 0.0)`.
    pub fn sample(&mut self, x: f32, y: f32) -> (f32, f32) {
        let (last_x, last_y) = match *self {
            Self::NotInitialized => (x, y),
            Self::Tracking { last_x, last_y } => (last_x, last_y),
        };

        *self = Self::Tracking { last_x: x, last_y: y };

        (x - last_x, last_y - y)
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking { .. })
    }

    pub fn last_position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::NotInitialized => None,
            Self::Tracking { last_x, last_y } => Some((last_x, last_y)),
        }
    }
}
