//! Frame-level decisions about showing and repainting the cursor.

/// Visibility of the cursor for the current viewport media query.
#[derive(Clone, Copy, Debug)]
pub struct ViewportGate {
    visible: bool,
}

impl ViewportGate {
    pub fn new(matches: bool) -> Self {
        Self { visible: matches }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed the latest media query result; returns the new visibility only
    /// when it flipped.
    pub fn update(&mut self, matches: bool) -> Option<bool> {
        if matches == self.visible {
            return None;
        }
        self.visible = matches;
        Some(matches)
    }
}

/// Skips style writes once the cursor has come to rest.
///
/// `T` is whatever else feeds the styles (the site theme); a change in it
/// forces one more paint even when the engine is settled.
#[derive(Clone, Copy, Debug)]
pub struct PaintGate<T> {
    last_input: Option<T>,
    painted_at_rest: bool,
}

impl<T> Default for PaintGate<T> {
    fn default() -> Self {
        Self {
            last_input: None,
            painted_at_rest: false,
        }
    }
}

impl<T: PartialEq + Copy> PaintGate<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this frame must be written. A settled frame is painted once,
    /// then skipped until something moves or `input` changes.
    pub fn needs_paint(&mut self, settled: bool, input: T) -> bool {
        let input_changed = self.last_input != Some(input);
        self.last_input = Some(input);
        if settled && self.painted_at_rest && !input_changed {
            return false;
        }
        self.painted_at_rest = settled;
        true
    }

    /// Forget what was painted, e.g. after the element was hidden.
    pub fn invalidate(&mut self) {
        self.painted_at_rest = false;
        self.last_input = None;
    }
}
