//! Containing-block records and the arena that recycles them within a pass.

/// One containing block: origin, available size, percentage basis and the
/// running flow cursor.
///
/// Only the cursor (`cx`, `cy`, `lh`) changes after a record is pushed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constraints {
    pub ox: f64,
    pub oy: f64,
    pub aw: f64,
    pub ah: f64,
    pub pbw: f64,
    pub pbh: f64,
    pub cx: f64,
    pub cy: f64,
    /// Height of the inline line currently open at the cursor, 0 if none.
    pub lh: f64,
}

impl Constraints {
    pub fn new(ox: f64, oy: f64, aw: f64, ah: f64) -> Self {
        Self {
            ox,
            oy,
            aw,
            ah,
            pbw: aw,
            pbh: ah,
            cx: ox,
            cy: oy,
            lh: 0.0,
        }
    }

    /// Moves the cursor below any open inline line, back to the left edge.
    pub fn close_line(&mut self) {
        self.cy += self.lh;
        self.cx = self.ox;
        self.lh = 0.0;
    }

    /// Vertical distance the flow has covered, including an open line.
    pub fn content_extent(&self) -> f64 {
        self.cy + self.lh - self.oy
    }
}

/// Initial containing block of a pass. Unset fields default like
/// [`Constraints::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputConstraints {
    pub aw: f64,
    pub ah: f64,
    pub ox: Option<f64>,
    pub oy: Option<f64>,
    pub pbw: Option<f64>,
    pub pbh: Option<f64>,
    pub cx: Option<f64>,
    pub cy: Option<f64>,
}

impl InputConstraints {
    pub fn new(aw: f64, ah: f64) -> Self {
        Self {
            aw,
            ah,
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, ox: f64, oy: f64) -> Self {
        self.ox = Some(ox);
        self.oy = Some(oy);
        self
    }
}

impl From<InputConstraints> for Constraints {
    fn from(input: InputConstraints) -> Self {
        let ox = input.ox.unwrap_or(0.0);
        let oy = input.oy.unwrap_or(0.0);
        Constraints {
            ox,
            oy,
            aw: input.aw,
            ah: input.ah,
            pbw: input.pbw.unwrap_or(input.aw),
            pbh: input.pbh.unwrap_or(input.ah),
            cx: input.cx.unwrap_or(ox),
            cy: input.cy.unwrap_or(oy),
            lh: 0.0,
        }
    }
}

/// Stack-shaped arena of [`Constraints`].
///
/// Slots below the cursor are in use; slots above it are kept for the next
/// acquisition. Memory is bounded by the deepest nesting seen in the pass and
/// is only returned by [`ConstraintPool::reset`] at a pass boundary.
#[derive(Debug, Default)]
pub struct ConstraintPool {
    records: Vec<Constraints>,
    cursor: usize,
}

impl ConstraintPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` in the next slot and returns its index.
    pub fn acquire(&mut self, record: Constraints) -> usize {
        let slot = self.cursor;
        match self.records.get_mut(slot) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        self.cursor += 1;
        slot
    }

    /// Gives back the innermost slot, returning its final state.
    pub fn release(&mut self) -> Option<Constraints> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.records.get(self.cursor).copied()
    }

    /// Drops every record. Called once the outermost node of a pass ends.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.records.clear();
    }

    pub fn top(&self) -> Option<&Constraints> {
        self.cursor.checked_sub(1).and_then(|i| self.records.get(i))
    }

    pub fn top_mut(&mut self) -> Option<&mut Constraints> {
        self.cursor.checked_sub(1).and_then(|i| self.records.get_mut(i))
    }

    /// Number of slots in use.
    pub fn len(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Number of records allocated, in use or not.
    pub fn allocated(&self) -> usize {
        self.records.len()
    }
}
