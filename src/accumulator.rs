/// Number of fields a mapping segment can carry.
pub const FIELD_COUNT: usize = 5;

/// Running absolute values for the five mapping fields.
///
/// Field 0 (generated column) is scoped to one line and reset by
/// [`start_line`](Accumulator::start_line); fields 1-4 persist across the
/// whole document. A slot holds `None` until the first delta for that
/// field arrives, so a genuine first value of zero is never confused with
/// "no value yet".
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    slots: [Option<i64>; FIELD_COUNT],
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of a new generated line: the generated-column field
    /// starts over while the source-relative fields keep accumulating.
    pub fn start_line(&mut self) {
        self.slots[0] = None;
    }

    /// Folds one decoded delta into the slot for `field` and returns the
    /// resulting absolute value.
    ///
    /// The first delta seen for a slot establishes its absolute value
    /// directly; later deltas are added to it.
    ///
    /// # Panics
    ///
    /// Panics if `field >= FIELD_COUNT`.
    pub fn advance(&mut self, field: usize, delta: i64) -> i64 {
        let absolute = match self.slots[field] {
            None => delta,
            Some(prev) => prev + delta,
        };
        self.slots[field] = Some(absolute);
        absolute
    }
}
