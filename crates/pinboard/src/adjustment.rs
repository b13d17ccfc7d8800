//! Scroll adjustment state.
//!
//! A container exposes one adjustment per axis as part of its scrollable
//! property surface. Adjustments play no part in the layout algorithm; the
//! hosting framework's scrollbars read and write them.

/// How a scrollable determines its size along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPolicy {
    /// Size from the minimum measurement.
    #[default]
    Minimum,
    /// Size from the natural measurement.
    Natural,
}

/// A scroll position within a range, mirroring the conventional
/// value/lower/upper/increment model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// Current position, between `lower` and `upper - page_size`.
    value: f64,
    /// Lower bound of the range.
    lower: f64,
    /// Upper bound of the range.
    upper: f64,
    /// Step for arrow increments.
    step_increment: f64,
    /// Step for page increments.
    page_increment: f64,
    /// Size of the visible page.
    page_size: f64,
}

impl Default for Adjustment {
    /// A zero-valued adjustment with an empty range.
    fn default() -> Self {
        Self {
            value: 0.0,
            lower: 0.0,
            upper: 0.0,
            step_increment: 0.0,
            page_increment: 0.0,
            page_size: 0.0,
        }
    }
}

impl Adjustment {
    /// Construct an adjustment with the given range and increments.
    pub fn new(
        value: f64,
        lower: f64,
        upper: f64,
        step_increment: f64,
        page_increment: f64,
        page_size: f64,
    ) -> Self {
        let mut adjustment = Self {
            value: 0.0,
            lower,
            upper,
            step_increment,
            page_increment,
            page_size,
        };
        adjustment.set_value(value);
        adjustment
    }

    /// Current position.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Lower bound of the range.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the range.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Arrow increment.
    pub fn step_increment(&self) -> f64 {
        self.step_increment
    }

    /// Page increment.
    pub fn page_increment(&self) -> f64 {
        self.page_increment
    }

    /// Visible page size.
    pub fn page_size(&self) -> f64 {
        self.page_size
    }

    /// Set the position, clamped so the visible page stays within the range.
    pub fn set_value(&mut self, value: f64) {
        let max = (self.upper - self.page_size).max(self.lower);
        self.value = value.clamp(self.lower, max);
    }

    /// Replace every field at once, re-clamping the position.
    pub fn configure(
        &mut self,
        value: f64,
        lower: f64,
        upper: f64,
        step_increment: f64,
        page_increment: f64,
        page_size: f64,
    ) {
        self.lower = lower;
        self.upper = upper;
        self.step_increment = step_increment;
        self.page_increment = page_increment;
        self.page_size = page_size;
        self.set_value(value);
    }
}
