/// Capacity used when none is given.
pub const INITIAL_CAPACITY: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Slots reserved up front. Zero is raised to one so that doubling always grows.
    pub initial_capacity: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY,
        }
    }
}
