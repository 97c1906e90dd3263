//! Stateful sequence generator.

/// A sequence that starts at a seed and steps with a function.
///
/// The first [`Generator::advance`] returns the seed itself; every later
/// call applies the step function to the previous value. The iterator is
/// infinite.
pub struct Generator<T, F> {
    step: F,
    current: T,
    started: bool,
}

impl<T, F> Generator<T, F>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    /// Create a generator seeded with `initial`.
    pub fn new(step: F, initial: T) -> Self {
        Self {
            step,
            current: initial,
            started: false,
        }
    }

    /// Produce the next value of the sequence.
    pub fn advance(&mut self) -> T {
        if self.started {
            self.current = (self.step)(self.current.clone());
        } else {
            self.started = true;
        }
        self.current.clone()
    }
}

impl<T, F> Iterator for Generator<T, F>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.advance())
    }
}
