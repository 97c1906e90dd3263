//! Map-then-fold combinator.

/// Maps each input and folds the results left to right from an initial value.
pub struct MapReducer<T, M, R> {
    mapper: M,
    reducer: R,
    initial: T,
}

impl<T, M, R> MapReducer<T, M, R>
where
    T: Clone,
    M: Fn(T) -> T,
    R: Fn(T, T) -> T,
{
    /// Create a map-reducer.
    pub fn new(mapper: M, reducer: R, initial: T) -> Self {
        Self {
            mapper,
            reducer,
            initial,
        }
    }

    /// `reducer(...reducer(reducer(initial, mapper(v0)), mapper(v1))..., mapper(vn))`.
    ///
    /// An empty slice gives back the initial value.
    pub fn apply(&self, values: &[T]) -> T {
        values.iter().cloned().fold(self.initial.clone(), |acc, v| {
            (self.reducer)(acc, (self.mapper)(v))
        })
    }
}
