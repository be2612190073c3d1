/// Receiver for programmatic scroll deltas.
pub trait ScrollScope {
    /// Scrolls by `delta` pixels and returns how much was consumed.
    ///
    /// Positive deltas move towards the end of the content. At an edge the
    /// returned value is smaller in magnitude than `delta`.
    fn scroll_by(&mut self, delta: f32) -> f32;
}

impl<T: ScrollScope + ?Sized> ScrollScope for &mut T {
    fn scroll_by(&mut self, delta: f32) -> f32 {
        (**self).scroll_by(delta)
    }
}
