/// A warm-start cursor: the host-cell indices from the previous query on a
/// given grid, threaded through by the caller to accelerate convergence of
/// the next one.
///
/// The cursor is advisory only, every locator re-converges from whatever
/// indices it is given, so a stale or zeroed cursor only costs a few extra
/// iterations, never correctness (spec.md §8, property 3: "warm-start
/// irrelevance"). All index arithmetic uses 32-bit signed integers, matching
/// the original source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub xi: i32,
    pub yi: i32,
    pub zi: i32,
    pub ti: i32,
}

impl Cursor {
    /// A cursor with all indices at the origin, the "cold start".
    pub const fn origin() -> Self {
        Cursor {
            xi: 0,
            yi: 0,
            zi: 0,
            ti: 0,
        }
    }
}
