//! Thin strided views over flat `f32` buffers.
//!
//! The original sampler reinterprets flat buffers as multi-rank C arrays via
//! pointer casts (e.g. `float (*)[ydim][xdim]`). Rust has no legal
//! equivalent, so these views hold a base slice and the per-axis extents and
//! compute the flat offset themselves. Bounds are checked with
//! `debug_assert!` (checked in debug builds, compiled out in release),
//! matching spec.md §9's "checked indexing in debug, unchecked in release".
//!
//! Minor (x) index is always last / fastest-varying, per the NEMO
//! convention spec.md §6 mandates.

/// A 2D view `data[d1][d0]`, x (`d0`) fastest-varying.
#[derive(Debug, Clone, Copy)]
pub struct View2<'a> {
    data: &'a [f32],
    d0: usize,
    d1: usize,
}

impl<'a> View2<'a> {
    pub fn new(data: &'a [f32], d0: usize, d1: usize) -> Self {
        debug_assert_eq!(data.len(), d0 * d1);
        View2 { data, d0, d1 }
    }

    #[inline]
    pub fn get(&self, i1: usize, i0: usize) -> f32 {
        debug_assert!(i1 < self.d1 && i0 < self.d0);
        let idx = i1 * self.d0 + i0;
        unsafe { *self.data.get_unchecked(idx) }
    }
}

/// A 3D view `data[d2][d1][d0]`, x (`d0`) fastest-varying.
#[derive(Debug, Clone, Copy)]
pub struct View3<'a> {
    data: &'a [f32],
    d0: usize,
    d1: usize,
    d2: usize,
}

impl<'a> View3<'a> {
    pub fn new(data: &'a [f32], d0: usize, d1: usize, d2: usize) -> Self {
        debug_assert_eq!(data.len(), d0 * d1 * d2);
        View3 { data, d0, d1, d2 }
    }

    #[inline]
    pub fn get(&self, i2: usize, i1: usize, i0: usize) -> f32 {
        debug_assert!(i2 < self.d2 && i1 < self.d1 && i0 < self.d0);
        let idx = (i2 * self.d1 + i1) * self.d0 + i0;
        unsafe { *self.data.get_unchecked(idx) }
    }

    /// The 2D layer at a fixed outermost index.
    #[inline]
    pub fn layer(&self, i2: usize) -> View2<'a> {
        debug_assert!(i2 < self.d2);
        let start = i2 * self.d1 * self.d0;
        View2::new(&self.data[start..start + self.d1 * self.d0], self.d0, self.d1)
    }
}

/// A 4D view `data[d3][d2][d1][d0]`, x (`d0`) fastest-varying.
#[derive(Debug, Clone, Copy)]
pub struct View4<'a> {
    data: &'a [f32],
    d0: usize,
    d1: usize,
    d2: usize,
    d3: usize,
}

impl<'a> View4<'a> {
    pub fn new(data: &'a [f32], d0: usize, d1: usize, d2: usize, d3: usize) -> Self {
        debug_assert_eq!(data.len(), d0 * d1 * d2 * d3);
        View4 { data, d0, d1, d2, d3 }
    }

    /// The 3D volume at a fixed outermost (time) index.
    #[inline]
    pub fn volume(&self, i3: usize) -> View3<'a> {
        debug_assert!(i3 < self.d3);
        let stride = self.d2 * self.d1 * self.d0;
        let start = i3 * stride;
        View3::new(&self.data[start..start + stride], self.d0, self.d1, self.d2)
    }
}
