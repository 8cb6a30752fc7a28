use rand::{Rng, RngCore};

////////////////////////////////////////////////////////////////////////////////

/// Source of uniformly distributed integers driving a trial.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `lo..=hi`.
    ///
    /// The caller guarantees `lo <= hi`.
    fn uniform(&mut self, lo: usize, hi: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn uniform(&mut self, lo: usize, hi: usize) -> usize {
        self.gen_range(lo..=hi)
    }
}

////////////////////////////////////////////////////////////////////////////////
