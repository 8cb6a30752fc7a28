use crate::{random::RandomSource, trial::run_trial, Error, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

////////////////////////////////////////////////////////////////////////////////

const CONFIDENCE_95: f64 = 1.96;

/// Percolation thresholds observed over independent trials, together with
/// their summary statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` independent trials on `size`-by-`size` grids, one after
    /// another, all drawing from `source`.
    ///
    /// # Errors
    ///
    /// [`Error::GridSize`] if `size` is zero and [`Error::TrialCount`] if
    /// `trials` is zero. Both are checked before any trial runs.
    pub fn new<S: RandomSource + ?Sized>(
        size: usize,
        trials: usize,
        source: &mut S,
    ) -> Result<Self> {
        validate(size, trials)?;
        log::debug!("running {trials} trials on a {size}x{size} grid");

        let mut thresholds = Vec::with_capacity(trials);
        for _ in 0..trials {
            thresholds.push(run_trial(size, source)?);
        }

        Self::from_thresholds(thresholds).map(Self::logged)
    }

    /// Same as [`new`](PercolationStats::new), but trials run on the rayon
    /// thread pool. Trial `i` draws only from `make_source(i)` and its
    /// threshold ends up at position `i` of [`thresholds`].
    ///
    /// [`thresholds`]: PercolationStats::thresholds
    #[cfg(feature = "parallel")]
    pub fn new_parallel<F, S>(size: usize, trials: usize, make_source: F) -> Result<Self>
    where
        F: Fn(usize) -> S + Sync,
        S: RandomSource,
    {
        validate(size, trials)?;
        log::debug!("running {trials} parallel trials on a {size}x{size} grid");

        let thresholds = (0..trials)
            .into_par_iter()
            .map(|trial| run_trial(size, &mut make_source(trial)))
            .collect::<Result<Vec<_>>>()?;

        Self::from_thresholds(thresholds).map(Self::logged)
    }

    /// Wraps already collected thresholds.
    ///
    /// # Errors
    ///
    /// [`Error::TrialCount`] if `thresholds` is empty.
    pub fn from_thresholds(thresholds: Vec<f64>) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(Error::TrialCount);
        }
        Ok(Self { thresholds })
    }

    /// Returns thresholds in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Returns the number of trials.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Sample mean of the thresholds.
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.trials() as f64
    }

    /// Sample standard deviation of the thresholds. NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let squares = self
            .thresholds
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>();

        (squares / (self.trials() - 1) as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }

    fn logged(self) -> Self {
        log::debug!(
            "mean {}, stddev {} over {} trials",
            self.mean(),
            self.stddev(),
            self.trials()
        );
        self
    }
}

fn validate(size: usize, trials: usize) -> Result<()> {
    if size == 0 {
        Err(Error::GridSize)
    } else if trials == 0 {
        Err(Error::TrialCount)
    } else {
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn summary() {
        let stats = PercolationStats::from_thresholds(vec![0.5, 0.75]).unwrap();

        assert_eq!(stats.trials(), 2);
        assert_close(stats.mean(), 0.625);
        assert_close(stats.stddev(), 0.125 * 2f64.sqrt());
        assert_close(stats.confidence_lo(), 0.625 - 1.96 * 0.125);
        assert_close(stats.confidence_hi(), 0.625 + 1.96 * 0.125);
    }

    #[test]
    fn identical_samples() {
        let stats = PercolationStats::from_thresholds(vec![0.5; 4]).unwrap();

        assert_close(stats.mean(), 0.5);
        assert_eq!(stats.stddev(), 0.0);
        assert_close(stats.confidence_lo(), 0.5);
        assert_close(stats.confidence_hi(), 0.5);
    }

    #[test]
    fn single_trial_has_no_deviation() {
        let stats = PercolationStats::from_thresholds(vec![0.59]).unwrap();

        assert_close(stats.mean(), 0.59);
        assert!(stats.stddev().is_nan());
        assert!(stats.confidence_lo().is_nan());
        assert!(stats.confidence_hi().is_nan());
    }

    #[test]
    fn no_samples() {
        assert_eq!(
            PercolationStats::from_thresholds(vec![]),
            Err(Error::TrialCount)
        );
    }

    #[test]
    fn arguments_checked_before_drawing() {
        struct Untouchable;

        impl RandomSource for Untouchable {
            fn uniform(&mut self, _lo: usize, _hi: usize) -> usize {
                panic!("no trial should run");
            }
        }

        assert_eq!(
            PercolationStats::new(0, 10, &mut Untouchable),
            Err(Error::GridSize)
        );
        assert_eq!(
            PercolationStats::new(10, 0, &mut Untouchable),
            Err(Error::TrialCount)
        );
        assert_eq!(
            PercolationStats::new(0, 0, &mut Untouchable),
            Err(Error::GridSize)
        );
    }
}
