use crate::{grid::Percolation, random::RandomSource, Result};

////////////////////////////////////////////////////////////////////////////////

/// Opens uniformly random sites of a fresh `size`-by-`size` grid until it
/// percolates and returns the fraction of sites open at that moment.
///
/// Draws that hit an already open site are simply wasted.
///
/// # Errors
///
/// [`Error::GridSize`](crate::Error::GridSize) if `size` is zero.
pub fn run_trial<S: RandomSource + ?Sized>(size: usize, source: &mut S) -> Result<f64> {
    let mut grid = Percolation::new(size)?;

    while !grid.percolates() {
        let row = source.uniform(1, size);
        let col = source.uniform(1, size);
        grid.open(row, col)?;
    }

    log::trace!("percolated after {} open sites:\n{grid}", grid.number_of_open_sites());

    Ok(grid.number_of_open_sites() as f64 / (size * size) as f64)
}

////////////////////////////////////////////////////////////////////////////////
