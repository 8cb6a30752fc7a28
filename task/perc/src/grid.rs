use std::fmt;

use crate::{union_find::DisjointSet, Error, Result};

////////////////////////////////////////////////////////////////////////////////

const TOP: usize = 0;

/// An `n`-by-`n` grid of sites, each either blocked or open.
///
/// Sites are addressed by 1-based `(row, col)`. Row 1 is the top of the grid
/// and row `n` is the bottom.
///
/// Connectivity is tracked twice. `full` holds the sites and a virtual top
/// node. `flow` additionally holds a virtual bottom node joined to every open
/// site of the last row. Asking `flow` whether a site reaches the top would
/// report bottom-row sites as full as soon as the grid percolates, so fullness
/// is only ever asked of `full`.
#[derive(Clone, Debug)]
pub struct Percolation {
    size: usize,
    opened: Vec<bool>,
    open_count: usize,
    full: DisjointSet,
    flow: DisjointSet,
}

impl Percolation {
    /// Creates a new grid with every site blocked.
    ///
    /// # Arguments
    ///
    /// * `size` - side length of the grid.
    ///
    /// # Errors
    ///
    /// [`Error::GridSize`] if `size` is zero or the sites and both virtual
    /// nodes cannot be indexed by `usize`. Nothing is allocated in that case.
    pub fn new(size: usize) -> Result<Self> {
        let sites = size
            .checked_mul(size)
            .filter(|&sites| sites > 0 && sites.checked_add(2).is_some())
            .ok_or(Error::GridSize)?;

        Ok(Self {
            size,
            opened: vec![false; sites],
            open_count: 0,
            full: DisjointSet::new(sites + 1),
            flow: DisjointSet::new(sites + 2),
        })
    }

    /// Returns grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Opens the site at `(row, col)` if it is not open already.
    ///
    /// Opening an open site changes nothing.
    ///
    /// # Arguments
    ///
    /// * `row` - must be >= 1 and <= grid size.
    /// * `col` - must be >= 1 and <= grid size.
    ///
    /// # Errors
    ///
    /// [`Error::SiteOutOfBounds`] if `row` or `col` is out of range.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.site(row, col)?;

        if self.opened[site - 1] {
            return Ok(());
        }

        self.opened[site - 1] = true;
        self.open_count += 1;

        if row == 1 {
            self.union_both(site, TOP)?;
        }

        if row == self.size {
            self.flow.union(site, self.bottom())?;
        }

        let moves = [(-1, 0), (1, 0), (0, -1), (0, 1)];

        for (d_row, d_col) in moves.iter() {
            let row = row.wrapping_add(*d_row as usize);
            let col = col.wrapping_add(*d_col as usize);

            if let Ok(neighbour) = self.site(row, col) {
                if self.opened[neighbour - 1] {
                    self.union_both(site, neighbour)?;
                }
            }
        }

        Ok(())
    }

    /// Returns `true` if the site at `(row, col)` is open.
    ///
    /// # Errors
    ///
    /// [`Error::SiteOutOfBounds`] if `row` or `col` is out of range.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.site(row, col)?;
        Ok(self.opened[site - 1])
    }

    /// Returns `true` if the site at `(row, col)` is open and connected to
    /// the top row through open sites.
    ///
    /// # Errors
    ///
    /// [`Error::SiteOutOfBounds`] if `row` or `col` is out of range.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.site(row, col)?;
        Ok(self.opened[site - 1] && self.full.root(site)? == self.full.root(TOP)?)
    }

    /// Returns how many sites are open.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns `true` if some path of open sites joins the top row to the
    /// bottom row.
    pub fn percolates(&self) -> bool {
        // Both nodes always exist in `flow`.
        matches!(
            (self.flow.root(TOP), self.flow.root(self.bottom())),
            (Ok(top), Ok(bottom)) if top == bottom
        )
    }

    fn bottom(&self) -> usize {
        self.flow.len() - 1
    }

    fn union_both(&mut self, a: usize, b: usize) -> Result<()> {
        self.full.union(a, b)?;
        self.flow.union(a, b)
    }

    /// Maps a 1-based site to its index in both universes.
    fn site(&self, row: usize, col: usize) -> Result<usize> {
        if (1..=self.size).contains(&row) && (1..=self.size).contains(&col) {
            Ok((row - 1) * self.size + col)
        } else {
            Err(Error::SiteOutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Draws the grid one row per line: `~` for full sites, `o` for other open
/// sites and `#` for blocked ones.
impl fmt::Display for Percolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=self.size {
            for col in 1..=self.size {
                let symbol = match (self.is_open(row, col), self.is_full(row, col)) {
                    (_, Ok(true)) => '~',
                    (Ok(true), _) => 'o',
                    _ => '#',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
