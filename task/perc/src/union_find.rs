use crate::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// Disjoint sets over the fixed universe `0..len`.
///
/// Unions hang the smaller tree below the larger root, and [`find`] halves
/// the path it walks, so any sequence of operations costs near `O(log len)`
/// amortized per operation.
///
/// [`find`]: DisjointSet::find
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Returns the size of the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the representative of the set containing `index`, pointing
    /// every visited element at its grandparent on the way up.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index >= self.len()`.
    pub fn find(&mut self, index: usize) -> Result<usize> {
        self.validate(index)?;

        let mut current = index;
        while self.parent[current] != current {
            let grandparent = self.parent[self.parent[current]];
            self.parent[current] = grandparent;
            current = grandparent;
        }

        Ok(current)
    }

    /// Same representative as [`find`](DisjointSet::find) without touching
    /// the links.
    pub fn root(&self, index: usize) -> Result<usize> {
        self.validate(index)?;

        let mut current = index;
        while self.parent[current] != current {
            current = self.parent[current];
        }

        Ok(current)
    }

    /// Merges the sets containing `a` and `b`. Does nothing if they are
    /// already the same set.
    pub fn union(&mut self, a: usize, b: usize) -> Result<()> {
        let a_root = self.find(a)?;
        let b_root = self.find(b)?;

        if a_root == b_root {
            return Ok(());
        }

        let (larger, smaller) = if self.size[a_root] < self.size[b_root] {
            (b_root, a_root)
        } else {
            (a_root, b_root)
        };

        self.parent[smaller] = larger;
        self.size[larger] += self.size[smaller];
        self.count -= 1;

        Ok(())
    }

    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    fn validate(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
