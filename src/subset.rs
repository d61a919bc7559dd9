//! A compact, hashable vertex subset used as the key of the solver cache.

use std::fmt;

const BLOCK: usize = 64;

/// A set of vertex ids out of `0..capacity`, stored as a bit-set.
///
/// Two subsets with the same members and the same capacity compare (and hash) equal, so the
/// subset itself serves as the canonical cache key. Subsets are never changed in place by the
/// solver; `without` derives a new value.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct VertexSubset {
    blocks: Vec<u64>,
    capacity: usize,
    len: usize,
}

impl VertexSubset {

    /// Returns the empty subset of `0..capacity`.
    pub fn empty(capacity: usize) -> Self {
        VertexSubset {
            blocks: vec![0; (capacity + BLOCK - 1) / BLOCK],
            capacity,
            len: 0,
        }
    }

    /// Returns the subset holding every vertex of `0..capacity`.
    pub fn full(capacity: usize) -> Self {
        let mut blocks = vec![u64::MAX; capacity / BLOCK];
        if capacity % BLOCK != 0 {
            blocks.push((1u64 << (capacity % BLOCK)) - 1);
        }
        VertexSubset {
            blocks,
            capacity,
            len: capacity,
        }
    }

    /// Builds a subset of `0..capacity` from `nodes`. Ids outside the range are ignored.
    pub fn from_nodes<I: IntoIterator<Item=usize>>(capacity: usize, nodes: I) -> Self {
        let mut subset = Self::empty(capacity);
        for node in nodes {
            subset.insert(node);
        }
        subset
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, node: usize) -> bool {
        node < self.capacity && self.blocks[node / BLOCK] & (1u64 << (node % BLOCK)) != 0
    }

    /// Adds `node`. Returns `true` if it was not contained before.
    pub fn insert(&mut self, node: usize) -> bool {
        if node >= self.capacity || self.contains(node) {
            return false
        }
        self.blocks[node / BLOCK] |= 1u64 << (node % BLOCK);
        self.len += 1;
        true
    }

    /// Removes `node`. Returns `true` if it was contained.
    pub fn remove(&mut self, node: usize) -> bool {
        if !self.contains(node) {
            return false
        }
        self.blocks[node / BLOCK] &= !(1u64 << (node % BLOCK));
        self.len -= 1;
        true
    }

    /// Returns a copy of `self` without `node`.
    pub fn without(&self, node: usize) -> Self {
        let mut copy = self.clone();
        copy.remove(node);
        copy
    }

    /// Returns an `Iterator` over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item=usize> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .flat_map(|(i, block)| {
                let mut rest = *block;
                std::iter::from_fn(move || {
                    if rest == 0 {
                        return None
                    }
                    let bit = rest.trailing_zeros() as usize;
                    rest &= rest - 1;
                    Some(i * BLOCK + bit)
                })
            })
    }

    /// Returns the members as an ascending `Vec`.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for VertexSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", node)?;
            first = false;
        }
        Ok(())
    }
}
