#[cfg(test)]
#[path = "../../../tests/unit/algorithms/structures/bitvec_test.rs"]
mod bitvec_test;

use std::fmt::Display;

/// A fixed size bit vector, used to track a set of visited nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitVec {
    blocks: Vec<u64>,
    length: usize,
}

const BITS_IN_BLOCK: usize = u64::BITS as usize;

impl BitVec {
    /// Creates a new bit vector with all bits unset.
    pub fn new(length: usize) -> Self {
        let block_count = length.div_ceil(BITS_IN_BLOCK);
        Self { blocks: vec![0; block_count], length }
    }

    /// Sets or unsets bit at given index, panics if index is out of range.
    pub fn set(&mut self, index: usize, bit: bool) {
        assert!(index < self.length);
        let block_index = index / BITS_IN_BLOCK;
        let mask = 1 << (index % BITS_IN_BLOCK);

        if bit {
            self.blocks[block_index] |= mask;
        } else {
            self.blocks[block_index] &= !mask;
        }
    }

    /// Gets bit at given index. Returns `None` if index is out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.length {
            return None;
        }

        self.blocks.get(index / BITS_IN_BLOCK).map(|block| ((block >> (index % BITS_IN_BLOCK)) & 1) != 0)
    }

    /// Checks whether all bits set in this vector are also set in other one.
    pub fn is_subset(&self, other: &Self) -> bool {
        assert_eq!(self.length, other.length, "bit vectors must have the same length");

        self.blocks.iter().zip(other.blocks.iter()).all(|(x, y)| x & !y == 0)
    }

    /// Returns amount of set bits.
    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|block| block.count_ones() as usize).sum()
    }

    /// Returns size of the vector.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if vector has zero size.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Display for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for i in 0..self.length {
            write!(f, "{}", if self.get(i).unwrap_or(false) { 1 } else { 0 })?;
        }
        write!(f, "]")
    }
}
