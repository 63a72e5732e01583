//! Design parameters for a balanced multi-factorial randomization list.
//!
//! A design is fixed by two numbers: the requested list length and the count
//! of independent binary factors. Everything else — combination space size,
//! block count, actual output length — derives from those.

use rand::Rng;

use crate::bits::FactorTable;
use crate::sequence::shuffled_sequence;

/// Smallest supported factor count.
pub const MIN_FACTOR_COUNT: u32 = 1;
/// Largest supported factor count. 16 factors already means 65536-row blocks.
pub const MAX_FACTOR_COUNT: u32 = 16;

/// Validated parameters of a balanced multi-factorial design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorialDesign {
    list_length: usize,
    factor_count: u32,
}

impl FactorialDesign {
    /// Validate and build a design.
    ///
    /// `list_length` is a lower bound on the number of rows generated; the
    /// actual length is rounded up to a whole number of blocks, never
    /// truncated.
    pub fn new(list_length: usize, factor_count: u32) -> Result<Self, DesignError> {
        if !(MIN_FACTOR_COUNT..=MAX_FACTOR_COUNT).contains(&factor_count) {
            return Err(DesignError::FactorCountOutOfRange(factor_count));
        }
        if list_length == 0 {
            return Err(DesignError::EmptyList);
        }
        Ok(Self {
            list_length,
            factor_count,
        })
    }

    /// Requested minimum number of rows.
    pub fn list_length(&self) -> usize {
        self.list_length
    }

    /// Number of independent binary factors.
    pub fn factor_count(&self) -> u32 {
        self.factor_count
    }

    /// Size of the combination space, `2^factor_count`. Also the block length.
    pub fn seq_range(&self) -> u32 {
        1u32 << self.factor_count
    }

    /// Number of blocks needed to cover `list_length`, rounding up.
    pub fn reps(&self) -> usize {
        self.list_length.div_ceil(self.seq_range() as usize)
    }

    /// Rows actually generated: `reps * seq_range`, always >= `list_length`.
    pub fn actual_list_length(&self) -> usize {
        self.reps() * self.seq_range() as usize
    }

    /// Run the generation pipeline: permuted blocks, then bit decomposition.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> FactorTable {
        let sequence = shuffled_sequence(self.seq_range(), self.reps(), rng);
        FactorTable::from_sequence(&sequence, self.factor_count)
    }
}

/// Rejected design parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignError {
    /// Factor count outside `[MIN_FACTOR_COUNT, MAX_FACTOR_COUNT]`.
    FactorCountOutOfRange(u32),
    /// A zero-length list has no records to assign.
    EmptyList,
}

impl std::fmt::Display for DesignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FactorCountOutOfRange(_) => write!(
                f,
                "Must generate between {MIN_FACTOR_COUNT} and {MAX_FACTOR_COUNT} factors"
            ),
            Self::EmptyList => write!(f, "List length must be at least 1"),
        }
    }
}

impl std::error::Error for DesignError {}
