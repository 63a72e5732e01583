//! Bit decomposition of a combination sequence into per-factor columns.
//!
//! Each sequence element encodes one combination of factor values in its
//! lowest `factor_count` bits. Factor 1 reads the most significant of those
//! bits, factor `factor_count` the least significant, so reading one row
//! across all factors reconstructs the element's binary expansion.

/// Row-major table of 0/1 factor assignments, one row per sequence position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorTable {
    rows: Vec<Vec<u8>>,
    factor_count: u32,
}

impl FactorTable {
    /// Decompose a combination sequence into factor bit rows.
    ///
    /// Row `i` holds the lowest `factor_count` bits of `sequence[i]`,
    /// most significant kept bit first.
    pub fn from_sequence(sequence: &[u32], factor_count: u32) -> Self {
        let rows = sequence
            .iter()
            .map(|&value| unpack_low_bits(value, factor_count))
            .collect();
        Self { rows, factor_count }
    }

    /// Number of rows (the actual list length).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of factors (columns).
    pub fn factor_count(&self) -> u32 {
        self.factor_count
    }

    /// Bits for one row, factor 1 first.
    pub fn row(&self, index: usize) -> &[u8] {
        &self.rows[index]
    }

    /// Assignment column for 1-based factor `factor_num`, in sequence order.
    ///
    /// # Panics
    /// Panics if `factor_num` is 0 or greater than `factor_count`.
    pub fn column(&self, factor_num: u32) -> Vec<u8> {
        assert!(
            (1..=self.factor_count).contains(&factor_num),
            "factor {factor_num} out of range 1..={}",
            self.factor_count
        );
        let slice_index = (factor_num - 1) as usize;
        self.rows.iter().map(|row| row[slice_index]).collect()
    }
}

impl std::fmt::Display for FactorTable {
    /// Space-separated bits, one line per row.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Lowest `factor_count` bits of `value`, most significant first.
///
/// Explicit shift-and-mask per bit: `(value >> shift) & 1`.
fn unpack_low_bits(value: u32, factor_count: u32) -> Vec<u8> {
    (0..factor_count)
        .rev()
        .map(|shift| ((value >> shift) & 1) as u8)
        .collect()
}
