//! CSV output, one file per factor.
//!
//! File layout matches what REDCap's randomization module imports: a header
//! naming the randomization number and group columns, then one row per record
//! in shuffled block order.
//!
//! Output is written eagerly with no retries. The first I/O failure aborts the
//! run; files already written stay on disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::bits::FactorTable;

/// Header row of every generated file.
pub const CSV_HEADER: &str = "redcap_randomization_number,redcap_randomization_group";

/// Write one `{file_prefix}_{NN}.csv` per factor and return the paths written.
///
/// The factor index is zero-padded to two digits. Existing files at those
/// paths are overwritten without confirmation. Data rows pair the 1-based
/// randomization number with the factor's 0/1 assignment, in sequence order.
pub fn write_factor_files(table: &FactorTable, file_prefix: &str) -> io::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(table.factor_count() as usize);
    for factor_num in 1..=table.factor_count() {
        let path = PathBuf::from(format!("{file_prefix}_{factor_num:02}.csv"));
        let assignments = table.column(factor_num);
        debug!("{assignments:?}");
        info!("Writing {}", path.display());
        write_factor_file(&path, &assignments)?;
        written.push(path);
    }
    Ok(written)
}

/// Write a single factor's assignment column to `path`.
fn write_factor_file(path: &Path, assignments: &[u8]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{CSV_HEADER}")?;
    for (linenum, bit) in assignments.iter().enumerate() {
        writeln!(out, "{},{}", linenum + 1, bit)?;
    }
    out.flush()
}
