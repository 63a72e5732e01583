//! # blockrand-core
//!
//! Balanced multi-factorial randomization lists for clinical-trial record
//! assignment.
//!
//! Given a requested list length and `k` independent binary factors, the
//! pipeline produces `ceil(list_length / 2^k)` permuted blocks — each block a
//! random ordering of all `2^k` factor combinations — and splits the result
//! into `k` per-factor 0/1 assignment columns. Every combination of factor
//! values appears exactly once per block, so each factor is assigned 1 exactly
//! as often as 0 within every block and across the whole list.
//!
//! ## Quick Start
//!
//! ```
//! use blockrand_core::FactorialDesign;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let design = FactorialDesign::new(10, 2).unwrap();
//! assert_eq!(design.actual_list_length(), 12); // rounded up to whole blocks
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let table = design.generate(&mut rng);
//! assert_eq!(table.len(), 12);
//! assert_eq!(table.factor_count(), 2);
//! ```
//!
//! ## Architecture
//!
//! Design → permuted blocks → bit columns → one CSV per factor
//!
//! The random generator is always an explicit argument. Seed it
//! (`StdRng::seed_from_u64`) for reproducible lists, or build it from OS
//! entropy (`StdRng::from_os_rng`) for production randomization, where
//! non-reproducibility is the point.

pub mod bits;
pub mod design;
pub mod sequence;
pub mod writer;

pub use bits::FactorTable;
pub use design::{DesignError, FactorialDesign, MAX_FACTOR_COUNT, MIN_FACTOR_COUNT};
pub use sequence::shuffled_sequence;
pub use writer::{CSV_HEADER, write_factor_files};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
