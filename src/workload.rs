//! Reference sequence construction.
//!
//! The simulators never make up their own input. Sequences come from
//! here: parsed from text, or drawn from a seeded random generator so a
//! run can be reproduced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::config::{PAGE_ID_RANGE, RANDOM_LEN_RANGE};
use crate::common::{Error, PageId, Result};

/// Parse a reference sequence such as `"7, 0 1,2"`.
///
/// Page numbers may be separated by commas, whitespace or both. Empty
/// input yields an empty sequence.
///
/// # Errors
/// - `Error::InvalidReference` for a token that is not a `u32`
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map(PageId::new)
                .map_err(|_| Error::InvalidReference(token.to_string()))
        })
        .collect()
}

/// Random reference sequences over [`PAGE_ID_RANGE`].
pub struct ReferenceGenerator {
    rng: StdRng,
}

impl ReferenceGenerator {
    /// Create a generator that always yields the same sequences for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate `len` uniformly random page references.
    pub fn generate(&mut self, len: usize) -> Vec<PageId> {
        (0..len)
            .map(|_| PageId::new(self.rng.gen_range(PAGE_ID_RANGE)))
            .collect()
    }

    /// Generate a sequence whose length is drawn from [`RANDOM_LEN_RANGE`].
    pub fn generate_random_len(&mut self) -> Vec<PageId> {
        let len = self.rng.gen_range(RANDOM_LEN_RANGE);
        self.generate(len)
    }
}
