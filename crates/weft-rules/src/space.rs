//! The rule-space enumerator.
//!
//! A rule index is a base-`k` numeral with `pattern_count` digits: digit
//! `i` (least significant first) is the next state assigned to pattern key
//! `i`. Decomposing an index digit by digit yields its table in
//! `O(pattern_count)` work; the space itself, of size `k^(k^(2r+1))`, is
//! never enumerated or materialized. Walking a cartesian-product generator
//! to its n-th element would cost `O(size)` for the same answer.

use crate::error::RuleError;
use crate::table::RuleTable;
use num_bigint::BigUint;
use num_traits::Pow;
use rand::Rng;
use weft_core::Neighborhood;

/// The space of all rule tables over one neighborhood geometry.
///
/// Indexing is a pure function: equal indices always yield bit-identical
/// tables. Randomness enters only through
/// [`random_table`](Self::random_table), which consumes a caller-supplied
/// random source so that draws are reproducible from a seed.
///
/// # Examples
///
/// ```
/// use weft_rules::RuleSpace;
///
/// let space = RuleSpace::elementary();
/// assert_eq!(space.pattern_count(), 8);
/// assert_eq!(space.size(), 256u64.into());
///
/// // Wolfram's Rule 4: only the 010 window survives.
/// let table = space.table_at(&4u64.into()).unwrap();
/// let key = space.neighborhood().encode(&[0, 1, 0]).unwrap();
/// assert_eq!(table.next_state(key), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSpace {
    hood: Neighborhood,
}

impl RuleSpace {
    /// The rule space over `hood`.
    pub fn new(hood: Neighborhood) -> Self {
        Self { hood }
    }

    /// The elementary rule space: radius 1, binary alphabet, 256 rules
    /// indexed by their classical Wolfram codes.
    pub fn elementary() -> Self {
        Self::new(Neighborhood::elementary())
    }

    /// The geometry this space ranges over.
    pub fn neighborhood(&self) -> Neighborhood {
        self.hood
    }

    /// Number of distinct patterns, `k^(2r+1)`: the number of digits in a
    /// rule index.
    pub fn pattern_count(&self) -> u64 {
        self.hood.pattern_count()
    }

    /// Number of rule tables in the space, `k^(k^(2r+1))`.
    ///
    /// Doubly exponential in the radius; arbitrary precision is not
    /// optional here. For radius 2 over a binary alphabet this is already
    /// `2^32`; for radius 4 over four states it has more digits than there
    /// are atoms in the observable universe.
    pub fn size(&self) -> BigUint {
        Pow::pow(BigUint::from(self.hood.states()), self.pattern_count())
    }

    /// Whether `index` names a table in this space.
    pub fn contains(&self, index: &BigUint) -> bool {
        *index < self.size()
    }

    /// The rule table at `index`, by mixed-radix digit decomposition.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::IndexOutOfRange`] if `index` is at or above
    /// [`size`](Self::size).
    pub fn table_at(&self, index: &BigUint) -> Result<RuleTable, RuleError> {
        let size = self.size();
        if *index >= size {
            return Err(RuleError::IndexOutOfRange {
                index: index.clone(),
                size,
            });
        }
        let mut digits = index.to_radix_le(self.hood.states() as u32);
        digits.resize(self.pattern_count() as usize, 0);
        Ok(RuleTable::from_states_unchecked(self.hood, digits))
    }

    /// A uniformly random rule table.
    ///
    /// Each next-state is drawn independently and uniformly from the
    /// alphabet. The random source is supplied by the caller; seed it to
    /// make a draw reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use weft_rules::RuleSpace;
    ///
    /// let space = RuleSpace::elementary();
    /// let a = space.random_table(&mut ChaCha8Rng::seed_from_u64(7));
    /// let b = space.random_table(&mut ChaCha8Rng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn random_table<R: Rng + ?Sized>(&self, rng: &mut R) -> RuleTable {
        let states = self.hood.states();
        let next = (0..self.pattern_count())
            .map(|_| rng.random_range(0..states))
            .collect();
        RuleTable::from_states_unchecked(self.hood, next)
    }
}
