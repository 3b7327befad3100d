//! Single-pass trajectory scanning.

use crate::error::InferError;
use indexmap::map::Entry;
use indexmap::IndexMap;
use weft_core::{Neighborhood, PatternKey, State, Trajectory};
use weft_rules::RuleTable;

/// One neighborhood pattern observed mapping to two or more distinct next
/// states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    /// The contested pattern key.
    pub key: PatternKey,
    /// Every distinct next state observed for the key, in first-seen
    /// order. Always at least two entries.
    pub states: Vec<State>,
}

/// The result of scanning a trajectory for rule observations.
///
/// Holds the partial rule table (first observation per pattern), every
/// conflict, and (implicitly, by absence) the unobserved patterns.
/// Undetermined next states are reported, never guessed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identification {
    hood: Neighborhood,
    observed: IndexMap<PatternKey, State>,
    conflicts: Vec<Conflict>,
}

impl Identification {
    /// The geometry the trajectory was scanned under.
    pub fn neighborhood(&self) -> Neighborhood {
        self.hood
    }

    /// The first next state observed for `key`, if the pattern occurred.
    ///
    /// For a conflicted key this is still the first observation; the
    /// disagreements are in [`conflicts`](Self::conflicts).
    pub fn next_state(&self, key: PatternKey) -> Option<State> {
        self.observed.get(&key).copied()
    }

    /// Observed `(key, first next state)` pairs, in first-observed order.
    pub fn observed(&self) -> impl Iterator<Item = (PatternKey, State)> + '_ {
        self.observed.iter().map(|(&key, &state)| (key, state))
    }

    /// Number of distinct patterns observed.
    pub fn observed_len(&self) -> usize {
        self.observed.len()
    }

    /// Pattern keys never observed, in ascending order.
    pub fn unobserved(&self) -> impl Iterator<Item = PatternKey> + '_ {
        self.hood
            .keys()
            .filter(move |key| !self.observed.contains_key(key))
    }

    /// Every pattern observed with disagreeing next states.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// `true` if no pattern was observed with disagreeing next states.
    pub fn is_consistent(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// `true` if every pattern of the geometry was observed.
    pub fn is_total(&self) -> bool {
        self.observed.len() as u64 == self.hood.pattern_count()
    }

    /// Convert into a total rule table, failing if the observations were
    /// conflicting or incomplete.
    ///
    /// # Errors
    ///
    /// Returns [`InferError::RuleConflict`] with the full conflict list if
    /// any pattern disagreed with itself, else
    /// [`InferError::IncompleteObservation`] with every missing key if any
    /// pattern went unobserved.
    pub fn into_table(self) -> Result<RuleTable, InferError> {
        if !self.conflicts.is_empty() {
            return Err(InferError::RuleConflict {
                conflicts: self.conflicts,
            });
        }
        if !self.is_total() {
            return Err(InferError::IncompleteObservation {
                missing: self.unobserved().collect(),
            });
        }
        let mut next = vec![0; self.hood.pattern_count() as usize];
        for (key, state) in &self.observed {
            next[key.0 as usize] = *state;
        }
        Ok(RuleTable::from_states(self.hood, next)?)
    }
}

/// Scan a trajectory for rule observations under `hood`.
///
/// For every consecutive row pair and every position, the window around
/// the position in the earlier row (built with the same toroidal
/// convention the simulator uses) is recorded as mapping to the cell
/// below its center. The first observation per pattern wins; later
/// disagreements accumulate into one [`Conflict`] per pattern.
///
/// Conflicting or missing observations never fail this call: the caller
/// decides what to do with the report. Use [`identify_strict`] to demand
/// a total, conflict-free table.
///
/// # Errors
///
/// Fails fast only on malformed input: a trajectory narrower than the
/// span, fewer than two rows, or a cell outside the alphabet.
///
/// # Examples
///
/// ```
/// use weft_core::Neighborhood;
/// use weft_engine::{covering_row, evolve};
/// use weft_infer::identify;
/// use weft_rules::RuleSpace;
///
/// let space = RuleSpace::elementary();
/// let table = space.table_at(&30u64.into()).unwrap();
/// let traj = evolve(&table, &covering_row(space.neighborhood()), 2).unwrap();
///
/// let report = identify(&traj, space.neighborhood()).unwrap();
/// assert!(report.is_total() && report.is_consistent());
/// ```
pub fn identify(trajectory: &Trajectory, hood: Neighborhood) -> Result<Identification, InferError> {
    if trajectory.width() < hood.span() {
        return Err(InferError::TooNarrow {
            width: trajectory.width(),
            span: hood.span(),
        });
    }
    if trajectory.steps() < 2 {
        return Err(InferError::TooFewRows {
            steps: trajectory.steps(),
        });
    }
    for (row_index, row) in trajectory.rows().enumerate() {
        for (col, &state) in row.iter().enumerate() {
            if state >= hood.states() {
                return Err(InferError::CellOutOfRange {
                    row: row_index,
                    col,
                    state,
                    states: hood.states(),
                });
            }
        }
    }

    let mut observed: IndexMap<PatternKey, State> = IndexMap::new();
    let mut disagreements: IndexMap<PatternKey, Vec<State>> = IndexMap::new();
    let rows: Vec<&[State]> = trajectory.rows().collect();
    for pair in rows.windows(2) {
        let (row, below) = (pair[0], pair[1]);
        for (i, &next) in below.iter().enumerate() {
            let key = hood.window_key(row, i);
            match observed.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(next);
                }
                Entry::Occupied(slot) => {
                    let first = *slot.get();
                    if next != first {
                        let states = disagreements.entry(key).or_insert_with(|| vec![first]);
                        if !states.contains(&next) {
                            states.push(next);
                        }
                    }
                }
            }
        }
    }

    let conflicts = disagreements
        .into_iter()
        .map(|(key, states)| Conflict { key, states })
        .collect();
    Ok(Identification {
        hood,
        observed,
        conflicts,
    })
}

/// Identify and demand a total, conflict-free rule table.
///
/// The round-trip verification mode: generate a rule, simulate it,
/// identify the trajectory, and compare tables or indices exactly.
///
/// # Errors
///
/// Everything [`identify`] rejects, plus [`InferError::RuleConflict`] and
/// [`InferError::IncompleteObservation`] as described on
/// [`Identification::into_table`].
pub fn identify_strict(
    trajectory: &Trajectory,
    hood: Neighborhood,
) -> Result<RuleTable, InferError> {
    identify(trajectory, hood)?.into_table()
}
