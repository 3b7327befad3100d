//! Synchronous evolution under a rule table.

use crate::error::EvolveError;
use weft_core::{State, Trajectory};
use weft_rules::RuleTable;

/// Evolve `initial` under `table` for `steps` rows, the initial row
/// included.
///
/// The ring is toroidal: the window around cell `i` reads positions
/// `i-r..=i+r` modulo the ring width. Every cell of row `t+1` is computed
/// from the frozen row `t`: no cell can observe a neighbor's
/// already-updated state within a step. Given equal inputs the result is
/// bit-identical; the engine holds no hidden state.
///
/// # Errors
///
/// Returns [`EvolveError::ZeroSteps`] if `steps == 0`,
/// [`EvolveError::RowTooShort`] if the row is narrower than the
/// neighborhood span, and [`EvolveError::StateOutOfRange`] if any cell
/// lies outside the rule's alphabet.
///
/// # Examples
///
/// ```
/// use weft_engine::evolve;
/// use weft_rules::RuleSpace;
///
/// // Rule 254 turns any live neighborhood on: a single seed grows by one
/// // cell per side per step.
/// let table = RuleSpace::elementary().table_at(&254u64.into()).unwrap();
/// let traj = evolve(&table, &[0, 0, 1, 0, 0], 3).unwrap();
/// assert_eq!(traj.row(0), &[0, 0, 1, 0, 0]);
/// assert_eq!(traj.row(1), &[0, 1, 1, 1, 0]);
/// assert_eq!(traj.row(2), &[1, 1, 1, 1, 1]);
/// ```
pub fn evolve(
    table: &RuleTable,
    initial: &[State],
    steps: usize,
) -> Result<Trajectory, EvolveError> {
    let hood = table.neighborhood();
    if steps == 0 {
        return Err(EvolveError::ZeroSteps);
    }
    if initial.len() < hood.span() {
        return Err(EvolveError::RowTooShort {
            len: initial.len(),
            span: hood.span(),
        });
    }
    for (position, &state) in initial.iter().enumerate() {
        if state >= hood.states() {
            return Err(EvolveError::StateOutOfRange {
                position,
                state,
                states: hood.states(),
            });
        }
    }

    let width = initial.len();
    let mut cells = Vec::with_capacity(width * steps);
    cells.extend_from_slice(initial);
    let mut prev = initial.to_vec();
    let mut next = vec![0; width];
    for _ in 1..steps {
        for (i, cell) in next.iter_mut().enumerate() {
            *cell = table.next_state(hood.window_key(&prev, i));
        }
        cells.extend_from_slice(&next);
        std::mem::swap(&mut prev, &mut next);
    }

    // Width and length were fixed above; reconstruction cannot fail.
    debug_assert_eq!(cells.len(), width * steps);
    match Trajectory::from_flat(width, cells) {
        Ok(trajectory) => Ok(trajectory),
        Err(_) => unreachable!("evolve builds a rectangular buffer"),
    }
}
