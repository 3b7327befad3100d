//! Binary encode/decode for rule tables and trajectories.
//!
//! Record layout (all integers little-endian):
//!
//! ```text
//! magic "WEFT" | version u8 | tag u8 | body
//!
//! tag 1 (rule table):  radius u32 | states u8 | count u64 | count bytes
//! tag 2 (trajectory):  width u64 | steps u64 | width*steps bytes
//! ```

use std::io::{Read, Write};

use weft_core::{Neighborhood, Trajectory};
use weft_rules::RuleTable;

use crate::error::StoreError;
use crate::{FORMAT_VERSION, MAGIC};

/// Record tag for rule tables.
pub const TAG_RULE_TABLE: u8 = 1;
/// Record tag for trajectories.
pub const TAG_TRAJECTORY: u8 = 2;

// ── Primitive writers ───────────────────────────────────────────

fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), StoreError> {
    w.write_all(&[v])?;
    Ok(())
}

fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), StoreError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), StoreError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

fn read_u8(r: &mut dyn Read) -> Result<u8, StoreError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u32_le(r: &mut dyn Read) -> Result<u32, StoreError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64_le(r: &mut dyn Read) -> Result<u64, StoreError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

fn read_bytes(r: &mut dyn Read, len: usize) -> Result<Vec<u8>, StoreError> {
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

// ── Header ──────────────────────────────────────────────────────

fn write_header(w: &mut dyn Write, tag: u8) -> Result<(), StoreError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u8(w, tag)
}

fn read_header(r: &mut dyn Read, expected_tag: u8) -> Result<(), StoreError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(StoreError::InvalidMagic);
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion { found: version });
    }
    let tag = read_u8(r)?;
    if tag != expected_tag {
        return Err(StoreError::WrongRecordKind {
            expected: expected_tag,
            found: tag,
        });
    }
    Ok(())
}

// ── Rule tables ─────────────────────────────────────────────────

/// Encode a rule table, geometry included.
pub fn encode_table(w: &mut dyn Write, table: &RuleTable) -> Result<(), StoreError> {
    let hood = table.neighborhood();
    write_header(w, TAG_RULE_TABLE)?;
    write_u32_le(w, hood.radius())?;
    write_u8(w, hood.states())?;
    write_u64_le(w, hood.pattern_count())?;
    w.write_all(table.states())?;
    Ok(())
}

/// Decode a rule table.
///
/// The record is self-describing: the geometry is reconstructed from the
/// stored radius and alphabet, and the states are re-validated against
/// it, so corrupt records cannot smuggle an invalid table into the
/// engine.
pub fn decode_table(r: &mut dyn Read) -> Result<RuleTable, StoreError> {
    read_header(r, TAG_RULE_TABLE)?;
    let radius = read_u32_le(r)?;
    let states = read_u8(r)?;
    let hood = Neighborhood::new(radius, states).map_err(|e| StoreError::Malformed {
        detail: format!("stored geometry invalid: {e}"),
    })?;
    let count = read_u64_le(r)?;
    if count != hood.pattern_count() {
        return Err(StoreError::Malformed {
            detail: format!(
                "stored entry count {count} disagrees with geometry ({})",
                hood.pattern_count()
            ),
        });
    }
    let next = read_bytes(r, count as usize)?;
    Ok(RuleTable::from_states(hood, next)?)
}

// ── Trajectories ────────────────────────────────────────────────

/// Encode a trajectory.
pub fn encode_trajectory(w: &mut dyn Write, trajectory: &Trajectory) -> Result<(), StoreError> {
    write_header(w, TAG_TRAJECTORY)?;
    write_u64_le(w, trajectory.width() as u64)?;
    write_u64_le(w, trajectory.steps() as u64)?;
    w.write_all(trajectory.cells())?;
    Ok(())
}

/// Decode a trajectory.
pub fn decode_trajectory(r: &mut dyn Read) -> Result<Trajectory, StoreError> {
    read_header(r, TAG_TRAJECTORY)?;
    let width = read_u64_le(r)? as usize;
    let steps = read_u64_le(r)? as usize;
    let len = width.checked_mul(steps).ok_or_else(|| StoreError::Malformed {
        detail: format!("trajectory shape {steps}x{width} overflows"),
    })?;
    let cells = read_bytes(r, len)?;
    Ok(Trajectory::from_flat(width, cells)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_rules::RuleSpace;
    use weft_test_utils::rng;

    fn sample_table() -> RuleTable {
        RuleSpace::new(Neighborhood::new(2, 3).unwrap()).random_table(&mut rng(11))
    }

    // ── Round trips ─────────────────────────────────────────────

    #[test]
    fn table_roundtrip_is_lossless() {
        let table = sample_table();
        let mut buf = Vec::new();
        encode_table(&mut buf, &table).unwrap();
        let decoded = decode_table(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, table);
        assert_eq!(decoded.neighborhood(), table.neighborhood());
    }

    #[test]
    fn trajectory_roundtrip_is_lossless() {
        let traj = Trajectory::from_flat(4, vec![0, 1, 2, 1, 2, 0, 1, 0]).unwrap();
        let mut buf = Vec::new();
        encode_trajectory(&mut buf, &traj).unwrap();
        assert_eq!(decode_trajectory(&mut buf.as_slice()).unwrap(), traj);
    }

    // ── Corruption ──────────────────────────────────────────────

    #[test]
    fn decode_rejects_bad_magic() {
        let mut buf = Vec::new();
        encode_table(&mut buf, &sample_table()).unwrap();
        buf[0] = b'X';
        assert!(matches!(
            decode_table(&mut buf.as_slice()),
            Err(StoreError::InvalidMagic)
        ));
    }

    #[test]
    fn decode_rejects_future_version() {
        let mut buf = Vec::new();
        encode_table(&mut buf, &sample_table()).unwrap();
        buf[4] = FORMAT_VERSION + 1;
        assert!(matches!(
            decode_table(&mut buf.as_slice()),
            Err(StoreError::UnsupportedVersion { found }) if found == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn decode_rejects_wrong_record_kind() {
        let mut buf = Vec::new();
        encode_table(&mut buf, &sample_table()).unwrap();
        assert!(matches!(
            decode_trajectory(&mut buf.as_slice()),
            Err(StoreError::WrongRecordKind {
                expected: TAG_TRAJECTORY,
                found: TAG_RULE_TABLE,
            })
        ));
    }

    #[test]
    fn decode_rejects_truncated_record() {
        let mut buf = Vec::new();
        encode_table(&mut buf, &sample_table()).unwrap();
        buf.truncate(buf.len() - 5);
        assert!(matches!(
            decode_table(&mut buf.as_slice()),
            Err(StoreError::Io(_))
        ));
    }

    #[test]
    fn decode_rejects_out_of_alphabet_state() {
        let mut buf = Vec::new();
        encode_table(&mut buf, &sample_table()).unwrap();
        let last = buf.len() - 1;
        buf[last] = 9;
        assert!(matches!(
            decode_table(&mut buf.as_slice()),
            Err(StoreError::Rule(_))
        ));
    }
}
