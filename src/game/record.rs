use crate::board::{Step, STEP_BYTES};

use super::error::RecordError;

/// Format version written by [`GameRecord::to_bytes`].
pub const RECORD_VERSION: u8 = 1;

const HEADER_BYTES: usize = 4;

/// A saved game: who the user plays and the moves made from the start
/// position.
///
/// Layout: version byte, user-plays-white byte, little-endian `i16` move
/// count, then one packed step per move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameRecord {
    pub user_plays_white: bool,
    pub steps: Vec<Step>,
}

impl GameRecord {
    /// Fails when the game has more moves than the header can count.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        let len = self.steps.len();
        let count = i16::try_from(len).map_err(|_| RecordError::InvalidCount {
            count: i64::try_from(len).unwrap_or(i64::MAX),
        })?;
        let mut out = Vec::with_capacity(HEADER_BYTES + len * STEP_BYTES);
        out.push(RECORD_VERSION);
        out.push(u8::from(self.user_plays_white));
        out.extend_from_slice(&count.to_le_bytes());
        for step in &self.steps {
            out.extend_from_slice(&step.to_bytes());
        }
        Ok(out)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        if bytes.len() < HEADER_BYTES {
            return Err(RecordError::Truncated {
                needed: HEADER_BYTES,
                found: bytes.len(),
            });
        }
        if bytes[0] != RECORD_VERSION {
            return Err(RecordError::UnsupportedVersion { found: bytes[0] });
        }
        let user_plays_white = bytes[1] != 0;
        let raw_count = i16::from_le_bytes([bytes[2], bytes[3]]);
        let count = usize::try_from(raw_count).map_err(|_| RecordError::InvalidCount {
            count: i64::from(raw_count),
        })?;

        let needed = HEADER_BYTES + count * STEP_BYTES;
        if bytes.len() < needed {
            return Err(RecordError::Truncated {
                needed,
                found: bytes.len(),
            });
        }

        let steps = bytes[HEADER_BYTES..needed]
            .chunks_exact(STEP_BYTES)
            .enumerate()
            .map(|(index, chunk)| {
                let mut raw = [0u8; STEP_BYTES];
                raw.copy_from_slice(chunk);
                Step::from_bytes(raw).ok_or(RecordError::InvalidStep { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameRecord {
            user_plays_white,
            steps,
        })
    }
}
