use super::super::engine::Engine;
use super::super::state::Position;
use super::super::types::{CheckType, FIG_WEIGHT};

/// Bonus for the move recorded as this ply's best in an earlier pass.
const BEST_BONUS: i16 = 5;
/// Bonus for recapturing on the previous move's destination.
const RECAPTURE_BONUS: i16 = 8;

impl Engine {
    /// Assign ordering weights to freshly generated moves.
    ///
    /// Check annotations are cleared here; they are filled in again once a
    /// move has actually been played.
    pub(crate) fn weigh_steps(&mut self, ply: usize) {
        let hints = (ply > 0).then(|| (self.stack[ply].best, self.stack[ply - 1].current().to));
        let pos = &mut self.stack[ply];
        let count = pos.steps_count;
        for step in &mut pos.steps[..count] {
            step.check = CheckType::None;
            let mut weight = i16::from(step.captured.unsigned_abs());
            if let Some(fig) = step.kind.promotion_figure() {
                weight += FIG_WEIGHT[fig as usize] as i16;
            }
            weight <<= 2;

            if let Some((best, prev_to)) = hints {
                if best.is_some_and(|b| b.same_squares(step)) {
                    weight += BEST_BONUS;
                }
                if step.to == prev_to {
                    weight += RECAPTURE_BONUS;
                }
            }
            step.weight = weight;
        }
    }
}

impl Position {
    /// Selection sort by descending weight.
    ///
    /// The remaining moves keep their relative order when one is pulled
    /// forward. Below the root the pass stops once only zero weights remain.
    pub(crate) fn sort_steps(&mut self, root: bool) {
        let count = self.steps_count;
        for i in 0..count.saturating_sub(1) {
            let mut max_j = i;
            for j in i + 1..count {
                if self.steps[j].weight > self.steps[max_j].weight {
                    max_j = j;
                }
            }
            if self.steps[max_j].weight == 0 && !root {
                return;
            }
            if max_j != i {
                self.steps[i..=max_j].rotate_right(1);
            }
        }
    }
}

/// Clamp a score into the move weight range.
#[inline]
pub(crate) fn clamp_weight(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
