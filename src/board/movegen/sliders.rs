use super::super::attack_tables::{Rays, DIAGONAL_RAYS, STRAIGHT_RAYS};
use super::super::state::Board;
use super::super::types::{opposite_sides, Step, NO_FIG};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn generate_slider_steps(&self, from: usize, slider: SliderType, out: &mut Vec<Step>) {
        match slider {
            SliderType::Bishop => self.walk_rays(from, &DIAGONAL_RAYS[from], out),
            SliderType::Rook => self.walk_rays(from, &STRAIGHT_RAYS[from], out),
            SliderType::Queen => {
                self.walk_rays(from, &STRAIGHT_RAYS[from], out);
                self.walk_rays(from, &DIAGONAL_RAYS[from], out);
            }
        }
    }

    /// Walk each ray until the first occupied cell, which is taken if hostile.
    fn walk_rays(&self, from: usize, rays: &Rays, out: &mut Vec<Step>) {
        let fig = self.get(from);
        for ray in rays {
            for &to in ray {
                let target = self.get(to as usize);
                if target == NO_FIG {
                    out.push(Step::new(from as u8, to, fig, NO_FIG));
                    continue;
                }
                if opposite_sides(fig, target) {
                    out.push(Step::new(from as u8, to, fig, target));
                }
                break;
            }
        }
    }
}
