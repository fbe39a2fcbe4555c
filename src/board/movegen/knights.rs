use super::super::attack_tables::KNIGHT_STEPS;
use super::super::state::Board;
use super::super::types::Step;

impl Board {
    pub(crate) fn generate_knight_steps(&self, from: usize, out: &mut Vec<Step>) {
        self.leaper_steps(from, &KNIGHT_STEPS[from], out);
    }
}
