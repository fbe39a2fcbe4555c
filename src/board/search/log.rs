//! Text form of a root report.

use std::fmt;
use std::time::Duration;

use super::constants::{MATE, MATE_REPORT};
use crate::board::types::Step;

/// One printed line of search progress, e.g.
/// `1.Ng1-f3     (0.25) Depth: 4/9 0:00:01 12kN`.
#[derive(Clone, Copy, Debug)]
pub struct ReportLine<'a> {
    pub white_move: bool,
    pub step: &'a Step,
    pub depth: i32,
    pub seldepth: i32,
    pub elapsed: Duration,
    pub nodes: u64,
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.white_move { "1." } else { "1..." };
        let weight = i32::from(self.step.weight);
        write!(f, "{prefix}{:<10}(", self.step.to_string())?;
        if weight > MATE_REPORT {
            write!(f, "+M{}", (MATE + 1 - weight) / 2)?;
        } else {
            write!(f, "{:.2}", f64::from(weight) / 100.0)?;
        }
        write!(
            f,
            ") Depth: {}/{} {} {}kN",
            self.depth,
            self.seldepth + 1,
            Clock(self.elapsed),
            self.nodes / 1000
        )
    }
}

/// Elapsed time as `H:MM:SS`.
struct Clock(Duration);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        write!(f, "{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{KNIGHT, NO_FIG};

    #[test]
    fn clock_format() {
        assert_eq!(Clock(Duration::from_secs(0)).to_string(), "0:00:00");
        assert_eq!(Clock(Duration::from_secs(3725)).to_string(), "1:02:05");
    }

    #[test]
    fn score_and_mate_lines() {
        let mut step = Step::new(62, 45, KNIGHT, NO_FIG);
        step.weight = 25;
        let line = ReportLine {
            white_move: true,
            step: &step,
            depth: 4,
            seldepth: 8,
            elapsed: Duration::from_millis(1500),
            nodes: 12_345,
        };
        assert_eq!(line.to_string(), "1.Ng1-f3    (0.25) Depth: 4/9 0:00:01 12kN");

        let mut mate = step;
        mate.weight = 9_999;
        let line = ReportLine {
            white_move: false,
            step: &mate,
            ..line
        };
        assert!(line.to_string().starts_with("1...Ng1-f3    (+M1)"));
    }
}
