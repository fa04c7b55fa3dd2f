//! Batch decoding statistics

use crate::models::FlightCondition;
use colored::*;
use serde::Serialize;
use std::fmt;

/// Counters collected over one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub files_read: usize,
    pub lines_read: usize,
    pub reports_decoded: usize,
    pub reports_failed: usize,
    pub vfr: usize,
    pub mvfr: usize,
    pub ifr: usize,
    pub unclassified: usize,
    pub processing_time_ms: u128,
}

impl BatchStats {
    /// Count one decoded report under its flight condition
    pub fn record(&mut self, condition: FlightCondition) {
        self.reports_decoded += 1;
        match condition {
            FlightCondition::VFR => self.vfr += 1,
            FlightCondition::MVFR => self.mvfr += 1,
            FlightCondition::IFR => self.ifr += 1,
            FlightCondition::NA => self.unclassified += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.reports_failed += 1;
    }

    /// Reports decoded under one flight condition
    pub fn count(&self, condition: FlightCondition) -> usize {
        match condition {
            FlightCondition::VFR => self.vfr,
            FlightCondition::MVFR => self.mvfr,
            FlightCondition::IFR => self.ifr,
            FlightCondition::NA => self.unclassified,
        }
    }

    /// Share of lines that decoded, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            return 0.0;
        }
        self.reports_decoded as f64 / self.lines_read as f64 * 100.0
    }
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "Batch decoding complete".bright_green().bold())?;
        writeln!(
            f,
            "  {} {} files, {} reports",
            "Read:".bright_cyan(),
            self.files_read,
            self.lines_read
        )?;
        writeln!(
            f,
            "  {} {} ({:.1}%), {} failed",
            "Decoded:".bright_cyan(),
            self.reports_decoded,
            self.success_rate(),
            self.reports_failed
        )?;
        let conditions = FlightCondition::ALL
            .iter()
            .map(|condition| format!("{} {}", condition, self.count(*condition)))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "  {} {}", "Conditions:".bright_cyan(), conditions)?;
        write!(
            f,
            "  {} {}ms",
            "Elapsed:".bright_cyan(),
            self.processing_time_ms
        )
    }
}
