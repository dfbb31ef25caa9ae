//! Lanternfish population growth.
//!
//! Individual fish are never tracked; the school is a histogram of timers,
//! so a day of simulation is a rotation of nine counters.

use crate::{AocError, ParseErrorKind};
use aoc_common::lanternfish::{NEWBORN_TIMER, RESET_TIMER, TIMER_STATES};
use log::debug;

/// Population grouped by days left until spawning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct School {
    counts: [u64; TIMER_STATES],
}

impl School {
    /// Builds a school from individual fish timers.
    ///
    /// # Errors
    ///
    /// [`ParseErrorKind::TimerOutOfRange`] for a timer above the newborn
    /// timer.
    pub fn from_timers(timers: impl IntoIterator<Item = usize>) -> Result<Self, AocError> {
        let mut school = Self::default();
        for timer in timers {
            let slot = school.counts.get_mut(timer).ok_or_else(|| {
                AocError::parse(timer.to_string(), ParseErrorKind::TimerOutOfRange(timer))
            })?;
            *slot += 1;
        }
        Ok(school)
    }

    pub fn count_at(&self, timer: usize) -> u64 {
        self.counts.get(timer).copied().unwrap_or(0)
    }

    /// Advances one day: every timer drops by one and each fish at zero
    /// restarts at the reset timer alongside a newborn.
    ///
    /// # Errors
    ///
    /// [`AocError::PopulationOverflow`] if the school outgrows `u64`; the
    /// school is left unchanged.
    pub fn step(&mut self) -> Result<(), AocError> {
        self.simulate(1)
    }

    /// Runs `days` steps, stopping at the first day that would overflow.
    ///
    /// On error the school holds the population of the last good day.
    pub fn simulate(&mut self, days: usize) -> Result<(), AocError> {
        for day in 1..=days {
            self.counts = self.advanced().ok_or(AocError::PopulationOverflow { day })?;
        }
        debug!("after {days} days: {:?}", self.counts);
        Ok(())
    }

    /// Never overflows: every step checks that the new total fits.
    pub fn population(&self) -> u64 {
        self.counts.iter().sum()
    }

    fn advanced(&self) -> Option<[u64; TIMER_STATES]> {
        let mut next = self.counts;
        next.rotate_left(1);
        next[RESET_TIMER] = next[RESET_TIMER].checked_add(next[NEWBORN_TIMER])?;
        next.iter().try_fold(0u64, |total, &count| total.checked_add(count))?;
        Some(next)
    }
}
