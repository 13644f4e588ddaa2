// ABOUTME: Scheduling collaborator choosing the date of the next training session
// ABOUTME: Weekday scheduler picking the earliest strictly-later preferred training day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Days, NaiveDate};
use pierre_core::models::WeekDay;

/// Decides when the next session takes place
pub trait SessionScheduler: Send + Sync {
    /// Next session date after `reference_date`, or `None` for manual scheduling
    fn next_session_date(
        &self,
        reference_date: NaiveDate,
        preferred_days: &[WeekDay],
    ) -> Option<NaiveDate>;
}

/// Schedules on the closest preferred weekday after the reference date
///
/// The reference date itself never qualifies, even when it falls on a
/// preferred day. [`WeekDay::Custom`] entries are ignored; with no usable
/// weekday the session is left for manual scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekdayScheduler;

impl SessionScheduler for WeekdayScheduler {
    fn next_session_date(
        &self,
        reference_date: NaiveDate,
        preferred_days: &[WeekDay],
    ) -> Option<NaiveDate> {
        let current = reference_date.weekday().num_days_from_monday();

        preferred_days
            .iter()
            .filter_map(|day| day.to_chrono())
            .filter_map(|target| {
                let ahead = (target.num_days_from_monday() + 7 - current) % 7;
                let ahead = if ahead == 0 { 7 } else { ahead };
                reference_date.checked_add_days(Days::new(u64::from(ahead)))
            })
            .min()
    }
}
