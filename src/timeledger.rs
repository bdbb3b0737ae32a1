//! Time accounting for an account record.
//!
//! Three counters: lifetime time online, time online today, and the
//! extra-time bank ("banktime"). Time-on is kept in whole seconds; the bank
//! is persisted in whole minutes even though awards arrive as fractional
//! durations. Daily counters are reset once per session-day by an external
//! caller, never by this ledger.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLedger {
    timeon_secs: u32,
    today_secs: u32,
    banktime_minutes: u16,
}

fn whole_seconds(d: Duration) -> u32 {
    u32::try_from(d.as_secs()).unwrap_or(u32::MAX)
}

impl TimeLedger {
    /// Lifetime time online.
    pub fn time_on(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeon_secs))
    }

    /// Time online today.
    pub fn time_on_today(&self) -> Duration {
        Duration::from_secs(u64::from(self.today_secs))
    }

    pub fn set_time_on(&mut self, d: Duration) {
        self.timeon_secs = whole_seconds(d);
    }

    pub fn set_time_on_today(&mut self, d: Duration) {
        self.today_secs = whole_seconds(d);
    }

    /// Add to lifetime time online and return the new total.
    pub fn add_time_on(&mut self, d: Duration) -> Duration {
        self.timeon_secs = self.timeon_secs.saturating_add(whole_seconds(d));
        self.time_on()
    }

    /// Add to today's time online and return the new total.
    pub fn add_time_on_today(&mut self, d: Duration) -> Duration {
        self.today_secs = self.today_secs.saturating_add(whole_seconds(d));
        self.time_on_today()
    }

    pub fn banktime_minutes(&self) -> u16 {
        self.banktime_minutes
    }

    pub fn set_banktime_minutes(&mut self, minutes: u16) {
        self.banktime_minutes = minutes;
    }

    /// Credit the bank. Fractional awards truncate to whole minutes, so an
    /// award under one minute credits nothing. Returns the new balance.
    pub fn add_extra_time(&mut self, d: Duration) -> u16 {
        let minutes = u16::try_from(d.as_secs() / 60).unwrap_or(u16::MAX);
        self.banktime_minutes = self.banktime_minutes.saturating_add(minutes);
        self.banktime_minutes
    }

    /// Debit the bank, clamping at zero. Returns the new balance.
    pub fn subtract_extra_time(&mut self, d: Duration) -> u16 {
        let minutes = u16::try_from(d.as_secs() / 60).unwrap_or(u16::MAX);
        self.banktime_minutes = self.banktime_minutes.saturating_sub(minutes);
        self.banktime_minutes
    }

    /// Zero today's counter. Called by the session layer at the day
    /// boundary.
    pub fn reset_today(&mut self) {
        self.today_secs = 0;
    }
}
