//! Application Controller: the actions a user can trigger, checked against
//! the one-record-per-day rule and written through the Record Store.

use crate::core::timer::Stopwatch;
use crate::core::view::View;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::ui::messages::warning;
use crate::utils::date::{self, at_midnight, format_date, parse_date_strict};
use crate::utils::time::{clock_to_decimal, decimal_to_clock, sum_as_clock};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Hours a working day is measured against when the stopwatch is stopped.
pub const DEFAULT_BASELINE_HOURS: f64 = 9.0;

/// Shortfall rule for stopwatch saves: a day shorter than the baseline is
/// stored as `hours - baseline` (a negative value), otherwise unchanged.
pub fn apply_shortfall_policy(hours: f64, baseline: f64) -> f64 {
    if hours < baseline {
        hours - baseline
    } else {
        hours
    }
}

/// Outcome of an action that created a record.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedEntry {
    pub record: Record,
    /// Hours as shown back to the user.
    pub shown_hours: String,
}

impl fmt::Display for SavedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Data saved: {}, Hours: {}",
            self.record.date_str(),
            self.shown_hours
        )
    }
}

type Clock = Box<dyn Fn() -> NaiveDateTime>;

pub struct Controller<V: View> {
    store: RecordStore,
    stopwatch: Stopwatch,
    view: V,
    clock: Clock,
    baseline_hours: f64,
}

impl<V: View> Controller<V> {
    /// A controller with an auto-started stopwatch and the local wall clock.
    pub fn new(store: RecordStore, view: V) -> Self {
        Self {
            store,
            stopwatch: Stopwatch::new(),
            view,
            clock: Box::new(date::now),
            baseline_hours: DEFAULT_BASELINE_HOURS,
        }
    }

    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveDateTime + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_baseline_hours(mut self, hours: f64) -> Self {
        self.baseline_hours = hours;
        self
    }

    pub fn with_stopwatch(mut self, stopwatch: Stopwatch) -> Self {
        self.stopwatch = stopwatch;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Forward one second of wall-clock time to the stopwatch.
    pub fn tick(&mut self) {
        self.stopwatch.tick();
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)().date()
    }

    fn ensure_no_record_for(&self, date: &NaiveDate) -> AppResult<()> {
        if self.store.exists_for_date(date)? {
            return Err(AppError::DuplicateDate(format_date(date)));
        }
        Ok(())
    }

    /// Refresh after a committed write. The write stands either way, so a
    /// failed reload is only reported.
    fn refresh_after_write(&mut self) {
        if let Err(e) = self.refresh_view() {
            warning(format!("Record saved, but the view could not be refreshed: {}", e));
        }
    }

    /// Stop the stopwatch and record today's worked hours.
    ///
    /// Fails with `DuplicateDate` (timer untouched) when today already has a
    /// record. On success the display goes back to 00:00:00 and the
    /// stopwatch stays stopped.
    pub fn stop_and_save(&mut self) -> AppResult<SavedEntry> {
        let now = (self.clock)();
        self.ensure_no_record_for(&now.date())?;

        let worked = self.stopwatch.elapsed().as_decimal_hours();
        let hours = apply_shortfall_policy(worked, self.baseline_hours);

        let record = self.store.insert(&now, hours)?;

        self.stopwatch.reset_display();
        self.stopwatch.stop();
        self.refresh_after_write();

        Ok(SavedEntry {
            shown_hours: decimal_to_clock(hours),
            record,
        })
    }

    /// Record today's hours from an `HH:MM` string, as typed.
    pub fn manual_entry(&mut self, hhmm: &str) -> AppResult<SavedEntry> {
        let now = (self.clock)();
        self.ensure_no_record_for(&now.date())?;

        let hours = clock_to_decimal(hhmm)?;
        let record = self.store.insert(&now, hours)?;
        self.refresh_after_write();

        Ok(SavedEntry {
            record,
            shown_hours: hhmm.trim().to_string(),
        })
    }

    /// Record today's hours from an `HH:MM` string, negated.
    pub fn negative_entry(&mut self, hhmm: &str) -> AppResult<SavedEntry> {
        let now = (self.clock)();
        self.ensure_no_record_for(&now.date())?;

        let hours = clock_to_decimal(hhmm)?;
        let record = self.store.insert(&now, -hours)?;
        self.refresh_after_write();

        Ok(SavedEntry {
            record,
            shown_hours: format!("-{}", hhmm.trim()),
        })
    }

    /// Overwrite the date and hours of the selected record.
    ///
    /// Both inputs are validated before anything is written; an id that does
    /// not exist is a silent no-op at the store level.
    pub fn edit_record(
        &mut self,
        selected_id: Option<i64>,
        new_date: &str,
        new_hours: &str,
    ) -> AppResult<()> {
        let id = selected_id.ok_or(AppError::NoSelection)?;

        let date = parse_date_strict(new_date)?;
        let hours = clock_to_decimal(new_hours)?;

        self.store.update(id, &at_midnight(date), hours)?;
        self.refresh_after_write();
        Ok(())
    }

    /// Open the record browser and fill it.
    pub fn visualize_data(&mut self) -> AppResult<()> {
        self.view.show_browser();
        self.refresh_view()
    }

    /// Reload every record and the running total into the view.
    pub fn refresh_view(&mut self) -> AppResult<()> {
        let records = self.store.list_all()?;
        let total = sum_as_clock(records.iter().map(|r| r.hours));

        self.view.set_records(&records);
        self.view.set_summary_label(&format!("Total hours: {}", total));
        Ok(())
    }
}
