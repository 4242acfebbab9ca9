//! View window: view-mode derivation, slot labels and navigation.
//!
//! The selected [`DateRange`] fully determines the [`ViewMode`] and the slot
//! axis of the grid. [`labels_for_view`] is a pure function of
//! `(mode, range)`; slot index `i` in the grid is label `i`.

pub mod calendar;

use std::{fmt, str::FromStr};

use jiff::{
    civil::{Date, DateTime, Time},
    Span, ToSpan,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use calendar::{days_between, ordinal, start_of_week, weeks_in_month, MONTH_ABBREVIATIONS};

const HOURS_PER_DAY: i64 = 24;

/// Granularity of the grid, derived from the length of the date range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One slot per hour
    Day,
    /// One slot per calendar day
    Week,
    /// One slot per calendar week of the month
    Month,
    /// One slot per calendar month
    Year,
}

impl ViewMode {
    /// Derives the mode from the whole days elapsed across `range`: none is
    /// `Day`, up to seven `Week`, up to 31 `Month`, anything longer `Year`.
    ///
    /// Uses the same truncated day count as the week placement formula.
    pub fn for_range(range: &DateRange) -> Self {
        match days_between(range.to, range.from) {
            days if days < 1 => ViewMode::Day,
            days if days <= 7 => ViewMode::Week,
            days if days <= 31 => ViewMode::Month,
            _ => ViewMode::Year,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::Year => "year",
        }
    }

    /// Calendar step used to page the window backwards and forwards.
    fn step(self) -> Span {
        match self {
            ViewMode::Day => 1.day(),
            ViewMode::Week => 1.week(),
            ViewMode::Month => 1.month(),
            ViewMode::Year => 1.year(),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            "year" => Ok(ViewMode::Year),
            _ => Err(format!("Invalid view mode: {s}")),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The selected time window, both ends inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime,
    pub to: DateTime,
}

impl DateRange {
    /// Creates a window from `from` to `to`, or to the end of `from`'s day
    /// when `to` is omitted.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidInput`] if `to` is before `from`.
    pub fn new(from: DateTime, to: Option<DateTime>) -> Result<Self> {
        let to = to.unwrap_or_else(|| from.end_of_day());
        if to < from {
            return Err(RosterError::invalid_input("to")
                .with_reason("End of the date range must not be before its start"));
        }
        Ok(Self { from, to })
    }

    /// The whole calendar day containing `now`.
    pub fn today(now: DateTime) -> Self {
        Self {
            from: now.start_of_day(),
            to: now.end_of_day(),
        }
    }

    /// The canonical window of `mode` around `anchor`: the day itself, its
    /// Sunday-to-Saturday week, its calendar month, or its calendar year.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Date`] if the window falls outside the
    /// supported calendar range.
    pub fn around(mode: ViewMode, anchor: Date) -> Result<Self> {
        let (first, last) = match mode {
            ViewMode::Day => (anchor, anchor),
            ViewMode::Week => {
                let sunday = start_of_week(anchor);
                (sunday, sunday.checked_add(6.days())?)
            }
            ViewMode::Month => (anchor.first_of_month(), anchor.last_of_month()),
            ViewMode::Year => (
                Date::new(anchor.year(), 1, 1)?,
                Date::new(anchor.year(), 12, 31)?,
            ),
        };
        Ok(Self {
            from: first.to_datetime(Time::midnight()),
            to: last.to_datetime(Time::midnight()).end_of_day(),
        })
    }

    /// Granularity derived from this window's length.
    pub fn mode(&self) -> ViewMode {
        ViewMode::for_range(self)
    }

    /// Returns true if `instant` lies within the window, ends included.
    pub fn contains(&self, instant: DateTime) -> bool {
        self.from <= instant && instant <= self.to
    }

    /// The window one view-mode step earlier. Day and week windows keep
    /// their length; month and year windows become the whole calendar month
    /// or year the shifted start falls in.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Date`] at the edges of the calendar.
    pub fn previous(&self) -> Result<Self> {
        self.shifted(self.mode().step().negate())
    }

    /// The window one view-mode step later. Day and week windows keep their
    /// length; month and year windows become the whole calendar month or
    /// year the shifted start falls in.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Date`] at the edges of the calendar.
    pub fn next(&self) -> Result<Self> {
        self.shifted(self.mode().step())
    }

    fn shifted(&self, step: Span) -> Result<Self> {
        let mode = self.mode();
        let from = self.from.checked_add(step)?;
        match mode {
            // Calendar months and years differ in length
            ViewMode::Month | ViewMode::Year => Self::around(mode, from.date()),
            ViewMode::Day | ViewMode::Week => {
                let length = self.to.duration_since(self.from);
                Ok(Self {
                    from,
                    to: from.checked_add(length)?,
                })
            }
        }
    }
}

/// Ordered slot labels for `mode` over `range`.
///
/// - `Day`: 24 hourly labels (`"14:00"`) for the day of `range.from`
/// - `Week`: one label per calendar day in the range (`"Monday the 1st"`)
/// - `Month`: one label per week of `range.from`'s month (`"1st week of Jan"`)
/// - `Year`: one label per month (`"Jan"`)
pub fn labels_for_view(mode: ViewMode, range: &DateRange) -> Vec<String> {
    match mode {
        ViewMode::Day => (0..HOURS_PER_DAY).map(|hour| format!("{hour:02}:00")).collect(),
        ViewMode::Week => {
            let last = range.to.date();
            range
                .from
                .date()
                .series(1.day())
                .take_while(|day| *day <= last)
                .map(|day| {
                    format!(
                        "{} the {}",
                        day.strftime("%A"),
                        ordinal(i64::from(day.day()))
                    )
                })
                .collect()
        }
        ViewMode::Month => {
            let anchor = range.from.date();
            let month = MONTH_ABBREVIATIONS[month_index(anchor)];
            (1..=weeks_in_month(anchor))
                .map(|week| format!("{} week of {month}", ordinal(week)))
                .collect()
        }
        ViewMode::Year => MONTH_ABBREVIATIONS.iter().map(ToString::to_string).collect(),
    }
}

/// Zero-based month of `date`.
pub(crate) fn month_index(date: Date) -> usize {
    usize::try_from(date.month() - 1).unwrap_or_default()
}
