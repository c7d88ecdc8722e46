//! Calendar systems.
//!
//! Year bounds are stored in the reference (Gregorian) calendar and shown to
//! administrators and users in whatever calendar system is active. The
//! active system is provided by the host through [`CalendarSystem`]; this
//! crate never performs non-Gregorian arithmetic itself.

use serde::{Deserialize, Serialize};

use crate::limits::{REFERENCE_MAX_YEAR, REFERENCE_MIN_YEAR};

/// A calendar date in some calendar system. Month and day are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Creates a date.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// The first day of `year`.
    pub fn start_of_year(year: i32) -> Self {
        Self::new(year, 1, 1)
    }
}

/// Conversion between the active calendar system and the reference calendar.
pub trait CalendarSystem {
    /// Converts a reference-calendar date into the active calendar.
    fn convert_from_reference(&self, date: CalendarDate) -> CalendarDate;

    /// Converts an active-calendar date into the reference calendar.
    fn convert_to_reference(&self, date: CalendarDate) -> CalendarDate;

    /// Years offered by the year-choice controls, ascending.
    fn years(&self) -> Vec<i32>;
}

impl<C: CalendarSystem + ?Sized> CalendarSystem for &C {
    fn convert_from_reference(&self, date: CalendarDate) -> CalendarDate {
        (**self).convert_from_reference(date)
    }

    fn convert_to_reference(&self, date: CalendarDate) -> CalendarDate {
        (**self).convert_to_reference(date)
    }

    fn years(&self) -> Vec<i32> {
        (**self).years()
    }
}

/// The reference calendar itself: conversions are the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianCalendar;

impl CalendarSystem for GregorianCalendar {
    fn convert_from_reference(&self, date: CalendarDate) -> CalendarDate {
        date
    }

    fn convert_to_reference(&self, date: CalendarDate) -> CalendarDate {
        date
    }

    fn years(&self) -> Vec<i32> {
        (REFERENCE_MIN_YEAR..=REFERENCE_MAX_YEAR).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_identity() {
        let date = CalendarDate::new(2024, 2, 29);
        assert_eq!(GregorianCalendar.convert_from_reference(date), date);
        assert_eq!(GregorianCalendar.convert_to_reference(date), date);
    }

    #[test]
    fn test_gregorian_years() {
        let years = GregorianCalendar.years();
        assert_eq!(years.first(), Some(&1900));
        assert_eq!(years.last(), Some(&2050));
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_calendar_by_reference() {
        fn first_year(calendar: impl CalendarSystem) -> Option<i32> {
            calendar.years().first().copied()
        }
        let calendar = GregorianCalendar;
        assert_eq!(first_year(&calendar), Some(1900));
        let dynamic: &dyn CalendarSystem = &calendar;
        assert_eq!(first_year(dynamic), Some(1900));
    }
}
