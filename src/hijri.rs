use chrono::{Datelike, NaiveDate};
use hijri_date::HijriDate;
use std::cell::RefCell;

use crate::timetable::TimetableError;

/// Minimum Gregorian year for Hijri conversion.
pub const HIJRI_MIN_YEAR: i32 = 1938;
/// Maximum Gregorian year for Hijri conversion.
pub const HIJRI_MAX_YEAR: i32 = 2076;

// Thread-local cache: gregorian -> (hijri_year, month, day). Placeholder
// generation converts consecutive dates, so a one-entry cache only saves the
// repeated lookups a caller makes for the same "today".
thread_local! {
    static HIJRI_CACHE: RefCell<Option<(NaiveDate, usize, usize, usize)>> = const { RefCell::new(None) };
}

/// Converts a Gregorian date to Hijri.
///
/// # Errors
/// Returns `DateOutOfRange` if outside 1938-2076.
pub fn to_hijri(date: NaiveDate) -> Result<HijriDate, TimetableError> {
    let cached = HIJRI_CACHE.with(|cache| {
        cache.borrow().as_ref().and_then(|(d, y, m, day)| {
            if *d == date { Some((*y, *m, *day)) } else { None }
        })
    });

    if let Some((y, m, d)) = cached {
        return HijriDate::from_hijri(y, m, d).map_err(|_| TimetableError::date_out_of_range(date));
    }

    if date.year() < HIJRI_MIN_YEAR || date.year() > HIJRI_MAX_YEAR {
        return Err(TimetableError::date_out_of_range(date));
    }

    let hijri = HijriDate::from_gr(date.year() as usize, date.month() as usize, date.day() as usize)
        .map_err(|_| TimetableError::date_out_of_range(date))?;

    HIJRI_CACHE.with(|cache| {
        *cache.borrow_mut() = Some((date, hijri.year(), hijri.month(), hijri.day()));
    });

    Ok(hijri)
}

/// Display label for a Gregorian date, e.g. "5 Ramadhan 1447".
pub fn hijri_label(date: NaiveDate) -> Result<String, TimetableError> {
    let hijri = to_hijri(date)?;
    Ok(format!(
        "{} {} {}",
        hijri.day(),
        hijri_month_name(hijri.month()),
        hijri.year()
    ))
}

/// Returns the Hijri month name.
pub fn hijri_month_name(month: usize) -> &'static str {
    match month {
        1 => "Muharram",
        2 => "Safar",
        3 => "Rabi' al-Awwal",
        4 => "Rabi' al-Thani",
        5 => "Jumada al-Ula",
        6 => "Jumada al-Akhirah",
        7 => "Rajab",
        8 => "Sha'ban",
        9 => "Ramadhan",
        10 => "Shawwal",
        11 => "Dhu al-Qi'dah",
        12 => "Dhu al-Hijjah",
        _ => "Unknown",
    }
}
