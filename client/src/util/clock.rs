//! Today's date in the browser's local time zone.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::Date;

/// Local calendar date. Off the browser this is the UTC date.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        from_js_parts(now.get_full_year(), now.get_month(), now.get_date()).unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Build a date from JavaScript `Date` getters (zero-based month).
#[cfg(any(test, feature = "hydrate"))]
fn from_js_parts(year: u32, month0: u32, day: u32) -> Option<Date> {
    use time::Month;

    let month = Month::try_from(u8::try_from(month0 + 1).ok()?).ok()?;
    Date::from_calendar_date(i32::try_from(year).ok()?, month, u8::try_from(day).ok()?).ok()
}
