use chrono::{Datelike, NaiveDate, Utc};

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// splitmix64 finalizer.
fn mix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Index of the quote of the day for a collection of `len` quotes.
///
/// Same date and length always give the same index. `len` must be non-zero.
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    debug_assert!(len > 0);
    let day = date.num_days_from_ce() as u64;
    let seed = mix64(day) ^ (len as u64).wrapping_mul(0xD6E8_FEB8_6659_FD93);
    (mix64(seed) % len as u64) as usize
}
