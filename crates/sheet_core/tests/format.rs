use chrono::{FixedOffset, Utc};
use pretty_assertions::assert_eq;
use sheet_core::{
    format_date_time, format_date_time_in, format_file_size, truncate, DEFAULT_TRUNCATE_LENGTH,
    INVALID_DATE,
};

#[test]
fn file_size_zero_is_literal() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn file_size_picks_base_1024_units() {
    assert_eq!(format_file_size(1), "1 Bytes");
    assert_eq!(format_file_size(1023), "1023 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
}

#[test]
fn file_size_rounds_to_two_decimals() {
    // 1234567 / 1024^2 = 1.1773...
    assert_eq!(format_file_size(1_234_567), "1.18 MB");
    // 1025 / 1024 = 1.00097...
    assert_eq!(format_file_size(1025), "1 KB");
    // Rounds up into the next whole number but keeps the unit.
    assert_eq!(format_file_size(1024 * 1024 - 1), "1024 KB");
}

#[test]
fn file_size_stays_in_gigabytes_above_a_terabyte() {
    assert_eq!(format_file_size(1024u64.pow(4)), "1024 GB");
    assert_eq!(format_file_size(2 * 1024u64.pow(4)), "2048 GB");
}

#[test]
fn truncate_keeps_short_strings() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
    assert_eq!(truncate("", 0), "");
}

#[test]
fn truncate_cuts_and_appends_ellipsis() {
    assert_eq!(truncate("hello world", 5), "hello...");
    assert_eq!(truncate("abc", 0), "...");
}

#[test]
fn truncate_counts_chars_not_bytes() {
    assert_eq!(truncate("héllo wörld", 7), "héllo w...");
    assert_eq!(truncate("日本語のテキスト", 3), "日本語...");
}

#[test]
fn truncate_default_length_is_fifty() {
    let long = "x".repeat(60);
    let cut = truncate(&long, DEFAULT_TRUNCATE_LENGTH);
    assert_eq!(cut.len(), 53);
    assert!(cut.ends_with("..."));
}

#[test]
fn date_time_formats_rfc3339_in_target_zone() {
    assert_eq!(
        format_date_time_in("2024-01-15T14:30:00Z", &Utc),
        "1/15/2024, 2:30:00 PM"
    );
    let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    assert_eq!(
        format_date_time_in("2024-01-15T14:30:00Z", &ist),
        "1/15/2024, 8:00:00 PM"
    );
    assert_eq!(
        format_date_time_in("2024-01-15T00:05:09+02:00", &Utc),
        "1/14/2024, 10:05:09 PM"
    );
}

#[test]
fn date_time_accepts_http_dates() {
    assert_eq!(
        format_date_time_in("Mon, 15 Jan 2024 14:30:00 GMT", &Utc),
        "1/15/2024, 2:30:00 PM"
    );
}

#[test]
fn date_time_naive_values_are_wall_clock_in_target_zone() {
    let plus_one = FixedOffset::east_opt(3600).unwrap();
    assert_eq!(
        format_date_time_in("2024-03-01T09:15:00", &plus_one),
        "3/1/2024, 9:15:00 AM"
    );
    assert_eq!(
        format_date_time_in("2024-03-01 09:15:00.250", &plus_one),
        "3/1/2024, 9:15:00 AM"
    );
    assert_eq!(
        format_date_time_in("2024-03-01T00:00", &Utc),
        "3/1/2024, 12:00:00 AM"
    );
}

#[test]
fn date_time_bare_date_is_utc_midnight() {
    assert_eq!(
        format_date_time_in("2024-07-04", &Utc),
        "7/4/2024, 12:00:00 AM"
    );
    let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
    assert_eq!(
        format_date_time_in("2024-07-04", &minus_five),
        "7/3/2024, 7:00:00 PM"
    );
}

#[test]
fn date_time_trims_surrounding_whitespace() {
    assert_eq!(
        format_date_time_in("  2024-01-15T14:30:00Z\n", &Utc),
        "1/15/2024, 2:30:00 PM"
    );
}

#[test]
fn date_time_unparseable_input_degrades() {
    assert_eq!(format_date_time_in("not a date", &Utc), INVALID_DATE);
    assert_eq!(format_date_time_in("", &Utc), INVALID_DATE);
    assert_eq!(format_date_time_in("2024-13-40", &Utc), INVALID_DATE);
    assert_eq!(format_date_time("yesterday"), INVALID_DATE);
}
