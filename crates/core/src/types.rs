/// Problem ids are plain integers; newly created records use Unix milliseconds.
pub type ProblemId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current time as an ISO-8601 string with millisecond precision (`2024-05-01T12:00:00.000Z`).
pub fn iso_timestamp(at: Timestamp) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Calendar date portion of `at` as `YYYY-MM-DD`.
pub fn iso_date(at: Timestamp) -> String {
    at.format("%Y-%m-%d").to_string()
}
