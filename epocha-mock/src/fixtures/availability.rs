use chrono::{DateTime, Duration, NaiveDate, Utc};
use epocha_core::{Record, StateCode, Timestamp};

/// Hourly bins starting 2024-03-01T00:00Z. Each row is `(data, qc)`; `None`
/// means the bin did not report that channel.
type Row = (Option<StateCode>, Option<StateCode>);

fn rows_by_signal(s: &str) -> Option<&'static [Row]> {
    const STATION_A: &[Row] = &[
        (Some(1), Some(1)),
        (Some(1), Some(1)),
        (Some(1), Some(0)),
        (Some(0), Some(0)),
        (Some(1), Some(1)),
        (Some(1), Some(1)),
        (Some(1), Some(1)),
        (Some(0), Some(1)),
        (Some(1), Some(1)),
        (Some(1), None),
        (Some(0), Some(0)),
        (Some(0), Some(0)),
    ];
    const STATION_B: &[Row] = &[
        (Some(0), Some(1)),
        (Some(0), Some(1)),
        (Some(1), Some(1)),
        (Some(1), Some(1)),
        (Some(1), Some(1)),
        (Some(1), Some(1)),
        (Some(0), Some(0)),
        (Some(1), Some(1)),
        (Some(1), Some(1)),
        (Some(1), Some(1)),
        (Some(1), Some(1)),
        (Some(0), Some(1)),
    ];
    const STATION_C: &[Row] = &[
        (Some(1), Some(1)),
        (Some(0), Some(1)),
        (Some(1), Some(1)),
        (Some(0), Some(1)),
        (Some(1), Some(1)),
        (Some(0), Some(1)),
    ];
    const OFFLINE: &[Row] = &[(Some(0), Some(0)), (Some(0), Some(0)), (Some(0), Some(0))];
    match s {
        "station-a" => Some(STATION_A),
        "station-b" => Some(STATION_B),
        "station-c" => Some(STATION_C),
        "offline" => Some(OFFLINE),
        _ => None,
    }
}

/// Fixture base time.
#[must_use]
pub fn origin() -> Timestamp {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(DateTime::<Utc>::MIN_UTC, |dt| dt.and_utc())
}

/// Timestamp of hourly bin `i`.
#[must_use]
pub fn bin(i: usize) -> Timestamp {
    origin() + Duration::hours(i as i64)
}

/// All records for a signal, in time order.
pub fn by_signal(s: &str) -> Option<Vec<Record<Timestamp, StateCode>>> {
    let rows = rows_by_signal(s)?;
    Some(
        rows.iter()
            .enumerate()
            .map(|(i, (data, qc))| {
                let values = [("data", *data), ("qc", *qc)]
                    .into_iter()
                    .filter_map(|(k, v)| v.map(|v| (k, v)));
                Record::new(bin(i), values)
            })
            .collect(),
    )
}
