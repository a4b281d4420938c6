#![allow(dead_code)]

pub mod scripted_source;

pub use scripted_source::ScriptedSource;

use chrono::{DateTime, Utc};

pub fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}
