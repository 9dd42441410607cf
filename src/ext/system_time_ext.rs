use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Format used by `ls -l` for modification times.
pub const LISTING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub trait SystemTimeExt {
    fn to_local(&self) -> DateTime<Local>;

    fn to_listing_string(&self) -> String {
        self.to_local().format(LISTING_TIME_FORMAT).to_string()
    }
}

impl SystemTimeExt for SystemTime {
    fn to_local(&self) -> DateTime<Local> {
        DateTime::<Local>::from(*self)
    }
}
