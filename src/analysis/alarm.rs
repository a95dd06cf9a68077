//! Alarms scheduled by the time module.
//!
//! Alarms live in their own partition above the partition base. The partition
//! starts with a header register whose first byte is `0xAA` and whose second
//! byte is the partition's length in registers. Each alarm record is one
//! register holding the trigger time, optionally followed by a repeat interval
//! register and by registers holding the alarm's message.

use crate::memory::{MemoryImage, PARTITION_BASE};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// Seconds between 1900-01-01 and 1970-01-01.
pub const EPOCH_OFFSET: i64 = 2_208_988_800;

/// Marks the start of the alarm partition.
pub const PARTITION_START: u8 = 0xAA;

/// Marks the end of the partition area.
pub const PARTITION_END: u8 = 0xF0;

/// A scheduled alarm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alarm {
    /// Trigger time in Unix seconds, shifted into local time.
    pub time: i64,
    pub repeating: bool,

    /// Repeat interval in seconds, 0 for one-shot alarms.
    pub interval: u64,
    pub name: String,
}

impl Alarm {
    /// The trigger time as a calendar date and time.
    pub fn local_time(&self) -> Option<NaiveDateTime> {
        DateTime::<Utc>::from_timestamp(self.time, 0).map(|t| t.naive_utc())
    }
}

/// Decode the 11 BCD digits at the start of a register, in tenths of
/// seconds.
fn bcd_tenths(reg: &[u8]) -> u64 {
    let pairs = reg[..5]
        .iter()
        .fold(0, |acc, b| acc * 100 + (b >> 4) as u64 * 10 + (b & 0x0F) as u64);

    pairs * 10 + (reg[5] >> 4) as u64
}

/// Locate the alarm partition, returning its header register and length.
fn find_partition(image: &MemoryImage, limit: usize) -> Option<(usize, usize)> {
    (PARTITION_BASE..limit).find_map(|reg| match image.register(reg) {
        Some(r) if r[0] == PARTITION_START => Some((reg, r[1] as usize)),
        _ => None,
    })
}

/// Decode every alarm in the alarm partition.
///
/// `tz_offset` is the local time zone's offset from UTC, in seconds.
///
/// If a record turns out to be the partition end marker, every alarm decoded
/// so far is dropped and no alarms are returned.
pub fn index(image: &MemoryImage, tz_offset: i64) -> Vec<Alarm> {
    let limit = image.status().program_limit;
    let (header, length) = match find_partition(image, limit) {
        Some(found) => found,
        None => return vec![],
    };

    let mut alarms = Vec::new();
    let mut reg = header + 1;
    let mut consumed = 0;

    while consumed < length && reg < limit {
        let record = match image.register(reg) {
            Some(record) => record,
            None => break,
        };

        if record[0] == PARTITION_END {
            tracing::debug!("Alarm partition ended at register {}", reg);
            alarms.clear();
            break;
        }

        let tenths = bcd_tenths(record);
        let repeating = record[5] & 0x0F != 0;
        let name_registers = (record[6] & 0x0F) as usize;
        reg += 1;

        let interval = if repeating {
            let interval = image.register(reg).map_or(0, |r| bcd_tenths(r) / 10);
            reg += 1;

            interval
        } else {
            0
        };

        let mut name = String::new();
        for _ in 0..name_registers {
            if let Some(r) = image.register(reg) {
                name.extend(r.iter().filter(|b| **b != 0).map(|b| char::from(*b)));
            }

            reg += 1;
        }

        if name_registers == 0 {
            name = "ALARM".to_string();
        }

        consumed = reg - header - 1;
        alarms.push(Alarm {
            time: (tenths / 10) as i64 - EPOCH_OFFSET + tz_offset,
            repeating,
            interval,
            name,
        });
    }

    alarms
}

/// The host's offset from UTC, in seconds.
pub fn local_tz_offset() -> i64 {
    chrono::Local::now().offset().local_minus_utc() as i64
}
