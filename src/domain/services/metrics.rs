use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::models::rsvp::RsvpRecord;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusiestDay {
    pub date: NaiveDate,
    pub label: String,
    pub total: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total: usize,
    pub attending: usize,
    pub not_attending: usize,
    pub attending_rate: u32,
    pub not_attending_rate: u32,
    pub total_guests: i64,
    pub avg_confirmed_guests: f64,
    pub latest_submission: Option<RsvpRecord>,
    pub busiest_day: Option<BusiestDay>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: NaiveDate,
    pub label: String,
    pub attending_count: usize,
    pub not_attending_count: usize,
    pub total: usize,
    pub attending_ratio: u32,
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// UTC calendar day of the submission.
fn day_key(record: &RsvpRecord) -> NaiveDate {
    record.created_at.date_naive()
}

/// `records` must already be newest first; the first one is reported as the latest.
pub fn summarize(records: &[RsvpRecord]) -> Metrics {
    let total = records.len();
    let attending = records.iter().filter(|r| r.attendance.is_attending()).count();
    let not_attending = total - attending;

    let total_guests: i64 = records.iter().map(|r| i64::from(r.guest_count)).sum();
    let confirmed_guests: i64 = records
        .iter()
        .filter(|r| r.attendance.is_attending())
        .map(|r| i64::from(r.guest_count))
        .sum();

    let avg_confirmed_guests = if attending > 0 {
        confirmed_guests as f64 / attending as f64
    } else {
        0.0
    };

    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *per_day.entry(day_key(record)).or_default() += 1;
    }

    // Ascending iteration plus a strict comparison: the earliest date wins a tie.
    let mut busiest: Option<(NaiveDate, usize)> = None;
    for (date, count) in per_day {
        if busiest.is_none_or(|(_, best)| count > best) {
            busiest = Some((date, count));
        }
    }

    Metrics {
        total,
        attending,
        not_attending,
        attending_rate: percent(attending, total),
        not_attending_rate: percent(not_attending, total),
        total_guests,
        avg_confirmed_guests,
        latest_submission: records.first().cloned(),
        busiest_day: busiest.map(|(date, total)| BusiestDay {
            label: date.format("%A, %-d %B %Y").to_string(),
            date,
            total,
        }),
    }
}

/// One bucket per day that has submissions, oldest day first.
pub fn build_timeline(records: &[RsvpRecord]) -> Vec<DayBucket> {
    let mut per_day: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();
    for record in records {
        let counts = per_day.entry(day_key(record)).or_default();
        if record.attendance.is_attending() {
            counts.0 += 1;
        } else {
            counts.1 += 1;
        }
    }

    per_day
        .into_iter()
        .map(|(date, (attending, not_attending))| {
            let total = attending + not_attending;
            DayBucket {
                label: date.format("%a, %-d %b").to_string(),
                date,
                attending_count: attending,
                not_attending_count: not_attending,
                total,
                attending_ratio: percent(attending, total),
            }
        })
        .collect()
}
