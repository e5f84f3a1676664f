//! Visitor and active-user counters for the admin dashboard.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// How recently an admin must have been seen to count as active.
pub const ACTIVE_WINDOW_MINUTES: i64 = 5;

/// One document in `visitors`, keyed by the browser-local visitor id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    pub id: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Entity for Visitor {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One document in `activeUsers`, keyed by auth uid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveUser {
    pub id: String,
    pub last_active: Option<DateTime<Utc>>,
}

impl Entity for ActiveUser {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn active_since(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::minutes(ACTIVE_WINDOW_MINUTES)
}

pub fn count_active(users: &[ActiveUser], now: DateTime<Utc>) -> usize {
    let since = active_since(now);
    users
        .iter()
        .filter(|u| u.last_active.is_some_and(|t| t >= since))
        .count()
}

/// A single point of a per-day chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub label: String,
    pub count: usize,
}

/// Buckets timestamps by calendar day in `tz`, oldest day first.
/// Missing timestamps are gathered in a trailing "Unknown" bucket.
pub fn daily_counts<Tz, I>(stamps: I, tz: &Tz) -> Vec<DailyCount>
where
    Tz: TimeZone,
    I: IntoIterator<Item = Option<DateTime<Utc>>>,
{
    let mut days = BTreeMap::new();
    let mut unknown = 0usize;
    for stamp in stamps {
        match stamp {
            Some(t) => *days.entry(t.with_timezone(tz).date_naive()).or_insert(0usize) += 1,
            None => unknown += 1,
        }
    }

    let mut counts: Vec<DailyCount> = days
        .into_iter()
        .map(|(day, count)| DailyCount { label: day.format("%Y-%m-%d").to_string(), count })
        .collect();
    if unknown > 0 {
        counts.push(DailyCount { label: "Unknown".to_string(), count: unknown });
    }
    counts
}
