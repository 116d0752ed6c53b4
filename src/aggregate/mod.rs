//! Descriptive statistics over runner records
//!
//! [`Aggregator::aggregate`] turns one year's records into a [`Report`].
//! Raw text fields are coerced here, field by field: ages must be whole
//! non-negative numbers, paces `m:ss` and finish times `h:mm:ss`. Values
//! that do not parse are left out of that statistic only.

pub mod central;
pub mod clock;

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::constants::{DEFAULT_TOP_CITIES, MARATHON_MILES, SEX_FEMALE, SEX_MALE};
use crate::models::Runner;

pub use central::{CentralTendency, Mode};

/// How many finishers came from one city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

/// Statistics for one year's finishers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub runner_count: usize,
    pub state_count: usize,
    /// Whole miles run by all finishers together
    pub combined_distance: u64,
    /// Most frequent cities, highest count first, ties in first-seen order
    pub top_cities: Vec<CityCount>,
    /// `None` when no age parses
    pub age: Option<CentralTendency<u64>>,
    pub females: usize,
    pub males: usize,
    /// Seconds per mile
    pub pace: Option<CentralTendency<u64>>,
    /// Seconds
    pub finish_time: Option<CentralTendency<u64>>,
}

impl Report {
    /// Pace tendency rendered as `m:ss`
    pub fn pace_text(&self) -> Option<CentralTendency<String>> {
        self.pace.clone().map(|p| p.map(clock::format_pace))
    }

    /// Finish-time tendency rendered as `h:mm:ss`
    pub fn finish_time_text(&self) -> Option<CentralTendency<String>> {
        self.finish_time
            .clone()
            .map(|t| t.map(clock::format_finish_time))
    }
}

/// Computes [`Report`]s
#[derive(Debug, Clone)]
pub struct Aggregator {
    top_cities: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_CITIES)
    }
}

impl Aggregator {
    pub fn new(top_cities: usize) -> Self {
        Self { top_cities }
    }

    /// Summarise `runners`; `None` when there is nothing to summarise
    pub fn aggregate(&self, runners: &[Runner]) -> Option<Report> {
        if runners.is_empty() {
            return None;
        }

        let states: HashSet<&str> = runners.iter().map(|r| r.state.as_str()).collect();

        let ages: Vec<u64> = runners
            .iter()
            .filter_map(|r| r.age.trim().parse::<u64>().ok())
            .collect();
        let paces: Vec<u64> = runners
            .iter()
            .filter_map(|r| clock::parse_pace(&r.pace))
            .collect();
        let times: Vec<u64> = runners
            .iter()
            .filter_map(|r| clock::parse_finish_time(&r.time))
            .collect();

        debug!(
            "Aggregating {} runners: {} ages, {} paces, {} finish times usable",
            runners.len(),
            ages.len(),
            paces.len(),
            times.len()
        );

        Some(Report {
            runner_count: runners.len(),
            state_count: states.len(),
            combined_distance: combined_distance(runners.len()),
            top_cities: self.top_cities(runners),
            age: CentralTendency::of(&ages),
            females: runners.iter().filter(|r| r.sex == SEX_FEMALE).count(),
            males: runners.iter().filter(|r| r.sex == SEX_MALE).count(),
            pace: CentralTendency::of(&paces),
            finish_time: CentralTendency::of(&times),
        })
    }

    fn top_cities(&self, runners: &[Runner]) -> Vec<CityCount> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for runner in runners {
            *counts.entry(runner.city.as_str()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(self.top_cities)
            .map(|(city, count)| CityCount {
                city: city.to_string(),
                count,
            })
            .collect()
    }
}

/// Summarise `runners` with default settings
pub fn aggregate(runners: &[Runner]) -> Option<Report> {
    Aggregator::default().aggregate(runners)
}

fn combined_distance(runner_count: usize) -> u64 {
    (runner_count as f64 * MARATHON_MILES).floor() as u64
}
