//! Central tendency over whole-number series
//!
//! Mean and median are truncated to integers. The mode is only reported when
//! exactly one value is the most frequent; ties come back as
//! [`Mode::NoUniqueMode`].

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// Most frequent value of a series, if it is unique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode<T> {
    Unique(T),
    NoUniqueMode,
}

impl<T> Mode<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Mode::Unique(v) => Some(v),
            Mode::NoUniqueMode => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Mode<U> {
        match self {
            Mode::Unique(v) => Mode::Unique(f(v)),
            Mode::NoUniqueMode => Mode::NoUniqueMode,
        }
    }
}

/// Mean, median and mode of one series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CentralTendency<T> {
    pub mean: T,
    pub median: T,
    pub mode: Mode<T>,
}

impl CentralTendency<u64> {
    /// `None` for an empty series
    pub fn of(values: &[u64]) -> Option<Self> {
        Some(Self {
            mean: mean(values)?,
            median: median(values)?,
            mode: mode(values),
        })
    }
}

impl<T> CentralTendency<T> {
    pub fn map<U>(self, f: impl Fn(T) -> U) -> CentralTendency<U> {
        CentralTendency {
            mean: f(self.mean),
            median: f(self.median),
            mode: self.mode.map(&f),
        }
    }
}

pub fn mean(values: &[u64]) -> Option<u64> {
    if values.is_empty() {
        return None;
    }
    let total: u128 = values.iter().map(|&v| u128::from(v)).sum();
    // the mean never exceeds the largest value, so it fits back in u64
    u64::try_from(total / values.len() as u128).ok()
}

/// Middle value; for an even count, the truncated midpoint of the two middle values
pub fn median(values: &[u64]) -> Option<u64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        u64::try_from((u128::from(sorted[mid - 1]) + u128::from(sorted[mid])) / 2).ok()
    }
}

pub fn mode<T: Copy + Eq + Hash>(values: &[T]) -> Mode<T> {
    let mut counts: HashMap<T, usize> = HashMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let Some(&top) = counts.values().max() else {
        return Mode::NoUniqueMode;
    };
    let mut leaders = counts.iter().filter(|&(_, &count)| count == top);
    match (leaders.next(), leaders.next()) {
        (Some((&value, _)), None) => Mode::Unique(value),
        _ => Mode::NoUniqueMode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_truncates() {
        assert_eq!(mean(&[30, 31, 33]), Some(31));
        assert_eq!(mean(&[1, 2]), Some(1));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        assert_eq!(mean(&[u64::MAX, u64::MAX, u64::MAX - 3]), Some(u64::MAX - 1));
        assert_eq!(median(&[u64::MAX, u64::MAX - 1]), Some(u64::MAX - 1));
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[40, 20, 30]), Some(30));
        assert_eq!(median(&[20, 31, 40, 30]), Some(30));
        assert_eq!(median(&[5]), Some(5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_mode_without_repeats_has_no_unique_mode() {
        assert_eq!(mode(&[30u64, 31, 32]), Mode::NoUniqueMode);
    }

    #[test]
    fn test_mode_tie_has_no_unique_mode() {
        assert_eq!(mode(&[30u64, 30, 41, 41, 50]), Mode::NoUniqueMode);
    }

    #[test]
    fn test_mode_unique() {
        assert_eq!(mode(&[30u64, 41, 41, 50]), Mode::Unique(41));
        assert_eq!(mode(&[7u64]), Mode::Unique(7));
        assert_eq!(mode::<u64>(&[]), Mode::NoUniqueMode);
    }

    #[test]
    fn test_central_tendency_map() {
        let central = CentralTendency::of(&[390, 390, 420]).unwrap();
        assert_eq!(central.mode.value(), Some(&390));

        let text = central.map(|s| format!("{}s", s));
        assert_eq!(text.mean, "400s");
        assert_eq!(text.median, "390s");
        assert_eq!(text.mode, Mode::Unique("390s".to_string()));
    }
}
