//! Human-readable report for one year

use std::io::Write;

use super::format::group_digits;
use crate::aggregate::{CentralTendency, Report};

const NO_UNIQUE_MODE: &str = "no unique mode";

/// Write the summary for `year` to `out`
pub fn render_report<W: Write>(out: &mut W, year: u16, report: &Report) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} Marathon Runners in {}", group_digits(report.runner_count as u64), year)?;
    writeln!(out, "From {} different states", report.state_count)?;
    writeln!(
        out,
        "Total distance combined ==> {}+ miles",
        group_digits(report.combined_distance)
    )?;

    writeln!(out, "Mostly from (top-{} cities):", report.top_cities.len())?;
    for city in &report.top_cities {
        writeln!(out, "- {} ({})", city.city, group_digits(city.count as u64))?;
    }

    let age = report
        .age
        .clone()
        .map(|age| age.map(|years| years.to_string()));
    writeln!(out, "Average age: {}", tendency_line(age))?;

    writeln!(out, "Females: {}!", group_digits(report.females as u64))?;
    writeln!(out, "Males: {}!", group_digits(report.males as u64))?;

    writeln!(out, "Average Pace: {}", tendency_line(report.pace_text()))?;
    writeln!(out, "Average Finish Time: {}", tendency_line(report.finish_time_text()))?;
    Ok(())
}

fn tendency_line(tendency: Option<CentralTendency<String>>) -> String {
    match tendency {
        Some(t) => {
            let mode = match t.mode.value() {
                Some(v) => format!("{v} mode"),
                None => NO_UNIQUE_MODE.to_string(),
            };
            format!("{} mean / {} median / {}", t.mean, t.median, mode)
        }
        None => "not available".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::CityCount;

    fn report() -> Report {
        Report {
            runner_count: 12345,
            state_count: 2,
            combined_distance: 323439,
            top_cities: vec![
                CityCount {
                    city: "Memphis".to_string(),
                    count: 9000,
                },
                CityCount {
                    city: "Oxford".to_string(),
                    count: 3,
                },
            ],
            age: CentralTendency::of(&[30, 31, 32]),
            females: 6000,
            males: 6345,
            pace: CentralTendency::of(&[390, 390, 450]),
            finish_time: None,
        }
    }

    #[test]
    fn test_render_report() {
        let mut out = Vec::new();
        render_report(&mut out, 2016, &report()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("12,345 Marathon Runners in 2016"));
        assert!(text.contains("From 2 different states"));
        assert!(text.contains("Total distance combined ==> 323,439+ miles"));
        assert!(text.contains("Mostly from (top-2 cities):\n- Memphis (9,000)\n- Oxford (3)\n"));
        assert!(text.contains("Average age: 31 mean / 31 median / no unique mode"));
        assert!(text.contains("Females: 6,000!"));
        assert!(text.contains("Average Pace: 6:50 mean / 6:30 median / 6:30 mode"));
        assert!(text.contains("Average Finish Time: not available"));
    }
}
