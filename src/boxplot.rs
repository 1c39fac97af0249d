//! Box-and-whisker charts for measurement samples
//!
//! One horizontal row per sample, all on a shared scale:
//!
//! ```text
//! iguana     +----[==|====*=====]-----------------+
//! chameleon       +-------------[====|=*=========]----------+
//!            +----------------------------------------------+
//!            50                                           930
//! ```
//!
//! `+` whisker ends (min/max), `[ ]` quartiles, `|` median, `*` mean.

use serde::{Deserialize, Serialize};

/// Five-number summary plus mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumber {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

impl FiveNumber {
    /// Summarize a sample; `None` if it is empty or holds a non-finite value
    pub fn from_data(data: &[f64]) -> Option<Self> {
        if data.is_empty() || data.iter().any(|x| !x.is_finite()) {
            return None;
        }

        // Don't mutate the caller's data
        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            min: sorted[0],
            q1: percentile(&sorted, 25.0),
            median: percentile(&sorted, 50.0),
            q3: percentile(&sorted, 75.0),
            max: sorted[sorted.len() - 1],
            mean: sorted.iter().sum::<f64>() / sorted.len() as f64,
        })
    }
}

/// Percentile from sorted data with linear interpolation between ranks
fn percentile(sorted: &[f64], percentile: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }

    let index = (percentile / 100.0) * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = index - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

/// Render labelled samples as box-and-whisker rows
///
/// `width` is the number of plot columns (minimum 10). Samples that are
/// empty or hold non-finite values are drawn as an empty row.
///
/// # Example
/// ```
/// use tinystat::boxplot::render_box_plot;
///
/// let a = [0.0, 4.0, 5.0, 6.0, 7.0, 8.0, 20.0];
/// let chart = render_box_plot(&[("a", &a[..])], 21);
/// assert!(chart.starts_with("a  +----[|*]-----------+"));
/// ```
pub fn render_box_plot(samples: &[(&str, &[f64])], width: usize) -> String {
    let width = width.max(10);
    let summaries: Vec<Option<FiveNumber>> = samples
        .iter()
        .map(|(_, data)| FiveNumber::from_data(data))
        .collect();

    let lo = summaries
        .iter()
        .flatten()
        .map(|s| s.min)
        .fold(f64::INFINITY, f64::min);
    let hi = summaries
        .iter()
        .flatten()
        .map(|s| s.max)
        .fold(f64::NEG_INFINITY, f64::max);

    let label_width = samples
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        + 2;
    let mut chart = String::new();

    for ((name, _), summary) in samples.iter().zip(&summaries) {
        let row = match summary {
            Some(s) => draw_row(s, lo, hi, width),
            None => String::new(),
        };
        let line = format!("{:<label_width$}{}", name, row);
        chart.push_str(line.trim_end());
        chart.push('\n');
    }

    if lo.is_finite() {
        chart.push_str(&" ".repeat(label_width));
        chart.push('+');
        chart.push_str(&"-".repeat(width - 2));
        chart.push_str("+\n");

        let low_label = compact(lo);
        let high_label = compact(hi);
        let gap = width.saturating_sub(low_label.len() + high_label.len()).max(1);
        chart.push_str(&" ".repeat(label_width));
        chart.push_str(&low_label);
        chart.push_str(&" ".repeat(gap));
        chart.push_str(&high_label);
        chart.push('\n');
    }

    chart
}

fn draw_row(s: &FiveNumber, lo: f64, hi: f64, width: usize) -> String {
    let position = |value: f64| -> usize {
        if hi > lo {
            (((value - lo) / (hi - lo)) * (width - 1) as f64).round() as usize
        } else {
            width / 2
        }
    };

    let mut row = vec![' '; width];
    let (min, q1, median, q3, max) = (
        position(s.min),
        position(s.q1),
        position(s.median),
        position(s.q3),
        position(s.max),
    );

    for cell in &mut row[min..=max] {
        *cell = '-';
    }
    for cell in &mut row[q1..=q3] {
        *cell = '=';
    }
    row[min] = '+';
    row[max] = '+';
    row[q1] = '[';
    row[q3] = ']';
    row[median] = '|';
    row[position(s.mean)] = '*';

    row.into_iter().collect::<String>().trim_end().to_string()
}

/// Axis label: two decimals, trailing zeros dropped
fn compact(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_number_odd() {
        let s = FiveNumber::from_data(&[50.0, 200.0, 150.0, 400.0, 750.0, 400.0, 150.0]).unwrap();
        assert_eq!(s.min, 50.0);
        assert_eq!(s.q1, 150.0);
        assert_eq!(s.median, 200.0);
        assert_eq!(s.q3, 400.0);
        assert_eq!(s.max, 750.0);
        assert_eq!(s.mean, 300.0);
    }

    #[test]
    fn test_five_number_even_interpolates() {
        let s = FiveNumber::from_data(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.median, 2.5);
        assert_eq!(s.q1, 1.75);
        assert_eq!(s.q3, 3.25);
    }

    #[test]
    fn test_five_number_rejects_bad_input() {
        assert!(FiveNumber::from_data(&[]).is_none());
        assert!(FiveNumber::from_data(&[1.0, f64::NAN]).is_none());
    }

    #[test]
    fn test_single_sample_row() {
        let a = [0.0, 4.0, 5.0, 6.0, 7.0, 8.0, 20.0];
        let chart = render_box_plot(&[("a", &a[..])], 21);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "a  +----[|*]-----------+");
        assert_eq!(lines[1], "   +-------------------+");
        assert_eq!(lines[2], "   0                  20");
    }

    #[test]
    fn test_non_ascii_labels_align() {
        let a = [0.0, 4.0, 5.0, 6.0, 7.0, 8.0, 20.0];
        let chart = render_box_plot(&[("café", &a[..]), ("ab", &a[..])], 21);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "café  +----[|*]-----------+");
        assert_eq!(lines[1], "ab    +----[|*]-----------+");
        assert_eq!(lines[2], "      +-------------------+");
    }

    #[test]
    fn test_shared_scale() {
        let low = [0.0, 1.0, 2.0];
        let high = [8.0, 9.0, 10.0];
        let chart = render_box_plot(&[("low", &low[..]), ("high", &high[..])], 11);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "low   +*]");
        assert_eq!(lines[1], "high          +*]");
        assert_eq!(lines[2], "      +---------+");
        assert_eq!(lines[3], "      0        10");
    }

    #[test]
    fn test_constant_samples_center() {
        let a = [3.0, 3.0, 3.0];
        let chart = render_box_plot(&[("a", &a[..])], 10);
        let first = chart.lines().next().unwrap();
        assert_eq!(first, "a       *");
    }

    #[test]
    fn test_empty_sample_row() {
        let chart = render_box_plot(&[("none", &[][..])], 20);
        assert_eq!(chart, "none\n");
    }

    #[test]
    fn test_compact_labels() {
        assert_eq!(compact(50.0), "50");
        assert_eq!(compact(0.126), "0.13");
        assert_eq!(compact(2.50), "2.5");
    }
}
