//! Synthetic climate series. Nothing here is a measurement.

use chrono::{Duration, NaiveDate};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Temperature,
    Precipitation,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Temperature, ChartKind::Precipitation];

    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartKind::Temperature => "temperatureChart",
            ChartKind::Precipitation => "precipitationChart",
        }
    }

    pub fn legend(self) -> &'static str {
        match self {
            ChartKind::Temperature => "Temperature (°C)",
            ChartKind::Precipitation => "Precipitation (mm)",
        }
    }
}

/// One chart's data. `revision` bumps on every regeneration so an unchanged
/// draw can be told apart from a fresh one with equal values.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub revision: u64,
}

const BASE_TEMPERATURE: f64 = 22.0;
const MAX_PRECIPITATION: f64 = 20.0;

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `days` labels like "Oct 16", oldest first, the last one being `today`.
pub fn generate_date_labels(days: usize, today: NaiveDate) -> Vec<String> {
    (0..days)
        .rev()
        .map(|back| {
            (today - Duration::days(back as i64))
                .format("%b %-d")
                .to_string()
        })
        .collect()
}

/// Random walk around 22°C, each day moving by up to two degrees.
pub fn generate_temperature_data<R: Rng + ?Sized>(days: usize, rng: &mut R) -> Vec<f64> {
    let mut temperature = BASE_TEMPERATURE;
    (0..days)
        .map(|_| {
            temperature += (rng.gen::<f64>() - 0.5) * 4.0;
            round_tenth(temperature)
        })
        .collect()
}

pub fn generate_precipitation_data<R: Rng + ?Sized>(days: usize, rng: &mut R) -> Vec<f64> {
    (0..days)
        .map(|_| round_tenth(rng.gen::<f64>() * MAX_PRECIPITATION))
        .collect()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seven_labels_ending_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let labels = generate_date_labels(7, today);
        assert_eq!(labels.len(), 7);
        assert_eq!(labels.first().unwrap(), "Feb 25");
        assert_eq!(labels.last().unwrap(), "Mar 2");
    }

    #[test]
    fn zero_days_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_date_labels(0, today()).is_empty());
        assert!(generate_temperature_data(0, &mut rng).is_empty());
        assert!(generate_precipitation_data(0, &mut rng).is_empty());
    }

    #[test]
    fn precipitation_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for days in [1, 7, 30, 365] {
            let data = generate_precipitation_data(days, &mut rng);
            assert_eq!(data.len(), days);
            assert!(data.iter().all(|v| (0.0..=20.0).contains(v)), "{data:?}");
        }
    }

    #[test]
    fn temperature_walk_has_requested_length_and_small_steps() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = generate_temperature_data(30, &mut rng);
        assert_eq!(data.len(), 30);
        assert!((data[0] - 22.0).abs() <= 2.05);
        // Rounding to a tenth can widen a single step by at most 0.1.
        assert!(data.windows(2).all(|w| (w[1] - w[0]).abs() <= 2.1));
    }

    #[test]
    fn values_have_one_decimal() {
        let mut rng = StdRng::seed_from_u64(3);
        for v in generate_temperature_data(50, &mut rng) {
            assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-6);
        }
    }
}
