//! Метрики качества прогона

use num_traits::{AsPrimitive, Zero};

use crate::config::SimulationConfig;
use crate::data::Sample;

/// Сводка качества управления, вычисляется по истории
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Metrics {
    /// Время последней записи от начала прогона (с)
    pub execution_time: f64,
    /// Доля записей с |угол| < допуска (%)
    pub stability_percentage: f64,
    /// Сумма |угол - цель|
    pub total_error: f64,
    /// Максимум |угол - цель|
    pub max_deviation: f64,
    /// dt * сумма |сила|
    pub energy_used: f64,
}

impl Metrics {
    /// Пересчет метрик по всей истории; пустая история дает нули
    pub fn from_history(history: &[Sample], config: &SimulationConfig) -> Self {
        let Some(last) = history.last() else {
            return Self::default();
        };

        let count: f64 = history.len().as_();
        let stable: f64 = history
            .iter()
            .filter(|s| libm::fabs(s.angle()) < config.angle_tolerance)
            .count()
            .as_();

        let mut total_error = f64::zero();
        let mut max_deviation = f64::zero();
        let mut total_force = f64::zero();
        for sample in history {
            let deviation = libm::fabs(sample.angle() - config.target_angle);
            total_error += deviation;
            max_deviation = libm::fmax(max_deviation, deviation);
            total_force += libm::fabs(sample.force);
        }

        Self {
            execution_time: last.t,
            stability_percentage: stable / count * 100.0,
            total_error,
            max_deviation,
            energy_used: total_force * config.dt,
        }
    }
}
