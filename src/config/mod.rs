//! Конфигурация регулятора и моделирования

pub mod controller;
pub mod simulation;

use crate::error::ConfigError;

/// Параметры прогона, передаваемые шаговому моделированию
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimulationConfig {
    /// Шаг интегрирования (с)
    pub dt: f64,
    /// Допуск по углу для метрики стабильности (рад)
    pub angle_tolerance: f64,
    /// Целевой угол (рад)
    pub target_angle: f64,
}

impl SimulationConfig {
    /// Создание конфигурации с проверкой параметров
    pub fn new(dt: f64, angle_tolerance: f64, target_angle: f64) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::InvalidTimestep(dt));
        }
        if !angle_tolerance.is_finite() || angle_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(angle_tolerance));
        }
        if !target_angle.is_finite() {
            return Err(ConfigError::InvalidTarget(target_angle));
        }

        Ok(Self {
            dt,
            angle_tolerance,
            target_angle,
        })
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: simulation::DT_S,
            angle_tolerance: simulation::ANGLE_TOLERANCE_RAD,
            target_angle: simulation::TARGET_ANGLE_RAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.dt, 0.01);
        assert_eq!(cfg.angle_tolerance, 0.1);
        assert_eq!(cfg.target_angle, 0.0);
        assert_eq!(SimulationConfig::new(0.01, 0.1, 0.0), Ok(cfg));
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert_eq!(
            SimulationConfig::new(0.0, 0.1, 0.0),
            Err(ConfigError::InvalidTimestep(0.0))
        );
        assert!(matches!(
            SimulationConfig::new(f64::NAN, 0.1, 0.0),
            Err(ConfigError::InvalidTimestep(_))
        ));
        assert_eq!(
            SimulationConfig::new(0.01, -0.1, 0.0),
            Err(ConfigError::InvalidTolerance(-0.1))
        );
        assert!(matches!(
            SimulationConfig::new(0.01, 0.1, f64::INFINITY),
            Err(ConfigError::InvalidTarget(_))
        ));
    }
}
