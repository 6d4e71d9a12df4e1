// src/data/mod.rs
use nalgebra::Vector4;

use crate::config::simulation::initial;

/// Состояние объекта «маятник на тележке»
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlantState {
    pub angle: f64,            // Угол маятника (рад)
    pub angular_velocity: f64, // Угловая скорость (рад/с)
    pub position: f64,         // Позиция тележки (м)
    pub velocity: f64,         // Скорость тележки (м/с)
}

impl PlantState {
    pub const fn new(angle: f64, angular_velocity: f64, position: f64, velocity: f64) -> Self {
        Self {
            angle,
            angular_velocity,
            position,
            velocity,
        }
    }
}

impl Default for PlantState {
    fn default() -> Self {
        Self::new(
            initial::ANGLE_RAD,
            initial::ANGULAR_VELOCITY_RAD_S,
            initial::POSITION_M,
            initial::VELOCITY_MS,
        )
    }
}

impl From<PlantState> for Vector4<f64> {
    fn from(state: PlantState) -> Self {
        Vector4::new(
            state.angle,
            state.angular_velocity,
            state.position,
            state.velocity,
        )
    }
}

impl From<Vector4<f64>> for PlantState {
    fn from(v: Vector4<f64>) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

/// Результат одного такта моделирования
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    pub state: PlantState, // Состояние после шага
    pub force: f64,        // Примененная сила
}

/// Запись истории прогона
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub t: f64,            // Время от начала прогона (с)
    pub state: PlantState, // Состояние после шага
    pub force: f64,        // Примененная сила
}

impl Sample {
    pub fn angle(&self) -> f64 {
        self.state.angle
    }

    pub fn position(&self) -> f64 {
        self.state.position
    }
}
