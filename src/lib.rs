//! Нечеткий регулятор маятника на тележке
//!
//! Вывод Мамдани (фаззификация, правила, импликация, агрегация,
//! центр тяжести) и шаговое моделирование объекта с фиксированным шагом.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod control;
pub mod data;
pub mod error;
pub mod simulation;
pub mod utils;

pub use config::SimulationConfig;
pub use control::fuzzy::{Inference, InferenceEngine};
pub use control::Controller;
pub use data::{PlantState, Sample, Tick};
pub use error::ConfigError;
pub use simulation::{run, Metrics, Stepper, TelemetrySink};
