//! Шаговое моделирование маятника на тележке

use alloc::vec::Vec;

use super::metrics::Metrics;
use crate::config::SimulationConfig;
use crate::control::fuzzy::InferenceEngine;
use crate::control::Controller;
use crate::data::{PlantState, Sample, Tick};

/// Состояние объекта, история и флаг прогона
///
/// Один такт на каждый внешний вызов [`Stepper::step`]; срок прогона
/// отслеживает вызывающая сторона.
#[derive(Debug, Clone)]
pub struct Stepper<C: Controller = InferenceEngine> {
    controller: C,
    config: SimulationConfig,
    state: PlantState,
    history: Vec<Sample>,
    running: bool,
}

impl<C: Controller> Stepper<C> {
    pub fn new(controller: C, config: SimulationConfig, initial: PlantState) -> Self {
        Self {
            controller,
            config,
            state: initial,
            history: Vec::new(),
            running: false,
        }
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &PlantState {
        &self.state
    }

    pub fn history(&self) -> &[Sample] {
        &self.history
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Запуск прогона
    pub fn start(&mut self) {
        if !self.running {
            #[cfg(feature = "defmt")]
            defmt::info!("Моделирование запущено: {}", self.state);
        }
        self.running = true;
    }

    /// Остановка прогона
    pub fn stop(&mut self) {
        if self.running {
            #[cfg(feature = "defmt")]
            defmt::info!("Моделирование остановлено, записей: {}", self.history.len());
        }
        self.running = false;
    }

    /// Один такт: сила регулятора, интегрирование, запись в историю
    ///
    /// `t` - время от начала прогона, измеренное вызывающей стороной.
    pub fn step(&mut self, t: f64) -> Tick {
        let force = self.controller.force(&self.state);
        self.state = integrate(&self.state, force, self.config.dt);

        self.history.push(Sample {
            t,
            state: self.state,
            force,
        });

        #[cfg(feature = "debug-simulation")]
        defmt::debug!(
            "t={} angle={} pos={} force={}",
            t,
            self.state.angle,
            self.state.position,
            force
        );

        Tick {
            state: self.state,
            force,
        }
    }

    /// Метрики по текущей истории
    pub fn metrics(&self) -> Metrics {
        Metrics::from_history(&self.history, &self.config)
    }

    /// Остановка, очистка истории и установка начального состояния
    pub fn reset(&mut self, initial: PlantState) {
        self.stop();
        self.history.clear();
        self.state = initial;

        #[cfg(feature = "defmt")]
        defmt::info!("Сброс моделирования: {}", initial);
    }
}

/// Явный шаг Эйлера
///
/// Угол интегрируется по новой угловой скорости, позиция - по старой
/// скорости тележки. Порядок менять нельзя: он определяет траектории.
fn integrate(state: &PlantState, force: f64, dt: f64) -> PlantState {
    let angular_velocity = state.angular_velocity + force * dt;
    let angle = state.angle + angular_velocity * dt;
    let velocity = state.velocity + force * dt;
    let position = state.position + state.velocity * dt;

    PlantState {
        angle,
        angular_velocity,
        position,
        velocity,
    }
}
