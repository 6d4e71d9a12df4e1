//! Регуляторы объекта

pub mod fuzzy;

use crate::data::PlantState;

/// Регулятор: управляющая сила по текущему состоянию объекта
pub trait Controller {
    fn force(&self, state: &PlantState) -> f64;
}

impl Controller for fuzzy::InferenceEngine {
    fn force(&self, state: &PlantState) -> f64 {
        self.infer(state)
    }
}

impl<C: Controller + ?Sized> Controller for &C {
    fn force(&self, state: &PlantState) -> f64 {
        (**self).force(state)
    }
}
