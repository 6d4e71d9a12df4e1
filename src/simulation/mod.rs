//! Цикл моделирования с фиксированным шагом

pub mod metrics;
pub mod stepper;

pub use metrics::Metrics;
pub use stepper::Stepper;

use core::ops::ControlFlow;

use num_traits::AsPrimitive;

use crate::control::Controller;
use crate::data::Tick;

/// Потребитель телеметрии (отображение, графики, логи)
pub trait TelemetrySink {
    /// Новый такт; `Break` останавливает прогон
    fn on_tick(&mut self, _t: f64, _tick: &Tick) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Прогон завершен
    fn on_finish(&mut self, _metrics: &Metrics) {}
}

impl TelemetrySink for () {}

/// Прогон до `duration` секунд модельного времени
///
/// Такт k получает время t = k * dt на момент начала такта. Прогон
/// заканчивается, когда t достигает `duration` или приемник телеметрии
/// просит остановку. `f64::INFINITY` - прогон до остановки приемником,
/// NaN не дает ни одного такта.
pub fn run<C, S>(stepper: &mut Stepper<C>, duration: f64, sink: &mut S) -> Metrics
where
    C: Controller,
    S: TelemetrySink + ?Sized,
{
    let dt = stepper.config().dt;
    stepper.start();

    let mut ticks: u64 = 0;
    while stepper.is_running() {
        let elapsed: f64 = ticks.as_();
        let t = elapsed * dt;
        if duration.is_nan() || t >= duration {
            break;
        }

        let tick = stepper.step(t);
        ticks += 1;

        if sink.on_tick(t, &tick).is_break() {
            break;
        }
    }

    stepper.stop();
    let metrics = stepper.metrics();

    #[cfg(feature = "defmt")]
    defmt::info!("Прогон завершен: {} тактов, {}", ticks, metrics);

    sink.on_finish(&metrics);
    metrics
}
