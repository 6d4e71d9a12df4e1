//! Параметры моделирования и оценки качества

/// Шаг интегрирования (секунды)
pub const DT_S: f64 = 0.01;

/// Длительность прогона по умолчанию (секунды)
pub const SIMULATION_TIME_S: f64 = 10.0;

/// Целевой угол маятника (радианы)
pub const TARGET_ANGLE_RAD: f64 = 0.0;

/// Допуск по углу для расчета стабильности (радианы)
pub const ANGLE_TOLERANCE_RAD: f64 = 0.1;

/// Начальное состояние объекта
pub mod initial {
    /// Угол (рад)
    pub const ANGLE_RAD: f64 = 0.1;
    /// Угловая скорость (рад/с)
    pub const ANGULAR_VELOCITY_RAD_S: f64 = 0.0;
    /// Позиция тележки (м)
    pub const POSITION_M: f64 = 0.0;
    /// Скорость тележки (м/с)
    pub const VELOCITY_MS: f64 = 0.0;
}
