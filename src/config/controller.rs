//! Конфигурация нечеткого регулятора маятника на тележке

/// Точки треугольной функции принадлежности (a, b, c)
pub type Triangle = (f64, f64, f64);

/// Ограничения размеров базы знаний (heapless-контейнеры)
pub mod limits {
    /// Количество точек дискретизации универсума
    pub const UNIVERSE_SAMPLES: usize = 100;

    /// Максимальное число термов одной лингвистической переменной
    pub const MAX_TERMS: usize = 8;

    /// Максимальное число условий в посылке правила
    pub const MAX_CLAUSES: usize = 4;

    /// Максимальное число правил
    pub const MAX_RULES: usize = 32;
}

/// Входные переменные: угол, угловая скорость, позиция и скорость тележки
pub mod inputs {
    use super::Triangle;

    /// Границы универсума входов (нормированные единицы)
    pub const UNIVERSE: (f64, f64) = (-1.0, 1.0);

    /// Отрицательный
    pub const N: Triangle = (-1.0, -1.0, 0.0);
    /// Ноль
    pub const Z: Triangle = (-0.5, 0.0, 0.5);
    /// Положительный
    pub const P: Triangle = (0.0, 1.0, 1.0);
}

/// Выходная переменная: управляющая сила
pub mod force {
    use super::Triangle;

    /// Границы универсума силы
    pub const UNIVERSE: (f64, f64) = (-1.0, 1.0);

    /// Отрицательная большая
    pub const NB: Triangle = (-1.0, -1.0, -0.6);
    /// Отрицательная
    pub const N: Triangle = (-0.8, -0.4, 0.0);
    /// Ноль
    pub const Z: Triangle = (-0.2, 0.0, 0.2);
    /// Положительная
    pub const P: Triangle = (0.0, 0.4, 0.8);
    /// Положительная большая
    pub const PB: Triangle = (0.6, 1.0, 1.0);

    /// Значение силы при пустом агрегате (ни одно правило не сработало)
    pub const FALLBACK: f64 = 0.0;
}

/// Таблица правил: (терм 1, терм 2) -> терм силы
pub mod rules {
    use crate::control::fuzzy::{InputTerm as I, OutputTerm as O};

    /// Балансировка маятника: угол x угловая скорость
    pub const PENDULUM: [(I, I, O); 9] = [
        (I::N, I::N, O::NB),
        (I::N, I::Z, O::N),
        (I::N, I::P, O::Z),
        (I::Z, I::N, O::N),
        (I::Z, I::Z, O::Z),
        (I::Z, I::P, O::P),
        (I::P, I::N, O::Z),
        (I::P, I::Z, O::P),
        (I::P, I::P, O::PB),
    ];

    /// Центрирование тележки: позиция x скорость (знак обратный)
    pub const CART: [(I, I, O); 9] = [
        (I::N, I::N, O::PB),
        (I::N, I::Z, O::P),
        (I::N, I::P, O::Z),
        (I::Z, I::N, O::P),
        (I::Z, I::Z, O::Z),
        (I::Z, I::P, O::N),
        (I::P, I::N, O::Z),
        (I::P, I::Z, O::N),
        (I::P, I::P, O::NB),
    ];
}

// Емкости heapless-контейнеров должны вмещать стандартный регулятор
const _: () = {
    assert!(limits::MAX_CLAUSES >= 2);
    assert!(limits::MAX_TERMS >= 5);
    assert!(limits::MAX_RULES >= rules::PENDULUM.len() + rules::CART.len());
};
