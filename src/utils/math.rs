//! Математические функции и утилиты

use nalgebra::SVector;

/// Ограничение значения в заданных пределах
#[inline(always)]
pub fn constrain(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Обратная линейная интерполяция - получение t из значения
///
/// Для вырожденного отрезка (a == b) возвращает 1.0: точка уже на вершине.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if b == a {
        1.0
    } else {
        constrain((value - a) / (b - a), 0.0, 1.0)
    }
}

/// Равномерная сетка из N точек на [lo, hi] включая обе границы
///
/// Для симметричного отрезка (lo == -hi) точки i и N-1-i точно
/// противоположны.
pub fn linspace<const N: usize>(lo: f64, hi: f64) -> SVector<f64, N> {
    SVector::from_fn(|i, _| {
        if N < 2 {
            lo
        } else {
            let steps = (N - 1) as f64;
            let i = i as f64;
            (lo * (steps - i) + hi * i) / steps
        }
    })
}

// Модульные тесты
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_constrain() {
        assert_eq!(constrain(5.0, 0.0, 10.0), 5.0);
        assert_eq!(constrain(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(constrain(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(-1.0, 0.0, -0.5), 0.5);
        assert_eq!(inverse_lerp(0.0, 1.0, 2.0), 1.0);
        assert_eq!(inverse_lerp(0.0, 1.0, -2.0), 0.0);
        assert_eq!(inverse_lerp(-1.0, -1.0, -1.0), 1.0);
    }

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace::<100>(-1.0, 1.0);
        assert_eq!(grid[0], -1.0);
        assert_eq!(grid[99], 1.0);
        assert_abs_diff_eq!(grid[1] - grid[0], 2.0 / 99.0, epsilon = 1e-12);
        assert!(grid.iter().zip(grid.iter().skip(1)).all(|(a, b)| a < b));
    }

    #[test]
    fn test_linspace_symmetric() {
        let grid = linspace::<100>(-1.0, 1.0);
        for i in 0..100 {
            assert_eq!(grid[i], -grid[99 - i], "point {}", i);
        }

        let shifted = linspace::<5>(2.0, 4.0);
        assert_eq!(shifted.as_slice(), &[2.0, 2.5, 3.0, 3.5, 4.0]);
    }
}
