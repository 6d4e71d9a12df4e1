//! Функции принадлежности

use nalgebra::SVector;

use crate::error::ConfigError;
use crate::utils::math::inverse_lerp;

/// Функция принадлежности нечеткого множества
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MembershipFunction {
    /// Треугольник (a, b, c), вершина в b
    Triangular { a: f64, b: f64, c: f64 },
}

impl MembershipFunction {
    pub const fn triangular(a: f64, b: f64, c: f64) -> Self {
        Self::Triangular { a, b, c }
    }

    /// Опорные точки функции
    pub fn points(&self) -> (f64, f64, f64) {
        match *self {
            Self::Triangular { a, b, c } => (a, b, c),
        }
    }

    /// Степень принадлежности x множеству, всегда в [0, 1]
    ///
    /// Вырожденный левый (a == b) или правый (b == c) склон считается
    /// уже равным 1, поэтому (-1, -1, 0) дает 1 в точке -1.
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            Self::Triangular { a, b, c } => {
                if x.is_nan() {
                    0.0
                } else if x == b {
                    1.0
                } else if x <= a || x >= c {
                    0.0
                } else if x < b {
                    inverse_lerp(a, b, x)
                } else {
                    inverse_lerp(c, b, x)
                }
            }
        }
    }

    /// Значения функции во всех точках дискретного универсума
    pub fn sample<const N: usize>(&self, universe: &SVector<f64, N>) -> SVector<f64, N> {
        universe.map(|x| self.degree(x))
    }

    /// Проверка формы относительно универсума [lo, hi]
    pub(crate) fn validate(
        &self,
        variable: &'static str,
        term: &'static str,
        lo: f64,
        hi: f64,
    ) -> Result<(), ConfigError> {
        let (a, b, c) = self.points();

        // NaN не проходит ни одно из сравнений ниже
        if !(a <= b && b <= c) {
            return Err(ConfigError::MalformedTriangle {
                variable,
                term,
                a,
                b,
                c,
            });
        }

        for point in [a, b, c] {
            if point < lo || point > hi {
                return Err(ConfigError::OutOfUniverse {
                    variable,
                    term,
                    point,
                });
            }
        }

        Ok(())
    }
}
