//! Ошибки конфигурации регулятора и моделирования

use thiserror::Error;

/// Ошибки, обнаруживаемые при построении регулятора
///
/// Все они фатальны для запуска: регулятор не создается, пока
/// конфигурация не исправлена.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Границы универсума не образуют непустой конечный отрезок
    #[error("variable `{variable}`: invalid universe [{lo}, {hi}]")]
    InvalidUniverse {
        variable: &'static str,
        lo: f64,
        hi: f64,
    },
    /// Точки треугольника не упорядочены по неубыванию
    #[error("variable `{variable}`, term `{term}`: points ({a}, {b}, {c}) are not weakly increasing")]
    MalformedTriangle {
        variable: &'static str,
        term: &'static str,
        a: f64,
        b: f64,
        c: f64,
    },
    /// Точка треугольника вне универсума переменной
    #[error("variable `{variable}`, term `{term}`: point {point} lies outside the universe")]
    OutOfUniverse {
        variable: &'static str,
        term: &'static str,
        point: f64,
    },
    /// Терм объявлен дважды
    #[error("variable `{variable}`: term `{term}` declared twice")]
    DuplicateTerm {
        variable: &'static str,
        term: &'static str,
    },
    /// Превышена емкость термов переменной
    #[error("variable `{variable}`: too many terms")]
    TooManyTerms { variable: &'static str },
    /// Правило ссылается на необъявленный терм
    #[error("rule {rule}: variable `{variable}` has no term `{term}`")]
    UndeclaredTerm {
        rule: usize,
        variable: &'static str,
        term: &'static str,
    },
    /// Правило без условий
    #[error("rule {rule}: empty antecedent")]
    EmptyAntecedent { rule: usize },
    /// Превышено число условий в правиле
    #[error("rule has more than {max} clauses")]
    TooManyClauses { max: usize },
    /// Превышено число правил
    #[error("too many rules")]
    TooManyRules,
    /// Некорректный шаг интегрирования
    #[error("timestep must be finite and positive, got {0}")]
    InvalidTimestep(f64),
    /// Некорректный допуск по углу
    #[error("angle tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    /// Некорректный целевой угол
    #[error("target angle must be finite, got {0}")]
    InvalidTarget(f64),
}

// Реализация Format для defmt
#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::InvalidUniverse { variable, lo, hi } => {
                defmt::write!(fmt, "{}: invalid universe [{}, {}]", variable, lo, hi)
            }
            ConfigError::MalformedTriangle { variable, term, a, b, c } => defmt::write!(
                fmt,
                "{}.{}: malformed triangle ({}, {}, {})",
                variable,
                term,
                a,
                b,
                c
            ),
            ConfigError::OutOfUniverse { variable, term, point } => {
                defmt::write!(fmt, "{}.{}: point {} outside universe", variable, term, point)
            }
            ConfigError::DuplicateTerm { variable, term } => {
                defmt::write!(fmt, "{}.{}: duplicate term", variable, term)
            }
            ConfigError::TooManyTerms { variable } => {
                defmt::write!(fmt, "{}: too many terms", variable)
            }
            ConfigError::UndeclaredTerm { rule, variable, term } => {
                defmt::write!(fmt, "rule {}: undeclared {}.{}", rule, variable, term)
            }
            ConfigError::EmptyAntecedent { rule } => {
                defmt::write!(fmt, "rule {}: empty antecedent", rule)
            }
            ConfigError::TooManyClauses { max } => {
                defmt::write!(fmt, "rule has more than {} clauses", max)
            }
            ConfigError::TooManyRules => defmt::write!(fmt, "too many rules"),
            ConfigError::InvalidTimestep(dt) => defmt::write!(fmt, "invalid timestep {}", dt),
            ConfigError::InvalidTolerance(tol) => {
                defmt::write!(fmt, "invalid angle tolerance {}", tol)
            }
            ConfigError::InvalidTarget(target) => {
                defmt::write!(fmt, "invalid target angle {}", target)
            }
        }
    }
}
