//! Лингвистические переменные и их термы

use heapless::LinearMap;
use nalgebra::SVector;

use super::membership::MembershipFunction;
use crate::config::controller::limits::{MAX_TERMS, UNIVERSE_SAMPLES};
use crate::error::ConfigError;
use crate::utils::math::linspace;

/// Дискретный универсум переменной
pub type Universe = SVector<f64, UNIVERSE_SAMPLES>;

/// Степени принадлежности по термам одной переменной
pub type Degrees<T> = LinearMap<T, f64, MAX_TERMS>;

/// Метка нечеткого множества (закрытый набор вариантов)
pub trait Term: Copy + Eq + core::fmt::Debug + 'static {
    /// Короткое имя для логов и ошибок
    fn name(self) -> &'static str;
}

/// Термы входных переменных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputTerm {
    /// Отрицательный
    N,
    /// Ноль
    Z,
    /// Положительный
    P,
}

impl InputTerm {
    pub const ALL: [InputTerm; 3] = [InputTerm::N, InputTerm::Z, InputTerm::P];
}

impl Term for InputTerm {
    fn name(self) -> &'static str {
        match self {
            InputTerm::N => "N",
            InputTerm::Z => "Z",
            InputTerm::P => "P",
        }
    }
}

/// Термы выходной переменной (сила)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputTerm {
    /// Отрицательная большая
    NB,
    /// Отрицательная
    N,
    /// Ноль
    Z,
    /// Положительная
    P,
    /// Положительная большая
    PB,
}

impl OutputTerm {
    pub const ALL: [OutputTerm; 5] = [
        OutputTerm::NB,
        OutputTerm::N,
        OutputTerm::Z,
        OutputTerm::P,
        OutputTerm::PB,
    ];
}

impl Term for OutputTerm {
    fn name(self) -> &'static str {
        match self {
            OutputTerm::NB => "NB",
            OutputTerm::N => "N",
            OutputTerm::Z => "Z",
            OutputTerm::P => "P",
            OutputTerm::PB => "PB",
        }
    }
}

/// Лингвистическая переменная: универсум и набор термов
#[derive(Debug, Clone)]
pub struct LinguisticVariable<T: Term> {
    name: &'static str,
    bounds: (f64, f64),
    universe: Universe,
    terms: LinearMap<T, MembershipFunction, MAX_TERMS>,
}

impl<T: Term> LinguisticVariable<T> {
    /// Создание переменной с проверкой термов
    pub fn new<I>(name: &'static str, bounds: (f64, f64), terms: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (T, MembershipFunction)>,
    {
        let (lo, hi) = bounds;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ConfigError::InvalidUniverse {
                variable: name,
                lo,
                hi,
            });
        }

        let mut map = LinearMap::new();
        for (term, mf) in terms {
            mf.validate(name, term.name(), lo, hi)?;

            if map.contains_key(&term) {
                return Err(ConfigError::DuplicateTerm {
                    variable: name,
                    term: term.name(),
                });
            }
            if map.insert(term, mf).is_err() {
                return Err(ConfigError::TooManyTerms { variable: name });
            }
        }

        Ok(Self {
            name,
            bounds,
            universe: linspace(lo, hi),
            terms: map,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    /// Точки дискретизации универсума по возрастанию
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn term(&self, term: T) -> Option<&MembershipFunction> {
        self.terms.get(&term)
    }

    pub fn has_term(&self, term: T) -> bool {
        self.terms.contains_key(&term)
    }

    pub fn terms(&self) -> impl Iterator<Item = (T, &MembershipFunction)> + '_ {
        self.terms.iter().map(|(term, mf)| (*term, mf))
    }

    /// Фаззификация: степень принадлежности x каждому терму
    pub fn fuzzify(&self, x: f64) -> Degrees<T> {
        let mut degrees = Degrees::new();
        for (term, mf) in self.terms.iter() {
            let inserted = degrees.insert(*term, mf.degree(x));
            debug_assert!(inserted.is_ok(), "degree capacity is MAX_TERMS");
        }
        degrees
    }
}
