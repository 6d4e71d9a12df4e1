//! Правила нечеткого вывода

use heapless::Vec;

use super::variable::{Degrees, InputTerm, OutputTerm, Term};
use crate::config::controller::limits::MAX_CLAUSES;
use crate::error::ConfigError;

/// Входные переменные регулятора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    Angle,
    AngularVelocity,
    Position,
    Velocity,
}

impl Input {
    pub const COUNT: usize = 4;

    pub const ALL: [Input; Input::COUNT] = [
        Input::Angle,
        Input::AngularVelocity,
        Input::Position,
        Input::Velocity,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Input::Angle => "angle",
            Input::AngularVelocity => "angular_velocity",
            Input::Position => "position",
            Input::Velocity => "velocity",
        }
    }
}

/// Результат фаззификации всех входов
#[derive(Debug, Clone, PartialEq)]
pub struct Fuzzified {
    degrees: [Degrees<InputTerm>; Input::COUNT],
}

impl Fuzzified {
    pub fn new(degrees: [Degrees<InputTerm>; Input::COUNT]) -> Self {
        Self { degrees }
    }

    /// Степени принадлежности одного входа
    pub fn input(&self, input: Input) -> &Degrees<InputTerm> {
        &self.degrees[input.index()]
    }

    pub fn degree(&self, input: Input, term: InputTerm) -> Option<f64> {
        self.input(input).get(&term).copied()
    }
}

/// Способ объединения условий посылки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Conjunction {
    /// Нечеткое И по Мамдани: минимум степеней
    #[default]
    Min,
}

impl Conjunction {
    /// Нейтральный элемент операции
    fn identity(self) -> f64 {
        match self {
            Conjunction::Min => 1.0,
        }
    }

    fn combine(self, acc: f64, degree: f64) -> f64 {
        match self {
            Conjunction::Min => libm::fmin(acc, degree),
        }
    }
}

/// Условие посылки: `вход = терм`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clause {
    pub input: Input,
    pub term: InputTerm,
}

impl Clause {
    pub const fn new(input: Input, term: InputTerm) -> Self {
        Self { input, term }
    }
}

/// Правило: конъюнкция условий -> терм силы
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedent: Vec<Clause, MAX_CLAUSES>,
    conjunction: Conjunction,
    consequent: OutputTerm,
}

impl Rule {
    pub fn new(clauses: &[Clause], consequent: OutputTerm) -> Result<Self, ConfigError> {
        let antecedent = Vec::from_slice(clauses)
            .map_err(|_| ConfigError::TooManyClauses { max: MAX_CLAUSES })?;

        Ok(Self {
            antecedent,
            conjunction: Conjunction::default(),
            consequent,
        })
    }

    /// Правило с двумя условиями, как в таблице регулятора
    pub fn pair(
        first: (Input, InputTerm),
        second: (Input, InputTerm),
        consequent: OutputTerm,
    ) -> Self {
        let mut antecedent = Vec::new();
        for (input, term) in [first, second] {
            let pushed = antecedent.push(Clause::new(input, term));
            debug_assert!(pushed.is_ok(), "clause capacity is MAX_CLAUSES");
        }

        Self {
            antecedent,
            conjunction: Conjunction::default(),
            consequent,
        }
    }

    pub fn with_conjunction(mut self, conjunction: Conjunction) -> Self {
        self.conjunction = conjunction;
        self
    }

    pub fn antecedent(&self) -> &[Clause] {
        &self.antecedent
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    pub fn consequent(&self) -> OutputTerm {
        self.consequent
    }

    /// Сила срабатывания правила в [0, 1]
    ///
    /// Отсутствующий терм означает нарушение инварианта построения
    /// регулятора: паника в отладочной сборке, 0 в релизной.
    pub fn strength(&self, fuzzified: &Fuzzified) -> f64 {
        self.antecedent
            .iter()
            .fold(self.conjunction.identity(), |acc, clause| {
                let degree = match fuzzified.degree(clause.input, clause.term) {
                    Some(degree) => degree,
                    None => {
                        debug_assert!(
                            false,
                            "rule references undeclared term {}.{}",
                            clause.input.name(),
                            clause.term.name()
                        );
                        0.0
                    }
                };
                self.conjunction.combine(acc, degree)
            })
    }
}
