//! Нечеткий регулятор Мамдани для маятника на тележке
//!
//! Один проход вывода: фаззификация четырех входов, сила срабатывания
//! каждого правила, отсечение терма-следствия (min), агрегация по всем
//! правилам (max) и дефаззификация центром тяжести на дискретном
//! универсуме силы. Регулятор не хранит состояния между вызовами.

use heapless::{LinearMap, Vec};

use super::membership::MembershipFunction;
use super::rule::{Fuzzified, Input, Rule};
use super::variable::{InputTerm, LinguisticVariable, OutputTerm, Term, Universe};
use crate::config::controller::limits::{MAX_RULES, MAX_TERMS};
use crate::config::controller::{force, inputs, rules, Triangle};
use crate::data::PlantState;
use crate::error::ConfigError;

/// Подробный результат одного прохода вывода
#[derive(Debug, Clone, PartialEq)]
pub struct Inference {
    /// Силы срабатывания правил в порядке базы правил
    pub strengths: Vec<f64, MAX_RULES>,
    /// Агрегированная функция принадлежности силы на универсуме
    pub aggregate: Universe,
    /// Четкое значение силы
    pub force: f64,
    /// Агрегат пуст, возвращено запасное значение
    pub fallback: bool,
}

/// Нечеткий регулятор: входы, выход и база правил
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    inputs: [LinguisticVariable<InputTerm>; Input::COUNT],
    output: LinguisticVariable<OutputTerm>,
    rules: Vec<Rule, MAX_RULES>,
    /// Термы выхода, заранее вычисленные на универсуме
    consequents: LinearMap<OutputTerm, Universe, MAX_TERMS>,
}

impl InferenceEngine {
    /// Создание регулятора с проверкой ссылок правил на термы
    pub fn new<R>(
        inputs: [LinguisticVariable<InputTerm>; Input::COUNT],
        output: LinguisticVariable<OutputTerm>,
        rules: R,
    ) -> Result<Self, ConfigError>
    where
        R: IntoIterator<Item = Rule>,
    {
        let mut base = Vec::new();
        for (index, rule) in rules.into_iter().enumerate() {
            if rule.antecedent().is_empty() {
                return Err(ConfigError::EmptyAntecedent { rule: index });
            }

            for clause in rule.antecedent() {
                let variable = &inputs[clause.input.index()];
                if !variable.has_term(clause.term) {
                    return Err(ConfigError::UndeclaredTerm {
                        rule: index,
                        variable: variable.name(),
                        term: clause.term.name(),
                    });
                }
            }

            if !output.has_term(rule.consequent()) {
                return Err(ConfigError::UndeclaredTerm {
                    rule: index,
                    variable: output.name(),
                    term: rule.consequent().name(),
                });
            }

            base.push(rule).map_err(|_| ConfigError::TooManyRules)?;
        }

        let mut consequents = LinearMap::new();
        for (term, mf) in output.terms() {
            let inserted = consequents.insert(term, mf.sample(output.universe()));
            debug_assert!(inserted.is_ok(), "consequent capacity is MAX_TERMS");
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Нечеткий регулятор готов: {} правил", base.len());

        Ok(Self {
            inputs,
            output,
            rules: base,
            consequents,
        })
    }

    /// Регулятор маятника на тележке: 4 входа, сила, 18 правил
    pub fn cart_pole() -> Result<Self, ConfigError> {
        let inputs = [
            input_variable(Input::Angle)?,
            input_variable(Input::AngularVelocity)?,
            input_variable(Input::Position)?,
            input_variable(Input::Velocity)?,
        ];

        let output = LinguisticVariable::new(
            "force",
            force::UNIVERSE,
            [
                (OutputTerm::NB, triangle(force::NB)),
                (OutputTerm::N, triangle(force::N)),
                (OutputTerm::Z, triangle(force::Z)),
                (OutputTerm::P, triangle(force::P)),
                (OutputTerm::PB, triangle(force::PB)),
            ],
        )?;

        let pendulum = rules::PENDULUM.iter().map(|&(angle, rate, out)| {
            Rule::pair((Input::Angle, angle), (Input::AngularVelocity, rate), out)
        });
        let cart = rules::CART.iter().map(|&(position, velocity, out)| {
            Rule::pair((Input::Position, position), (Input::Velocity, velocity), out)
        });

        Self::new(inputs, output, pendulum.chain(cart))
    }

    pub fn input(&self, input: Input) -> &LinguisticVariable<InputTerm> {
        &self.inputs[input.index()]
    }

    pub fn output(&self) -> &LinguisticVariable<OutputTerm> {
        &self.output
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Фаззификация всех входов состояния
    pub fn fuzzify(&self, state: &PlantState) -> Fuzzified {
        Fuzzified::new(Input::ALL.map(|input| self.input(input).fuzzify(reading(state, input))))
    }

    /// Управляющая сила для состояния
    pub fn infer(&self, state: &PlantState) -> f64 {
        self.infer_detailed(state).force
    }

    /// Полный проход вывода с промежуточными результатами
    pub fn infer_detailed(&self, state: &PlantState) -> Inference {
        let fuzzified = self.fuzzify(state);

        let mut strengths = Vec::new();
        let mut aggregate = Universe::zeros();

        for rule in self.rules.iter() {
            let strength = rule.strength(&fuzzified);
            let pushed = strengths.push(strength);
            debug_assert!(pushed.is_ok(), "strength capacity is MAX_RULES");

            // Следствия проверены в `new`
            let shape = self.consequents.get(&rule.consequent());
            debug_assert!(shape.is_some(), "no consequent shape for {}", rule.consequent().name());
            let Some(shape) = shape else {
                continue;
            };

            // Импликация: отсечение терма на уровне силы срабатывания
            let clipped = shape.map(|m| libm::fmin(m, strength));
            // Агрегация: поточечный максимум
            aggregate = aggregate.zip_map(&clipped, libm::fmax);
        }

        let (force, fallback) = centroid(self.output.universe(), &aggregate);

        #[cfg(feature = "debug-inference")]
        defmt::debug!(
            "Inference: angle={} rate={} pos={} vel={} -> force={} fallback={}",
            state.angle,
            state.angular_velocity,
            state.position,
            state.velocity,
            force,
            fallback
        );

        Inference {
            strengths,
            aggregate,
            force,
            fallback,
        }
    }
}

/// Центр тяжести агрегата; пустой агрегат дает запасное значение
///
/// Суммирование идет парами зеркальных точек i и N-1-i, поэтому
/// симметричный агрегат на симметричном универсуме дает ровно 0.
fn centroid(universe: &Universe, aggregate: &Universe) -> (f64, bool) {
    let n = universe.len();
    let mut moment = 0.0;
    let mut area = 0.0;
    for i in 0..n / 2 {
        let j = n - 1 - i;
        moment += universe[i] * aggregate[i] + universe[j] * aggregate[j];
        area += aggregate[i] + aggregate[j];
    }
    if n % 2 == 1 {
        moment += universe[n / 2] * aggregate[n / 2];
        area += aggregate[n / 2];
    }

    if area > 0.0 {
        (moment / area, false)
    } else {
        (force::FALLBACK, true)
    }
}

fn reading(state: &PlantState, input: Input) -> f64 {
    match input {
        Input::Angle => state.angle,
        Input::AngularVelocity => state.angular_velocity,
        Input::Position => state.position,
        Input::Velocity => state.velocity,
    }
}

fn triangle((a, b, c): Triangle) -> MembershipFunction {
    MembershipFunction::triangular(a, b, c)
}

fn input_variable(input: Input) -> Result<LinguisticVariable<InputTerm>, ConfigError> {
    LinguisticVariable::new(
        input.name(),
        inputs::UNIVERSE,
        [
            (InputTerm::N, triangle(inputs::N)),
            (InputTerm::Z, triangle(inputs::Z)),
            (InputTerm::P, triangle(inputs::P)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::fuzzy::Clause;

    fn engine() -> InferenceEngine {
        InferenceEngine::cart_pole().unwrap()
    }

    fn at(angle: f64, angular_velocity: f64, position: f64, velocity: f64) -> PlantState {
        PlantState::new(angle, angular_velocity, position, velocity)
    }

    #[test]
    fn test_cart_pole_layout() {
        let engine = engine();
        assert_eq!(engine.rules().len(), 18);
        assert_eq!(engine.input(Input::Angle).name(), "angle");
        assert_eq!(engine.input(Input::Velocity).name(), "velocity");
        assert_eq!(engine.output().name(), "force");

        let first = &engine.rules()[0];
        assert_eq!(
            first.antecedent(),
            &[
                Clause::new(Input::Angle, InputTerm::N),
                Clause::new(Input::AngularVelocity, InputTerm::N),
            ]
        );
        assert_eq!(first.consequent(), OutputTerm::NB);

        let last = &engine.rules()[17];
        assert_eq!(
            last.antecedent(),
            &[
                Clause::new(Input::Position, InputTerm::P),
                Clause::new(Input::Velocity, InputTerm::P),
            ]
        );
        assert_eq!(last.consequent(), OutputTerm::NB);
    }

    #[test]
    fn test_zero_state_is_balanced() {
        let result = engine().infer_detailed(&at(0.0, 0.0, 0.0, 0.0));

        assert!(!result.fallback);
        assert_eq!(result.force, 0.0);

        // Срабатывают только правила Z,Z -> Z обеих групп
        for (index, strength) in result.strengths.iter().enumerate() {
            let expected = if index == 4 || index == 13 { 1.0 } else { 0.0 };
            assert_eq!(*strength, expected, "rule {}", index + 1);
        }
    }

    #[test]
    fn test_force_grows_with_angle() {
        let engine = engine();
        let small = engine.infer(&at(0.2, 0.0, 0.0, 0.0));
        let large = engine.infer(&at(0.8, 0.0, 0.0, 0.0));
        assert!(small > 0.0);
        assert!(large > small);
    }

    #[test]
    fn test_mirror_symmetry() {
        let engine = engine();
        for x in [0.1, 0.3, 0.5, 0.9] {
            let pos = engine.infer(&at(x, 0.0, 0.0, 0.0));
            let neg = engine.infer(&at(-x, 0.0, 0.0, 0.0));
            assert_eq!(pos, -neg, "angle {}", x);
        }
    }

    #[test]
    fn test_centroid_pairs_mirror_points() {
        let universe = Universe::from_fn(|i, _| if i < 50 { -1.0 } else { 1.0 });
        let mut aggregate = Universe::zeros();
        aggregate[10] = 0.3;
        aggregate[89] = 0.3;
        assert_eq!(centroid(&universe, &aggregate), (0.0, false));

        aggregate[89] = 0.0;
        assert_eq!(centroid(&universe, &aggregate), (-1.0, false));

        assert_eq!(centroid(&universe, &Universe::zeros()), (force::FALLBACK, true));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no consequent shape")]
    fn test_missing_consequent_panics() {
        let mut engine = engine();
        engine.consequents.remove(&OutputTerm::Z);
        engine.infer(&at(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_cart_rules_oppose_displacement() {
        let engine = engine();
        assert!(engine.infer(&at(0.0, 0.0, 0.5, 0.0)) < 0.0);
        assert!(engine.infer(&at(0.0, 0.0, -0.5, 0.0)) > 0.0);
        assert!(engine.infer(&at(0.0, 0.0, 0.0, 0.5)) < 0.0);
    }

    #[test]
    fn test_force_within_output_universe() {
        let engine = engine();
        for state in [
            at(1.0, 1.0, -1.0, -1.0),
            at(-1.0, -1.0, 1.0, 1.0),
            at(0.3, -0.7, 0.2, 0.9),
        ] {
            let force = engine.infer(&state);
            assert!((-1.0..=1.0).contains(&force), "{}", force);
        }
    }

    #[test]
    fn test_repeated_inference_is_identical() {
        let engine = engine();
        let state = at(0.137, -0.42, 0.05, 0.3);
        let first = engine.infer(&state);
        let second = engine.infer(&state);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_out_of_universe_inputs_fall_back() {
        let result = engine().infer_detailed(&at(5.0, 5.0, -5.0, f64::NAN));
        assert!(result.fallback);
        assert_eq!(result.force, 0.0);
        assert!(result.strengths.iter().all(|s| *s == 0.0));
        assert_eq!(result.aggregate.sum(), 0.0);
    }

    #[test]
    fn test_silent_rule_base_falls_back() {
        let reference = engine();
        let engine = InferenceEngine::new(
            Input::ALL.map(|input| reference.input(input).clone()),
            reference.output().clone(),
            [Rule::pair(
                (Input::Angle, InputTerm::P),
                (Input::AngularVelocity, InputTerm::P),
                OutputTerm::PB,
            )],
        )
        .unwrap();

        let result = engine.infer_detailed(&at(0.0, 0.0, 0.0, 0.0));
        assert!(result.fallback);
        assert_eq!(result.force, 0.0);
    }

    #[test]
    fn test_rejects_undeclared_terms() {
        let reference = engine();
        let angle = LinguisticVariable::new(
            "angle",
            (-1.0, 1.0),
            [
                (InputTerm::N, triangle(inputs::N)),
                (InputTerm::Z, triangle(inputs::Z)),
            ],
        )
        .unwrap();
        let inputs = [
            angle,
            reference.input(Input::AngularVelocity).clone(),
            reference.input(Input::Position).clone(),
            reference.input(Input::Velocity).clone(),
        ];

        let err = InferenceEngine::new(
            inputs,
            reference.output().clone(),
            reference.rules().iter().cloned(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UndeclaredTerm {
                rule: 6,
                variable: "angle",
                term: "P"
            }
        );

        let output = LinguisticVariable::new(
            "force",
            (-1.0, 1.0),
            [(OutputTerm::Z, triangle(force::Z))],
        )
        .unwrap();
        let err = InferenceEngine::new(
            Input::ALL.map(|input| reference.input(input).clone()),
            output,
            reference.rules().iter().cloned(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UndeclaredTerm {
                rule: 0,
                variable: "force",
                term: "NB"
            }
        );
    }

    #[test]
    fn test_rejects_malformed_rule_base() {
        let reference = engine();
        let inputs = || Input::ALL.map(|input| reference.input(input).clone());

        let empty = Rule::new(&[], OutputTerm::Z).unwrap();
        let err = InferenceEngine::new(inputs(), reference.output().clone(), [empty]).unwrap_err();
        assert_eq!(err, ConfigError::EmptyAntecedent { rule: 0 });

        let rule = reference.rules()[4].clone();
        let err = InferenceEngine::new(
            inputs(),
            reference.output().clone(),
            core::iter::repeat(rule).take(MAX_RULES + 1),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::TooManyRules);
    }
}
