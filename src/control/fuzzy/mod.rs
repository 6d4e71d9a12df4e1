//! Нечеткий вывод: функции принадлежности, переменные, правила, регулятор

pub mod engine;
pub mod membership;
pub mod rule;
pub mod variable;

pub use engine::{Inference, InferenceEngine};
pub use membership::MembershipFunction;
pub use rule::{Clause, Conjunction, Fuzzified, Input, Rule};
pub use variable::{Degrees, InputTerm, LinguisticVariable, OutputTerm, Term, Universe};
