use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Level, Operator, Problem};

/// How many operands to draw and from which closed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rule {
    count: Count,
    min: i64,
    max: i64,
    sort_descending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Count {
    Fixed(usize),
    /// Drawn fresh for every problem, bounds inclusive
    Between(usize, usize),
}

fn rule_for(level: Level, operator: Operator) -> Rule {
    let (count, min, max, sort_descending) = match (level, operator) {
        (Level::Simple, Operator::Addition) => (Count::Fixed(2), 0, 10, false),
        (Level::Simple, Operator::Subtraction) => (Count::Fixed(2), 0, 5, true),
        (Level::Simple, Operator::Multiplication) => (Count::Fixed(2), 1, 3, false),
        (Level::Medium, Operator::Addition) => (Count::Fixed(2), 0, 100, false),
        (Level::Medium, Operator::Subtraction) => (Count::Fixed(2), 0, 100, true),
        (Level::Medium, Operator::Multiplication) => (Count::Fixed(2), 0, 9, false),
        (Level::Hard, Operator::Addition) => (Count::Between(2, 4), 0, 100, false),
        // Left unsorted on purpose: negative answers only reachable by typing.
        (Level::Hard, Operator::Subtraction) => (Count::Fixed(2), 0, 100, false),
        (Level::Hard, Operator::Multiplication) => (Count::Between(2, 3), 0, 20, false),
    };
    Rule {
        count,
        min,
        max,
        sort_descending,
    }
}

/// Random problem source for a session.
pub struct ProblemGenerator {
    rng: StdRng,
}

impl ProblemGenerator {
    pub fn new() -> Self {
        ProblemGenerator {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for reproducible drills
    pub fn with_seed(seed: u64) -> Self {
        ProblemGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw an integer in `[min, max]` by rounding a continuous draw.
    ///
    /// The endpoints get half the weight of interior values; that skew is part
    /// of the game's feel and is kept.
    pub fn random_number(&mut self, min: i64, max: i64) -> i64 {
        let unit: f64 = self.rng.random();
        (min as f64 + unit * (max - min) as f64).round() as i64
    }

    /// Generate a fresh problem for the given level and operator.
    pub fn generate(&mut self, level: Level, operator: Operator) -> Problem {
        let rule = rule_for(level, operator);
        let count = match rule.count {
            Count::Fixed(n) => n,
            Count::Between(lo, hi) => self.random_number(lo as i64, hi as i64) as usize,
        };

        let mut operands: Vec<i64> = (0..count)
            .map(|_| self.random_number(rule.min, rule.max))
            .collect();
        if rule.sort_descending {
            operands.sort_unstable_by(|a, b| b.cmp(a));
        }

        debug!("generated {} {} operands: {:?}", level, operator.name(), operands);
        Problem::new(operator, operands)
    }
}

impl Default for ProblemGenerator {
    fn default() -> Self {
        Self::new()
    }
}
