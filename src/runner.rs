//! Property runner
//!
//! Drives the generate / check / minimize loop: draws up to `max_examples`
//! values, stops at the first one that fails the property, and then walks
//! the shrink candidates greedily until no simpler failing value is found.

use crate::config::GenConfig;
use crate::error::GenError;
use crate::generate::Arbitrary;
use crate::shrink::Shrink;
use crate::source::DataSource;
use crate::value::JsValue;
use log::{debug, info};
use std::fmt::Debug;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Configuration for the JsonRunner
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Maximum number of examples to generate
    pub max_examples: u32,

    /// Maximum number of shrink candidates to evaluate
    pub max_shrinks: u32,

    /// Seed of the first example; example `i` uses `seed + i`
    pub seed: u64,

    /// Bounds for every generated value
    pub generation: GenConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_examples: 100,
            max_shrinks: 1000,
            seed: 0,
            generation: GenConfig::default(),
        }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<(), GenError> {
        if self.max_examples == 0 {
            return Err(GenError::InvalidConfig(
                "max_examples must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Statistics about a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerStats {
    pub examples_generated: u32,
    pub passed_examples: u32,
    pub failed_examples: u32,
    /// Shrink candidates evaluated against the property
    pub shrink_calls: u32,
    /// Shrink candidates accepted as the new smallest failure
    pub shrink_steps: u32,
}

/// A failing input before and after minimization
#[derive(Debug, Clone, PartialEq)]
pub struct Counterexample<T> {
    pub original: T,
    pub minimal: T,
    /// Seed of the example that first failed
    pub seed: u64,
    pub shrink_steps: u32,
    pub shrink_calls: u32,
}

/// Result of running a property
#[derive(Debug, Clone, PartialEq)]
pub enum RunResult<T> {
    /// No counterexample among the generated examples
    Passed,
    /// Counterexample found and minimized
    Failed(Counterexample<T>),
}

impl<T> RunResult<T> {
    pub fn is_passed(&self) -> bool {
        matches!(self, RunResult::Passed)
    }

    pub fn counterexample(&self) -> Option<&Counterexample<T>> {
        match self {
            RunResult::Passed => None,
            RunResult::Failed(counterexample) => Some(counterexample),
        }
    }
}

/// Outcome of a greedy minimization
#[derive(Debug, Clone, PartialEq)]
pub struct Minimized<T> {
    pub value: T,
    pub steps: u32,
    pub calls: u32,
}

/// Greedily shrinks `value` while `fails` keeps returning true.
///
/// Each round takes the first candidate that still fails and restarts from
/// it. Stops when a round finds no failing candidate or when `max_calls`
/// candidates have been tried.
pub fn minimize<T, F>(value: T, mut fails: F, max_calls: u32) -> Minimized<T>
where
    T: Shrink + Debug,
    F: FnMut(&T) -> bool,
{
    let mut current = value;
    let mut steps = 0;
    let mut calls = 0;

    'rounds: loop {
        for candidate in current.shrink() {
            if calls >= max_calls {
                debug!("minimize: call budget of {} exhausted", max_calls);
                break 'rounds;
            }
            calls += 1;
            if fails(&candidate) {
                steps += 1;
                debug!("minimize: step {} -> {:?}", steps, candidate);
                current = candidate;
                continue 'rounds;
            }
        }
        break;
    }

    Minimized {
        value: current,
        steps,
        calls,
    }
}

/// Runs a property against generated values.
///
/// A property fails when it returns `false` or panics.
#[derive(Debug)]
pub struct JsonRunner {
    pub config: RunnerConfig,
    pub stats: RunnerStats,
}

impl JsonRunner {
    pub fn new(config: RunnerConfig) -> Result<Self, GenError> {
        config.validate()?;
        Ok(Self {
            config,
            stats: RunnerStats::default(),
        })
    }

    /// `check` specialized to arbitrary JSON values.
    pub fn run<F>(&mut self, property: F) -> RunResult<JsValue>
    where
        F: Fn(&JsValue) -> bool,
    {
        self.check::<JsValue, F>(property)
    }

    pub fn check<T, F>(&mut self, property: F) -> RunResult<T>
    where
        T: Arbitrary + Shrink + Clone + Debug,
        F: Fn(&T) -> bool,
    {
        info!("Starting property run with config: {:?}", self.config);
        let fails = |value: &T| !passes(&property, value);

        for example in 0..self.config.max_examples {
            let seed = self.config.seed.wrapping_add(example as u64);
            let value = T::arbitrary(&mut DataSource::new(seed), self.config.generation);
            self.stats.examples_generated += 1;

            if !fails(&value) {
                self.stats.passed_examples += 1;
                debug!("Example {} (seed {}) passed", example, seed);
                continue;
            }

            self.stats.failed_examples += 1;
            debug!("Example {} (seed {}) failed: {:?}", example, seed, value);

            let minimized = minimize(value.clone(), &fails, self.config.max_shrinks);
            self.stats.shrink_calls += minimized.calls;
            self.stats.shrink_steps += minimized.steps;
            info!(
                "Shrinking complete after {} steps ({} calls): {:?}",
                minimized.steps, minimized.calls, minimized.value
            );

            return RunResult::Failed(Counterexample {
                original: value,
                minimal: minimized.value,
                seed,
                shrink_steps: minimized.steps,
                shrink_calls: minimized.calls,
            });
        }

        info!("No counterexample in {} examples", self.stats.examples_generated);
        RunResult::Passed
    }
}

fn passes<T, F>(property: &F, value: &T) -> bool
where
    F: Fn(&T) -> bool,
{
    catch_unwind(AssertUnwindSafe(|| property(value))).unwrap_or(false)
}
