//! # Structural Shrinking
//!
//! Given a value that made a property fail, `shrink` lists simpler values
//! to try instead. The candidate stream is lazy: nothing beyond the next
//! candidate is built, so large inputs do not blow up combinatorially. It
//! is also restartable, because every call to `shrink` returns a fresh
//! iterator over the same candidates.
//!
//! The structure mirrors generation:
//!
//! - arrays and objects shrink their element (or field) sequence with
//!   `SequenceShrinker`, which first drops chunks and then shrinks single
//!   elements in place;
//! - strings shrink as sequences of characters;
//! - numbers move toward zero;
//! - `Null`, `Undefined` and booleans are already minimal.
//!
//! Object fields shrink through their values only. Field names are carried
//! over unchanged.
//!
//! Every candidate is strictly smaller than its source under a well-founded
//! order, so repeatedly shrinking always reaches a value with no candidates.

use crate::number::JsNumber;
use crate::value::{JsArray, JsObject, JsValue};
use bigdecimal::num_bigint::BigInt;
use bigdecimal::Zero;
use std::iter;

/// Lazy stream of shrink candidates
pub type Shrinks<T> = Box<dyn Iterator<Item = T>>;

/// Types that can propose simpler versions of themselves.
pub trait Shrink: Sized {
    fn shrink(&self) -> Shrinks<Self>;
}

/// Candidates for minimizing a failing `JsValue`.
pub fn shrink(value: &JsValue) -> Shrinks<JsValue> {
    value.shrink()
}

fn nothing<T: 'static>() -> Shrinks<T> {
    Box::new(iter::empty())
}

/// Generic shrinking strategy for ordered sequences.
///
/// Yields, in order:
/// 1. the empty sequence (when the input is non-empty);
/// 2. the input with an aligned chunk removed, for chunk sizes
///    `len / 2, len / 4, ..., 1`;
/// 3. the input with one element replaced by each of that element's own
///    shrinks, left to right.
pub struct SequenceShrinker<T> {
    items: Vec<T>,
    /// Current removal chunk size; zero once removal is exhausted.
    chunk: usize,
    offset: usize,
    index: usize,
    candidates: Option<Shrinks<T>>,
}

impl<T: Shrink + Clone> SequenceShrinker<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            chunk: items.len(),
            items,
            offset: 0,
            index: 0,
            candidates: None,
        }
    }
}

impl<T: Shrink + Clone> Iterator for SequenceShrinker<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let len = self.items.len();

        while self.chunk > 0 {
            if self.offset < len {
                let end = (self.offset + self.chunk).min(len);
                let mut candidate = Vec::with_capacity(len - (end - self.offset));
                candidate.extend_from_slice(&self.items[..self.offset]);
                candidate.extend_from_slice(&self.items[end..]);
                self.offset += self.chunk;
                return Some(candidate);
            }
            self.chunk /= 2;
            self.offset = 0;
        }

        while self.index < len {
            if let Some(replacement) = self.candidates.as_mut().and_then(|c| c.next()) {
                let mut candidate = self.items.clone();
                candidate[self.index] = replacement;
                return Some(candidate);
            }
            if self.candidates.take().is_some() {
                self.index += 1;
            } else {
                self.candidates = Some(self.items[self.index].shrink());
            }
        }
        None
    }
}

/// Zero first, then one fewer fractional digit, then the absolute value of
/// a negative number, then `x - x/2, x - x/4, ...` at the same scale.
pub fn shrink_number(number: &JsNumber) -> Shrinks<JsNumber> {
    if number.is_zero() {
        return nothing();
    }

    let mut eager = vec![JsNumber::zero()];
    if let Some(truncated) = number.truncate_last_digit() {
        if !truncated.is_zero() {
            eager.push(truncated);
        }
    }
    if number.is_negative() {
        eager.push(number.abs());
    }

    // Integers halve in whole units even when they carry trailing zeros.
    let scale = number.scale().max(0);
    let unscaled = number.unscaled_at(scale);
    let halves = iter::successors(Some(half(&unscaled)), |h| Some(half(h)))
        .take_while(|h| !h.is_zero())
        .map(move |h| JsNumber::new(&unscaled - h, scale));

    Box::new(eager.into_iter().chain(halves))
}

fn half(n: &BigInt) -> BigInt {
    n / BigInt::from(2)
}

pub fn shrink_string(s: &str) -> Shrinks<String> {
    let chars: Vec<char> = s.chars().collect();
    Box::new(SequenceShrinker::new(chars).map(|chars| chars.into_iter().collect::<String>()))
}

impl Shrink for bool {
    fn shrink(&self) -> Shrinks<bool> {
        nothing()
    }
}

impl Shrink for char {
    fn shrink(&self) -> Shrinks<char> {
        if *self == 'a' {
            nothing()
        } else {
            Box::new(iter::once('a'))
        }
    }
}

impl Shrink for String {
    fn shrink(&self) -> Shrinks<String> {
        shrink_string(self)
    }
}

impl Shrink for JsNumber {
    fn shrink(&self) -> Shrinks<JsNumber> {
        shrink_number(self)
    }
}

impl Shrink for (String, JsValue) {
    fn shrink(&self) -> Shrinks<(String, JsValue)> {
        let name = self.0.clone();
        Box::new(self.1.shrink().map(move |value| (name.clone(), value)))
    }
}

impl Shrink for JsArray {
    fn shrink(&self) -> Shrinks<JsArray> {
        Box::new(SequenceShrinker::new(self.0.clone()).map(JsArray))
    }
}

impl Shrink for JsObject {
    fn shrink(&self) -> Shrinks<JsObject> {
        Box::new(SequenceShrinker::new(self.0.clone()).map(JsObject))
    }
}

impl Shrink for JsValue {
    fn shrink(&self) -> Shrinks<JsValue> {
        match self {
            JsValue::Array(array) => Box::new(array.shrink().map(JsValue::Array)),
            JsValue::Object(object) => Box::new(object.shrink().map(JsValue::Object)),
            JsValue::String(s) => Box::new(shrink_string(s).map(JsValue::String)),
            JsValue::Number(n) => Box::new(shrink_number(n).map(JsValue::Number)),
            JsValue::Null | JsValue::Undefined(_) | JsValue::Boolean(_) => nothing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenConfig;
    use crate::generate::generate_value;
    use crate::source::DataSource;

    fn num(unscaled: i64, scale: i64) -> JsNumber {
        JsNumber::new(unscaled, scale)
    }

    #[test]
    fn test_minimal_values_have_no_shrinks() {
        assert_eq!(shrink(&JsValue::Null).count(), 0);
        assert_eq!(shrink(&JsValue::Boolean(true)).count(), 0);
        assert_eq!(shrink(&JsValue::Boolean(false)).count(), 0);
        assert_eq!(shrink(&JsValue::undefined("anything")).count(), 0);
        assert_eq!(shrink(&JsValue::number(0)).count(), 0);
        assert_eq!(shrink(&JsValue::string("")).count(), 0);
        assert_eq!(shrink(&JsValue::array(vec![])).count(), 0);
        assert_eq!(shrink(&JsValue::object(vec![])).count(), 0);
    }

    #[test]
    fn test_array_candidates() {
        let value = JsValue::array(vec![JsValue::number(5), JsValue::number(3)]);
        let candidates: Vec<JsValue> = shrink(&value).collect();

        assert_eq!(candidates[0], JsValue::array(vec![]));
        assert_eq!(candidates[1], JsValue::array(vec![JsValue::number(3)]));
        assert_eq!(candidates[2], JsValue::array(vec![JsValue::number(5)]));
        assert!(candidates.contains(&JsValue::array(vec![JsValue::number(0), JsValue::number(3)])));
        assert!(candidates.contains(&JsValue::array(vec![JsValue::number(5), JsValue::number(0)])));
        assert!(!candidates.contains(&value));
    }

    #[test]
    fn test_sequence_chunk_removal() {
        let candidates: Vec<Vec<bool>> = SequenceShrinker::new(vec![true, false, true, false]).collect();
        assert_eq!(
            candidates,
            vec![
                vec![],
                vec![true, false],
                vec![true, false],
                vec![false, true, false],
                vec![true, true, false],
                vec![true, false, false],
                vec![true, false, true],
            ]
        );
    }

    #[test]
    fn test_shrinking_is_restartable() {
        let value = JsValue::object(vec![
            ("a".to_string(), JsValue::string("xyz")),
            ("b".to_string(), JsValue::number(-12)),
        ]);
        let first: Vec<JsValue> = shrink(&value).collect();
        let second: Vec<JsValue> = shrink(&value).collect();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_object_names_are_not_shrunk() {
        let value = JsValue::object(vec![("longName7".to_string(), JsValue::string("hello"))]);
        for candidate in shrink(&value) {
            match candidate {
                JsValue::Object(object) => {
                    assert!(object.names().all(|name| name == "longName7"));
                }
                other => panic!("object shrank to {:?}", other),
            }
        }
    }

    #[test]
    fn test_number_candidates() {
        let candidates: Vec<JsNumber> = shrink_number(&JsNumber::from(5)).collect();
        assert_eq!(candidates, vec![JsNumber::zero(), JsNumber::from(3), JsNumber::from(4)]);

        let candidates: Vec<JsNumber> = shrink_number(&num(-125, 2)).collect();
        assert_eq!(candidates[0], JsNumber::zero());
        assert_eq!(candidates[1], num(-12, 1));
        assert_eq!(candidates[2], num(125, 2));
        assert!(candidates[3..]
            .iter()
            .all(|c| c.scale() <= 2 && c.abs() < num(125, 2)));
    }

    #[test]
    fn test_string_candidates() {
        let candidates: Vec<String> = shrink_string("bc").collect();
        assert_eq!(candidates, vec!["", "c", "b", "ac", "ba"]);
        assert_eq!(shrink_string("a").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_candidates_never_grow() {
        let config = GenConfig::default().with_depth(3).with_width(3);
        for seed in 0..50 {
            let value = generate_value(&mut DataSource::new(seed), config);
            for candidate in shrink(&value).take(200) {
                assert_ne!(candidate, value);
                assert!(candidate.size() <= value.size());
                assert!(candidate.nesting_depth() <= value.nesting_depth());
            }
        }
    }

    #[test]
    fn test_repeated_shrinking_reaches_fixed_point() {
        let config = GenConfig::default().with_depth(3).with_width(3);
        for seed in 0..50 {
            let mut current = generate_value(&mut DataSource::new(seed), config);
            let mut steps = 0;
            loop {
                let mut candidates = shrink(&current);
                let first = candidates.next();
                match candidates.next().or(first) {
                    Some(next) => current = next,
                    None => break,
                }
                steps += 1;
                assert!(steps < 10_000, "no fixed point for seed {}", seed);
            }
            assert_eq!(shrink(&current).count(), 0);
        }
    }
}
