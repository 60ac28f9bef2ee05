// Distributions shared by the number, string and field-name generators.
// Everything here draws through `DataSource`, so a seed fixes every
// length and magnitude the generators pick.

use crate::source::DataSource;

use rand::distributions::WeightedIndex;

lazy_static::lazy_static! {
    // Weight per bit length 1..=63, one row per byte of magnitude.
    static ref BITLENGTHS: WeightedIndex<f64> = {
        let weights = [4.0, 2.0, 1.0, 0.5, 0.1, 0.1, 0.1, 0.1]
            .iter()
            .flat_map(|&weight| std::iter::repeat(weight).take(8))
            .take(63);
        WeightedIndex::new(weights).expect("bit length weights are positive")
    };
}

/// Decides, one step at a time, how many items a variable-length draw gets.
#[derive(Debug, Clone)]
pub struct Repeat {
    min_count: u64,
    max_count: u64,
    p_continue: f64,

    current_count: u64,
}

impl Repeat {
    pub fn new(min_count: u64, max_count: u64, expected_count: f64) -> Repeat {
        Repeat {
            min_count,
            max_count,
            p_continue: 1.0 - 1.0 / (1.0 + expected_count.max(0.0)),
            current_count: 0,
        }
    }

    pub fn should_continue(&mut self, source: &mut DataSource) -> bool {
        if self.current_count < self.min_count {
            self.current_count += 1;
            return true;
        } else if self.current_count >= self.max_count {
            return false;
        }

        let result = source.draw_boolean(self.p_continue);
        if result {
            self.current_count += 1;
        }
        result
    }
}

/// A signed integer whose bit length is drawn first, heavily favouring
/// small magnitudes. The result always fits in 63 bits plus sign.
pub fn integer_from_bitlengths(source: &mut DataSource) -> i64 {
    let bitlength = source.sample::<usize, _>(&*BITLENGTHS) as u32 + 1;
    let base = source.bits(bitlength) as i64;
    if source.draw_boolean(0.5) {
        -base
    } else {
        base
    }
}
