use std::fmt;

/// Result of a solved problem: the products of the first qualifying pair
/// and triple of entries.
#[derive(Debug, PartialEq, Clone)]
pub struct Solution {
    pub pair: i64,   // product of the first pair summing to the target
    pub triple: i64, // product of the first triple summing to the target
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pair, self.triple)
    }
}
