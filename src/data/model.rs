// ---------------------------------------------------------------------------
// SampleSequence – the ordered values handed to the chart
// ---------------------------------------------------------------------------

/// Value stored at index 0 before any line is read.
pub const SEED_VALUE: f64 = 0.0;

/// Parsed samples in the order their lines were consumed.
///
/// The sequence always starts with [`SEED_VALUE`], so it is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence {
    values: Vec<f64>,
}

impl Default for SampleSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSequence {
    /// A sequence holding only the seed value.
    pub fn new() -> Self {
        Self {
            values: vec![SEED_VALUE],
        }
    }

    /// Append a parsed sample.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples that came from the input (the seed excluded).
    pub fn parsed_count(&self) -> usize {
        self.values.len() - 1
    }

    /// `[index, value]` pairs, ready for a line series.
    pub fn indexed_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sequence_holds_only_the_seed() {
        let seq = SampleSequence::new();
        assert_eq!(seq.as_slice(), &[0.0]);
        assert_eq!(seq.parsed_count(), 0);
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut seq = SampleSequence::default();
        for v in [3.0, -1.0, 3.0] {
            seq.push(v);
        }
        assert_eq!(seq.as_slice(), &[0.0, 3.0, -1.0, 3.0]);
        assert_eq!(seq.parsed_count(), 3);
    }

    #[test]
    fn indexed_points_use_zero_based_positions() {
        let mut seq = SampleSequence::new();
        seq.push(2.5);
        seq.push(7.0);
        let points: Vec<[f64; 2]> = seq.indexed_points().collect();
        assert_eq!(points, vec![[0.0, 0.0], [1.0, 2.5], [2.0, 7.0]]);
    }
}
