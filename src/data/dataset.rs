use burn::data::dataset::Dataset;

use crate::data::generator::EncodedExample;

/// In-memory reversal dataset backing Burn's DataLoader.
pub struct ReversalDataset {
    examples: Vec<EncodedExample>,
}

impl ReversalDataset {
    pub fn new(examples: Vec<EncodedExample>) -> Self { Self { examples } }

    pub fn example_count(&self) -> usize { self.examples.len() }
}

impl Dataset<EncodedExample> for ReversalDataset {
    fn get(&self, index: usize) -> Option<EncodedExample> {
        self.examples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.examples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::get_dataset;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_get_and_len() {
        let examples = get_dataset(4, 2, 10, 5, &mut StdRng::seed_from_u64(2)).unwrap();
        let first    = examples[0].clone();
        let dataset  = ReversalDataset::new(examples);

        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.example_count(), 5);
        assert_eq!(dataset.get(0), Some(first));
        assert!(dataset.get(5).is_none());
    }
}
