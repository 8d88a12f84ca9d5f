/// Default bucket count for the completion-time distribution.
pub const DEFAULT_BINS: usize = 30;

/// Equal-width histogram over the observed range of a column.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bucket edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bucket `values` into `bins` equal-width buckets spanning `[min, max]`.
    ///
    /// Every bucket is half-open except the last, which also takes `max`.
    /// A degenerate range (all values equal) is widened to `value ± 0.5`.
    /// Non-finite values are skipped. Returns `None` when no finite value is
    /// left or for zero buckets.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if values.is_empty() || bins == 0 {
            return None;
        }
        let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if (max - min).abs() < f64::EPSILON {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| min + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for v in values {
            let idx = (((v - min) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Histogram { edges, counts })
    }

    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Centre of each bucket, paired with its count.
    pub fn bars(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(w, &c)| ((w[0] + w[1]) / 2.0, c))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_value_lands_in_one_bucket() {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let h = Histogram::from_values(&values, DEFAULT_BINS).unwrap();
        assert_eq!(h.counts.len(), 30);
        assert_eq!(h.edges.len(), 31);
        assert_eq!(h.total(), 100);
        assert_eq!(h.edges[0], 1.0);
        assert!((h.edges[30] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn maximum_goes_into_last_bucket() {
        let h = Histogram::from_values(&[0.0, 5.0, 10.0], 2).unwrap();
        assert_eq!(h.counts, vec![1, 2]);
        assert_eq!(h.bin_width(), 5.0);
    }

    #[test]
    fn single_value_range_is_widened() {
        let h = Histogram::from_values(&[4.0, 4.0], 4).unwrap();
        assert_eq!(h.edges.first(), Some(&3.5));
        assert_eq!(h.edges.last(), Some(&4.5));
        assert_eq!(h.total(), 2);
        // 4.0 sits on the boundary between the two middle buckets.
        assert_eq!(h.counts, vec![0, 0, 2, 0]);
    }

    #[test]
    fn bars_are_bucket_centres() {
        let h = Histogram::from_values(&[0.0, 10.0], 2).unwrap();
        let bars: Vec<_> = h.bars().collect();
        assert_eq!(bars, vec![(2.5, 1), (7.5, 1)]);
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let h = Histogram::from_values(&[f64::INFINITY, 2.0, f64::NAN, 4.0], 2).unwrap();
        assert_eq!(h.edges, vec![2.0, 3.0, 4.0]);
        assert_eq!(h.counts, vec![1, 1]);
        assert!(h.bin_width().is_finite());
        assert_eq!(Histogram::from_values(&[f64::NEG_INFINITY], 30), None);
    }

    #[test]
    fn nothing_to_bucket() {
        assert_eq!(Histogram::from_values(&[], 30), None);
        assert_eq!(Histogram::from_values(&[1.0], 0), None);
    }
}
