//! Age distribution histogram.

use serde::{Deserialize, Serialize};

use crate::error::{QuestionnaireError, Result};
use crate::input::DataTable;
use crate::schema::AGE_COLUMN;

/// Upper bound on the number of bins a configuration may ask for.
pub const MAX_BINS: usize = 10_000;

/// Bin layout for the age histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Left edge of the first bin.
    pub start: f64,
    /// Right edge of the last bin (inclusive).
    pub stop: f64,
    /// Width of each bin.
    pub width: f64,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            stop: 100.0,
            width: 10.0,
        }
    }
}

impl HistogramConfig {
    /// Compute bin edges. The last edge is always `stop`.
    pub fn edges(&self) -> Result<Vec<f64>> {
        if !(self.width > 0.0) || !(self.stop > self.start) {
            return Err(QuestionnaireError::InvalidArgument(format!(
                "histogram needs width > 0 and stop > start, got start={} stop={} width={}",
                self.start, self.stop, self.width
            )));
        }

        let bins = ((self.stop - self.start) / self.width).ceil();
        if !(1.0..=MAX_BINS as f64).contains(&bins) {
            return Err(QuestionnaireError::InvalidArgument(format!(
                "histogram needs between 1 and {} bins, got start={} stop={} width={}",
                MAX_BINS, self.start, self.stop, self.width
            )));
        }
        let bins = bins as usize;
        let mut edges: Vec<f64> = (0..bins)
            .map(|i| self.start + i as f64 * self.width)
            .collect();
        edges.push(self.stop);
        Ok(edges)
    }
}

/// Counts per bin plus the bin edges (`edges.len() == counts.len() + 1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeHistogram {
    pub counts: Vec<u64>,
    pub edges: Vec<f64>,
}

impl AgeHistogram {
    /// Total number of counted respondents.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate `(left, right, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(w, &count)| (w[0], w[1], count))
    }
}

/// Bin the `age` column.
///
/// Bins are half-open `[a, b)` except the last, which also includes its right
/// edge. Missing ages are skipped, as are ages outside the edges.
pub fn age_distribution(table: &DataTable, config: &HistogramConfig) -> Result<AgeHistogram> {
    let edges = config.edges()?;
    let index = table
        .column_index(AGE_COLUMN)
        .ok_or_else(|| QuestionnaireError::schema(AGE_COLUMN, "required column is absent"))?;

    let mut counts = vec![0u64; edges.len() - 1];
    let last_bin = counts.len() - 1;
    let first = edges[0];
    let last = edges[edges.len() - 1];

    for (row, cell) in table.column_values(index).enumerate() {
        if cell.is_missing() {
            continue;
        }
        let age = cell.as_f64().ok_or_else(|| {
            QuestionnaireError::schema(
                AGE_COLUMN,
                format!("expected numeric values, found {} at row {}", cell.kind(), row),
            )
        })?;

        if age < first || age > last {
            continue;
        }

        // partition_point gives the number of edges <= age.
        let bin = edges.partition_point(|&edge| edge <= age).saturating_sub(1);
        counts[bin.min(last_bin)] += 1;
    }

    Ok(AgeHistogram { counts, edges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Cell;

    fn age_table(ages: &[Option<f64>]) -> DataTable {
        DataTable::new(
            vec!["age".into()],
            ages.iter().map(|&a| vec![Cell::from(a)]).collect(),
        )
    }

    #[test]
    fn test_default_edges() {
        let edges = HistogramConfig::default().edges().unwrap();
        assert_eq!(edges, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]);
    }

    #[test]
    fn test_last_bin_is_closed() {
        let table = age_table(&[Some(0.0), Some(9.99), Some(10.0), Some(90.0), Some(100.0)]);
        let hist = age_distribution(&table, &HistogramConfig::default()).unwrap();

        assert_eq!(hist.counts, vec![2, 1, 0, 0, 0, 0, 0, 0, 0, 2]);
        assert_eq!(hist.total(), 5);
    }

    #[test]
    fn test_missing_and_out_of_range_skipped() {
        let table = age_table(&[None, Some(-1.0), Some(100.5), Some(35.0)]);
        let hist = age_distribution(&table, &HistogramConfig::default()).unwrap();

        assert_eq!(hist.total(), 1);
        assert_eq!(hist.counts[3], 1);
    }

    #[test]
    fn test_uneven_last_bin() {
        let config = HistogramConfig { start: 0.0, stop: 25.0, width: 10.0 };
        assert_eq!(config.edges().unwrap(), vec![0.0, 10.0, 20.0, 25.0]);
    }

    #[test]
    fn test_invalid_config() {
        let config = HistogramConfig { width: 0.0, ..HistogramConfig::default() };
        assert!(matches!(config.edges(), Err(QuestionnaireError::InvalidArgument(_))));
    }

    #[test]
    fn test_degenerate_bin_counts_rejected() {
        let too_few = HistogramConfig { start: 0.0, stop: 1e-320, width: 1e300 };
        assert!(matches!(too_few.edges(), Err(QuestionnaireError::InvalidArgument(_))));

        let table = age_table(&[Some(1e-320)]);
        assert!(age_distribution(&table, &too_few).is_err());

        let too_many = HistogramConfig { width: 1e-12, ..HistogramConfig::default() };
        assert!(matches!(too_many.edges(), Err(QuestionnaireError::InvalidArgument(_))));

        let at_cap = HistogramConfig { start: 0.0, stop: MAX_BINS as f64, width: 1.0 };
        assert_eq!(at_cap.edges().unwrap().len(), MAX_BINS + 1);
    }

    #[test]
    fn test_text_age_is_schema_error() {
        let table = DataTable::new(vec!["age".into()], vec![vec![Cell::from("forty")]]);
        let err = age_distribution(&table, &HistogramConfig::default()).unwrap_err();
        assert!(matches!(err, QuestionnaireError::Schema { .. }));
    }

    #[test]
    fn test_bins_iterator() {
        let table = age_table(&[Some(15.0)]);
        let hist = age_distribution(&table, &HistogramConfig::default()).unwrap();
        let (left, right, count) = hist.bins().nth(1).unwrap();
        assert_eq!((left, right, count), (10.0, 20.0, 1));
    }
}
