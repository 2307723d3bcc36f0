//! `QuestionnaireAnalysis` facade and public configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{
    AgeHistogram, DEFAULT_AGE_THRESHOLD, GroupMeans, HistogramConfig, age_distribution,
    correlate_gender_age,
};
use crate::error::{QuestionnaireError, Result};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::transform::{DEFAULT_MAX_MISSING, Imputation, ScoreImputer, SubjectScorer};
use crate::validation::{EmailValidator, InvalidEmail};

/// Configuration for a questionnaire analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Age histogram bins.
    pub histogram: HistogramConfig,
    /// Unanswered questions still eligible for scoring.
    pub max_missing: i64,
    /// Age splitting the two brackets in the gender/age grouping.
    pub age_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            histogram: HistogramConfig::default(),
            max_missing: DEFAULT_MAX_MISSING as i64,
            age_threshold: DEFAULT_AGE_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file. Absent keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| QuestionnaireError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| QuestionnaireError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Full pipeline summary for one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Age histogram of all loaded rows.
    pub age_histogram: AgeHistogram,
    /// Rows rejected by the email filter.
    pub invalid_emails: Vec<InvalidEmail>,
    /// Rows touched by imputation.
    pub imputed_rows: Vec<usize>,
    /// Number of cells filled by imputation.
    pub imputed_values: usize,
    /// Rows that received a score.
    pub scored_rows: usize,
    /// Rows disqualified from scoring.
    pub unscored_rows: usize,
    /// Question means by gender and age bracket.
    pub gender_age_means: Vec<GroupMeans>,
}

/// Reads and analyzes data produced by a questionnaire experiment.
///
/// Every analysis step works on the loaded table and returns new values; the
/// loaded table itself never changes after [`read_data`](Self::read_data).
pub struct QuestionnaireAnalysis {
    data_fname: PathBuf,
    config: AnalysisConfig,
    data: Option<DataTable>,
    source: Option<SourceMetadata>,
}

impl QuestionnaireAnalysis {
    /// Create an analysis over `data_fname` with the default configuration.
    ///
    /// Fails if the file does not exist.
    pub fn new(data_fname: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(data_fname, AnalysisConfig::default())
    }

    /// Create an analysis with a custom configuration.
    pub fn with_config(data_fname: impl AsRef<Path>, config: AnalysisConfig) -> Result<Self> {
        let data_fname = data_fname.as_ref().to_path_buf();
        if !data_fname.is_file() {
            return Err(QuestionnaireError::Io {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                path: data_fname,
            });
        }

        Ok(Self {
            data_fname,
            config,
            data: None,
            source: None,
        })
    }

    /// Path of the data file.
    pub fn data_fname(&self) -> &Path {
        &self.data_fname
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Read the data file into memory.
    pub fn read_data(&mut self) -> Result<&DataTable> {
        let (table, source) = Parser::with_config(self.config.parser.clone()).parse_file(&self.data_fname)?;
        info!(file = %source.file, rows = source.row_count, "read questionnaire data");
        self.source = Some(source);
        Ok(&*self.data.insert(table))
    }

    /// The loaded table.
    pub fn data(&self) -> Result<&DataTable> {
        self.data.as_ref().ok_or(QuestionnaireError::NotLoaded)
    }

    /// Metadata of the loaded file.
    pub fn source(&self) -> Result<&SourceMetadata> {
        self.source.as_ref().ok_or(QuestionnaireError::NotLoaded)
    }

    /// Age distribution of the participants.
    pub fn show_age_distrib(&self) -> Result<AgeHistogram> {
        age_distribution(self.data()?, &self.config.histogram)
    }

    /// Table without the rows whose email is invalid, reindexed from 0.
    pub fn remove_rows_without_mail(&self) -> Result<DataTable> {
        EmailValidator::new().filter_valid(self.data()?)
    }

    /// Fill missing question answers with each row's own mean.
    pub fn fill_na_with_mean(&self) -> Result<Imputation> {
        ScoreImputer::new().impute(self.data()?)
    }

    /// Add the composite `score` column.
    pub fn score_subjects(&self, max_missing: i64) -> Result<DataTable> {
        SubjectScorer::new(max_missing)?.score(self.data()?)
    }

    /// Question means by gender and age bracket.
    pub fn correlate_gender_age(&self) -> Result<Vec<GroupMeans>> {
        correlate_gender_age(self.data()?, self.config.age_threshold)
    }

    /// Run every step on the loaded data and summarize the outcome.
    ///
    /// Each step runs on the loaded table independently; scoring sees the
    /// original, unimputed answers.
    pub fn report(&self) -> Result<AnalysisReport> {
        let data = self.data()?;
        let source = self.source()?.clone();

        let age_histogram = age_distribution(data, &self.config.histogram)?;
        let invalid_emails = EmailValidator::new().invalid_rows(data)?;
        let imputation = ScoreImputer::new().impute(data)?;
        let (_, scores) = SubjectScorer::new(self.config.max_missing)?.score_with_summary(data)?;
        let gender_age_means = correlate_gender_age(data, self.config.age_threshold)?;

        Ok(AnalysisReport {
            source,
            age_histogram,
            invalid_emails,
            imputed_values: imputation.values_changed(),
            imputed_rows: imputation.touched_rows,
            scored_rows: scores.scored,
            unscored_rows: scores.unscored,
            gender_age_means,
        })
    }
}
