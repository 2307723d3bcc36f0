//! Table schema: cell and column types plus the fixed respondent layout.

mod column;
mod survey;
mod types;

pub use column::ColumnSchema;
pub use survey::{
    AGE_COLUMN, EMAIL_COLUMN, GENDER_COLUMN, QUESTION_COLUMNS, QuestionColumns, QuestionScores,
    SCORE_COLUMN,
};
pub use types::{Cell, ColumnType};
