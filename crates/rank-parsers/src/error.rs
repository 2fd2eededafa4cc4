use models::InvalidDistribution;
use rust_decimal::Decimal;

/// A scraped line that is not `<label> <number>%`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse line {line_number}: {line:?}")]
pub struct ParseError {
    /// 1-based position of the line in the batch.
    pub line_number: usize,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("cannot normalize an empty distribution")]
    EmptyDistribution,

    #[error("rank shares sum to {total}, nothing to scale")]
    DegenerateDistribution { total: Decimal },

    #[error("rank share of tier {tier:?} cannot be scaled without overflow")]
    Overflow { tier: String },

    #[error("invalid distribution: {0}")]
    Invalid(#[from] InvalidDistribution),
}
