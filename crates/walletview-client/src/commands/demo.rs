use crate::ClientResult;
use crate::commands::offers::{self, parse_sort};
use crate::commands::statement::{self, StatementFilterArgs, build_criteria};
use crate::contracts::envelope::SuccessEnvelope;
use crate::sample::{sample_now, sample_offers_source, sample_transactions_source};
use crate::source::{ResolvedSource, SourceKind};

/// Runs the statement command over the bundled wallet history, pinned to the
/// sample clock so relative ranges are reproducible.
pub fn statement(filters: &StatementFilterArgs) -> ClientResult<SuccessEnvelope> {
    let criteria = build_criteria(filters)?;
    let source = sample_source(sample_transactions_source());
    statement::run_with_source(&source, criteria, sample_now())
}

pub fn offers(search: Option<&str>, sort: Option<&str>) -> ClientResult<SuccessEnvelope> {
    let sort = parse_sort(sort)?;
    let source = sample_source(sample_offers_source());
    offers::run_with_source(&source, search, sort, sample_now().date())
}

fn sample_source(content: &str) -> ResolvedSource {
    ResolvedSource {
        kind: SourceKind::Sample,
        location: None,
        content: content.to_string(),
    }
}
