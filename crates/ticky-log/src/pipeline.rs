use crate::aggregate::Aggregator;
use crate::classifier::LineClassifier;
use crate::error::AnalyzeError;
use crate::ir::Event;
use std::io::BufRead;

/// Reads `reader` to the end, folding every matching line into a fresh
/// [`Aggregator`].
///
/// The first read failure aborts the pass and is returned as
/// [`AnalyzeError::Read`]; nothing is retried.
pub fn analyze<R: BufRead>(reader: R) -> Result<Aggregator, AnalyzeError> {
    analyze_with(LineClassifier::shared(), reader)
}

pub fn analyze_with<R: BufRead>(
    classifier: &LineClassifier,
    reader: R,
) -> Result<Aggregator, AnalyzeError> {
    let mut aggregator = Aggregator::new();
    for line in reader.lines() {
        let line = line.map_err(AnalyzeError::Read)?;
        if let Some(event) = classifier.classify(&line) {
            aggregator.accumulate(event);
        }
    }

    log::debug!(
        "Folded {} events: {} distinct error messages, {} users",
        aggregator.matched_events(),
        aggregator.error_counts().len(),
        aggregator.user_stats().len()
    );
    Ok(aggregator)
}

/// Collects the events of every matching line, in input order.
pub fn events<R: BufRead>(reader: R) -> Result<Vec<Event>, AnalyzeError> {
    let classifier = LineClassifier::shared();
    let mut events = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(AnalyzeError::Read)?;
        events.extend(classifier.classify(&line));
    }
    Ok(events)
}
