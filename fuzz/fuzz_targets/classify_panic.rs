#![no_main]
use libfuzzer_sys::fuzz_target;
use ticky_log::{Aggregator, LineClassifier};

fuzz_target!(|data: &[u8]| {
    // Lossy conversion keeps inputs that are "almost" text in play.
    let s = String::from_utf8_lossy(data);
    let classifier = LineClassifier::shared();

    let agg = Aggregator::from_lines(classifier, s.lines());
    let report = agg.error_report();
    assert!(report.rows.windows(2).all(|w| w[0].count >= w[1].count));

    let _ = ticky_log::analyze(data);
});
