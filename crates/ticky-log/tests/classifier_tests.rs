use ticky_log::LineClassifier;
use ticky_log::ir::Severity;

#[test]
fn test_simple_structure() {
    let classifier = LineClassifier::new();
    let event = classifier
        .classify("Jan 31 02:30:04 ubuntu.local ticky: ERROR Timeout while retrieving information (oren)")
        .expect("line should match");

    assert_eq!(event.severity, Severity::Error);
    assert_eq!(event.message, "Timeout while retrieving information");
    assert_eq!(event.user, "oren");
}

#[test]
fn test_message_is_not_trimmed_internally() {
    let classifier = LineClassifier::new();
    let single = classifier.classify("ticky: ERROR Disk full (alice)").unwrap();
    let double = classifier.classify("ticky: ERROR Disk  full (alice)").unwrap();
    let leading = classifier.classify("ticky: ERROR  Disk full (alice)").unwrap();

    assert_eq!(single.message, "Disk full");
    assert_eq!(double.message, "Disk  full");
    assert_eq!(leading.message, " Disk full");
}

#[test]
fn test_only_one_separator_space_is_dropped() {
    let classifier = LineClassifier::new();
    let one = classifier.classify("ticky: ERROR Disk full (alice)").unwrap();
    let two = classifier.classify("ticky: ERROR Disk full  (alice)").unwrap();
    let three = classifier.classify("ticky: ERROR Disk full   (alice)").unwrap();

    assert_eq!(one.message, "Disk full");
    assert_eq!(two.message, "Disk full ");
    assert_eq!(three.message, "Disk full  ");

    let agg = ticky_log::analyze(
        "ticky: ERROR Disk full (alice)\nticky: ERROR Disk full  (alice)\n".as_bytes(),
    )
    .unwrap();
    assert_eq!(agg.error_counts().len(), 2);
    assert_eq!(agg.error_counts()["Disk full"], 1);
    assert_eq!(agg.error_counts()["Disk full "], 1);
}

#[test]
fn test_pid_forms_before_user() {
    let classifier = LineClassifier::new();
    for line in [
        "ticky: ERROR Disk full [#12] (alice)",
        "ticky: ERROR Disk full [12] (alice)",
        "ticky: ERROR Disk full #12 (alice)",
        "ticky: ERROR Disk full #12](alice)",
    ] {
        let event = classifier
            .classify(line)
            .unwrap_or_else(|| panic!("expected a match for {line:?}"));
        assert_eq!(event.message, "Disk full", "message for {line:?}");
        assert_eq!(event.user, "alice", "user for {line:?}");
    }

    // A second space before the pid stays in the message.
    let event = classifier.classify("ticky: ERROR Disk full  #12 (alice)").unwrap();
    assert_eq!(event.message, "Disk full ");
}

#[test]
fn test_user_field_is_verbatim() {
    let classifier = LineClassifier::new();
    let event = classifier
        .classify("ticky: INFO Created ticket (first.last@example.com)")
        .unwrap();
    assert_eq!(event.user, "first.last@example.com");

    let event = classifier.classify("ticky: INFO Created ticket ( spaced )").unwrap();
    assert_eq!(event.user, " spaced ");
}

#[test]
fn test_empty_message_and_user() {
    let classifier = LineClassifier::new();
    let event = classifier.classify("ticky: ERROR ()").unwrap();
    assert_eq!(event.message, "");
    assert_eq!(event.user, "");
}

#[test]
fn test_plus_in_severity_token() {
    let event = ticky_log::classify("ticky: INFO+ Login (bob)").unwrap();
    assert_eq!(event.severity, Severity::Other("INFO+".to_string()));
    assert_eq!(event.severity.as_str(), "INFO+");
}

#[test]
fn test_classifier_is_shareable_across_threads() {
    let classifier = LineClassifier::shared();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                classifier
                    .classify(&format!("ticky: INFO Login (user{i})"))
                    .map(|e| e.user)
            })
        })
        .collect();

    let mut users: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    users.sort();
    assert_eq!(users, vec!["user0", "user1", "user2", "user3"]);
}

#[test]
fn test_event_json_shape() {
    let event = ticky_log::classify("ticky: ERROR Disk full (alice)").unwrap();
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "severity": "ERROR", "message": "Disk full", "user": "alice" })
    );

    let back: ticky_log::ir::Event = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
