#![no_main]

use forensix::infrastructure::FixedClock;
use forensix::{AnalysisResult, FileDescriptor, RunAnalysisUseCase};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, u64, String)| {
    let (name, size, mime) = input;
    let file = FileDescriptor::new(name, size, mime);
    let result = RunAnalysisUseCase::new(FixedClock::epoch()).execute(&file);

    assert_eq!(result.case_id().len(), 11);
    assert!(result.handwriting().anomaly_map().len() <= 6);
    assert!(!result.metadata().evidence().is_empty());

    let json = serde_json::to_string(&result).unwrap();
    let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
});
