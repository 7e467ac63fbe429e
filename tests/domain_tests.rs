//! Domain layer unit tests
//!
//! Tests for entities, scoring modules and the aggregator.

use forensix::domain::entities::{
    BoundingBox, FileDescriptor, ForensicModule, HandwritingResult, LinguisticResult,
    MetadataResult, ModuleResults, RiskLevel, Seed, SignatureResult, Verdict,
};
use forensix::domain::services::{
    AUTHOR_FIELD_FINDING, Aggregator, CONSISTENT_EXPLANATION, CONSISTENT_TIMESTAMPS_FINDING,
    DeterministicSampler, EDITING_SOFTWARE_FINDING, ForensicAnalyzer, HandwritingAnalyzer,
    LinguisticAnalyzer, MULTIPLE_SESSIONS_FINDING, MetadataAnalyzer, NO_ANOMALIES_FINDING,
    SignatureAnalyzer, TIMESTAMP_GAP_FINDING,
};
use rstest::*;

/// Module results carrying only scores
fn modules_with_scores(
    metadata: f64,
    linguistic: f64,
    signature: f64,
    handwriting: f64,
) -> ModuleResults {
    ModuleResults {
        metadata: MetadataResult::new(metadata, RiskLevel::from_score(metadata), Vec::new()),
        linguistic: LinguisticResult::new(linguistic, Vec::new(), String::new()),
        signature: SignatureResult::new(
            signature,
            BoundingBox {
                x: 0,
                y: 0,
                width: 0,
                height: 0,
            },
            0.0,
        ),
        handwriting: HandwritingResult::new(handwriting, Vec::new()),
    }
}

// ============================================================================
// FileDescriptor Tests
// ============================================================================

#[rstest]
fn test_file_descriptor_accessors() {
    let file = FileDescriptor::new("report.pdf", 102400, "application/pdf");
    assert_eq!(file.name(), "report.pdf");
    assert_eq!(file.size_bytes(), 102400);
    assert_eq!(file.mime_type(), "application/pdf");
}

#[rstest]
fn test_file_descriptor_size_human_is_not_empty() {
    let file = FileDescriptor::new("scan.png", 5242880, "image/png");
    assert!(!file.size_human().is_empty());
}

// ============================================================================
// Seed Tests
// ============================================================================

#[rstest]
#[case(0xAB, "FX-000000AB")]
#[case(44_778, "FX-0000AEEA")]
#[case(1_783_643_367, "FX-6A503CE7")]
#[case(u32::MAX, "FX-FFFFFFFF")]
fn test_case_id_format(#[case] raw: u32, #[case] expected: &str) {
    assert_eq!(Seed::from_raw(raw).case_id(), expected);
}

#[rstest]
fn test_seed_depends_on_every_field() {
    let base = Seed::derive("report.pdf", 102400, "application/pdf");
    assert_ne!(base, Seed::derive("report.PDF", 102400, "application/pdf"));
    assert_ne!(base, Seed::derive("report.pdf", 102401, "application/pdf"));
    assert_ne!(base, Seed::derive("report.pdf", 102400, "image/png"));
}

#[rstest]
fn test_seed_from_descriptor_matches_derive() {
    let file = FileDescriptor::new("contract.docx", 204800, "application/msword");
    assert_eq!(
        Seed::from_descriptor(&file),
        Seed::derive("contract.docx", 204800, "application/msword")
    );
}

// ============================================================================
// RiskLevel Tests
// ============================================================================

#[rstest]
#[case(0.9, RiskLevel::High)]
#[case(0.601, RiskLevel::High)]
#[case(0.6, RiskLevel::Medium)]
#[case(0.36, RiskLevel::Medium)]
#[case(0.35, RiskLevel::Low)]
#[case(0.1, RiskLevel::Low)]
fn test_risk_level_bands(#[case] score: f64, #[case] expected: RiskLevel) {
    assert_eq!(RiskLevel::from_score(score), expected);
}

#[rstest]
fn test_risk_level_display() {
    assert_eq!(RiskLevel::High.to_string(), "high");
    assert_eq!(RiskLevel::Medium.to_string(), "medium");
    assert_eq!(RiskLevel::Low.to_string(), "low");
}

// ============================================================================
// ForensicModule / Verdict Tests
// ============================================================================

#[rstest]
#[case(ForensicModule::Metadata, "Metadata Forensics", 0.25)]
#[case(ForensicModule::Linguistic, "Linguistic Analysis", 0.30)]
#[case(ForensicModule::Signature, "Signature Authenticity", 0.25)]
#[case(ForensicModule::Handwriting, "Handwriting Consistency", 0.20)]
fn test_module_names_and_weights(
    #[case] module: ForensicModule,
    #[case] name: &str,
    #[case] weight: f64,
) {
    assert_eq!(module.name(), name);
    assert_eq!(module.weight(), weight);
}

#[rstest]
fn test_weights_sum_to_one() {
    assert_eq!(Aggregator::total_weight(), 1.0);
}

#[rstest]
#[case(0.6, Verdict::Genuine)]
#[case(0.6001, Verdict::Forged)]
#[case(0.6000001, Verdict::Forged)]
#[case(0.0, Verdict::Genuine)]
#[case(1.0, Verdict::Forged)]
fn test_verdict_threshold_is_strict(#[case] final_score: f64, #[case] expected: Verdict) {
    assert_eq!(Verdict::from_final_score(final_score), expected);
}

// ============================================================================
// Metadata Module Tests
// ============================================================================

#[rstest]
fn test_metadata_findings_low_score() {
    assert_eq!(
        MetadataAnalyzer::findings(0.2),
        vec![CONSISTENT_TIMESTAMPS_FINDING.to_string()]
    );
}

#[rstest]
fn test_metadata_findings_overlap_band() {
    // 0.35 is both above 0.3 and below 0.4
    assert_eq!(
        MetadataAnalyzer::findings(0.35),
        vec![
            AUTHOR_FIELD_FINDING.to_string(),
            CONSISTENT_TIMESTAMPS_FINDING.to_string()
        ]
    );
}

#[rstest]
fn test_metadata_findings_middle_band() {
    assert_eq!(
        MetadataAnalyzer::findings(0.45),
        vec![AUTHOR_FIELD_FINDING.to_string()]
    );
}

#[rstest]
fn test_metadata_findings_fallback_when_no_rule_fires() {
    assert_eq!(
        MetadataAnalyzer::findings(f64::NAN),
        vec![NO_ANOMALIES_FINDING.to_string()]
    );
}

#[rstest]
fn test_metadata_findings_ordering() {
    assert_eq!(
        MetadataAnalyzer::findings(0.55),
        vec![
            TIMESTAMP_GAP_FINDING.to_string(),
            AUTHOR_FIELD_FINDING.to_string()
        ]
    );
    assert_eq!(
        MetadataAnalyzer::findings(0.8),
        vec![
            TIMESTAMP_GAP_FINDING.to_string(),
            AUTHOR_FIELD_FINDING.to_string(),
            EDITING_SOFTWARE_FINDING.to_string(),
            MULTIPLE_SESSIONS_FINDING.to_string()
        ]
    );
}

#[rstest]
fn test_metadata_analyzer_golden() {
    let result = MetadataAnalyzer::new().analyze(Seed::from_raw(1_675_937_916));
    assert_eq!(result.score(), 0.856);
    assert_eq!(result.risk_level(), RiskLevel::High);
    assert_eq!(result.evidence().len(), 4);
    assert_eq!(MetadataAnalyzer::new().module(), ForensicModule::Metadata);
}

// ============================================================================
// Linguistic Module Tests
// ============================================================================

#[rstest]
fn test_linguistic_explanation_bands() {
    assert_eq!(LinguisticAnalyzer::explain(0.2, 0), CONSISTENT_EXPLANATION);
    assert!(LinguisticAnalyzer::explain(0.5, 2).contains("across 2 paragraph(s)"));
    assert!(LinguisticAnalyzer::explain(0.896, 2).contains("variance of 90%"));
}

#[rstest]
fn test_linguistic_analyzer_golden() {
    let result = LinguisticAnalyzer::new().analyze(Seed::from_raw(1_675_937_916));
    assert_eq!(result.score(), 0.22);
    assert_eq!(result.suspicious_paragraph_indexes(), &[5, 6]);
    assert_eq!(result.explanation(), CONSISTENT_EXPLANATION);
}

#[rstest]
fn test_linguistic_paragraphs_within_count() {
    for raw in [0u32, 7, 44_778, 1_412_287_271, 2_002_194_888] {
        let seed = Seed::from_raw(raw);
        let count = DeterministicSampler::new(seed).draw_below(3, 5) + 3;
        let result = LinguisticAnalyzer::new().analyze(seed);
        let indexes = result.suspicious_paragraph_indexes();
        assert!(indexes.iter().all(|&i| i < count));
        assert!(indexes.windows(2).all(|w| w[0] < w[1]));
    }
}

// ============================================================================
// Signature Module Tests
// ============================================================================

#[rstest]
fn test_signature_analyzer_golden() {
    let result = SignatureAnalyzer::new().analyze(Seed::from_raw(1_675_937_916));
    assert_eq!(result.score(), 0.813);
    assert_eq!(result.similarity_index(), 0.431);
    assert_eq!(
        result.bounding_box(),
        BoundingBox {
            x: 292,
            y: 643,
            width: 153,
            height: 53
        }
    );
}

#[rstest]
fn test_signature_box_ranges() {
    for raw in [1u32, 99, 44_778, 1_783_643_367, u32::MAX] {
        let region = SignatureAnalyzer::new().analyze(Seed::from_raw(raw)).bounding_box();
        assert!((100..300).contains(&region.x));
        assert!((400..700).contains(&region.y));
        assert!((150..250).contains(&region.width));
        assert!((40..70).contains(&region.height));
    }
}

// ============================================================================
// Handwriting Module Tests
// ============================================================================

#[rstest]
fn test_handwriting_analyzer_golden() {
    let result = HandwritingAnalyzer::new().analyze(Seed::from_raw(44_778));
    assert_eq!(result.score(), 0.306);
    assert_eq!(result.anomaly_map().len(), 2);
    assert_eq!((result.anomaly_map()[0].x, result.anomaly_map()[0].y), (86, 735));
    assert_eq!((result.anomaly_map()[1].x, result.anomaly_map()[1].y), (361, 249));
}

// ============================================================================
// Aggregator Tests
// ============================================================================

#[fixture]
fn aggregator() -> Aggregator {
    Aggregator::new()
}

#[rstest]
fn test_aggregate_exactly_at_threshold_is_genuine(aggregator: Aggregator) {
    let assessment = aggregator.assess(&modules_with_scores(0.6, 0.6, 0.6, 0.6));
    assert_eq!(assessment.final_score, 0.6);
    assert_eq!(assessment.verdict, Verdict::Genuine);
}

#[rstest]
fn test_aggregate_just_above_threshold_is_forged(aggregator: Aggregator) {
    let assessment = aggregator.assess(&modules_with_scores(0.601, 0.601, 0.601, 0.601));
    assert_eq!(assessment.final_score, 0.601);
    assert_eq!(assessment.verdict, Verdict::Forged);
}

#[rstest]
fn test_aggregate_forged_explanation(aggregator: Aggregator) {
    let assessment = aggregator.assess(&modules_with_scores(0.7, 0.7, 0.7, 0.7));
    assert_eq!(assessment.final_score, 0.7);
    assert_eq!(assessment.confidence, 70.0);
    assert_eq!(assessment.highest_contributor, ForensicModule::Linguistic);
    assert_eq!(
        assessment.explanation,
        "High linguistic analysis risk (70%) combined with 4 modules exceeding baseline thresholds significantly increased overall fraud probability to 70%."
    );
}

#[rstest]
fn test_aggregate_tie_keeps_first_module(aggregator: Aggregator) {
    let assessment = aggregator.assess(&modules_with_scores(0.4, 0.2, 0.4, 0.5));
    assert_eq!(assessment.highest_contributor, ForensicModule::Metadata);
    assert_eq!(assessment.final_score, 0.36);
    assert_eq!(assessment.verdict, Verdict::Genuine);
    assert_eq!(
        assessment.explanation,
        "All forensic modules returned scores within acceptable thresholds. Metadata Forensics showed the highest activity at 40%, but remained below critical levels."
    );
}

#[rstest]
fn test_aggregate_breakdown_order_and_weights(aggregator: Aggregator) {
    let assessment = aggregator.assess(&modules_with_scores(0.892, 0.22, 0.597, 0.502));
    let modules: Vec<ForensicModule> = assessment.score_breakdown.iter().map(|e| e.module).collect();
    assert_eq!(modules, ForensicModule::ALL.to_vec());

    let weighted: Vec<f64> = assessment.score_breakdown.iter().map(|e| e.weighted).collect();
    assert_eq!(weighted, vec![0.223, 0.066, 0.1492, 0.1004]);
    assert_eq!(assessment.final_score, 0.5387);
    assert_eq!(assessment.confidence, 53.9);
}
