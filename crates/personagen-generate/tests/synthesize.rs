use personagen_core::{Error, FieldName, FieldSelection};
use personagen_generate::{DEFAULT_SEED, project_batch, render_preview, synthesize};

#[test]
fn synthesis_is_deterministic() {
    let batch_a = synthesize(5, DEFAULT_SEED).expect("run A");
    let batch_b = synthesize(5, DEFAULT_SEED).expect("run B");

    assert_eq!(batch_a, batch_b);
    assert_eq!(render_preview(&batch_a), render_preview(&batch_b));
}

#[test]
fn different_seeds_differ() {
    let batch_a = synthesize(5, 0).expect("seed 0");
    let batch_b = synthesize(5, 1).expect("seed 1");
    assert_ne!(batch_a, batch_b);
}

#[test]
fn batch_length_matches_requested_count() {
    let batch = synthesize(12, DEFAULT_SEED).expect("synthesize");
    assert_eq!(batch.len(), 12);
}

#[test]
fn records_carry_the_full_field_set_in_canonical_order() {
    let batch = synthesize(3, DEFAULT_SEED).expect("synthesize");
    for record in &batch {
        assert_eq!(record.fields().collect::<Vec<_>>(), FieldName::ALL.to_vec());
    }
}

#[test]
fn zero_and_negative_counts_are_rejected() {
    assert!(matches!(synthesize(0, DEFAULT_SEED), Err(Error::InvalidCount(0))));
    assert!(matches!(synthesize(-4, DEFAULT_SEED), Err(Error::InvalidCount(-4))));
}

#[test]
fn projected_batch_keeps_only_selected_fields() {
    let batch = synthesize(4, DEFAULT_SEED).expect("synthesize");
    let selection = FieldSelection::new([FieldName::Name, FieldName::Sex]).expect("selection");
    let projected = project_batch(&batch, &selection);

    assert_eq!(projected.len(), 4);
    for (original, narrowed) in batch.iter().zip(&projected) {
        assert_eq!(
            narrowed.fields().collect::<Vec<_>>(),
            vec![FieldName::Name, FieldName::Sex]
        );
        // Values survive projection unchanged.
        assert_eq!(narrowed.get(FieldName::Name), original.get(FieldName::Name));
        assert_eq!(narrowed.get(FieldName::Sex), original.get(FieldName::Sex));
    }
}

#[test]
fn sex_values_are_single_letters() {
    let batch = synthesize(20, DEFAULT_SEED).expect("synthesize");
    for record in &batch {
        let sex = record
            .get(FieldName::Sex)
            .and_then(|value| value.as_str())
            .expect("sex value");
        assert!(sex == "M" || sex == "F", "unexpected sex value {sex:?}");
    }
}
