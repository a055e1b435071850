use personagen_core::{FieldSelection, ProfileBatch, ProfileRecord};

/// Narrow every record in a batch to the selected fields.
///
/// Pure per-record projection; the source batch is left unchanged.
pub fn project_batch(batch: &[ProfileRecord], selection: &FieldSelection) -> ProfileBatch {
    batch
        .iter()
        .map(|record| record.project(selection))
        .collect()
}
