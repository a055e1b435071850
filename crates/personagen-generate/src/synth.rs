//! Deterministic record synthesis backed by the `fake` crate.

use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{FreeEmail, Username};
use fake::faker::job::en::Title;
use fake::faker::name::en::Name;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use personagen_core::{Error, FieldName, ProfileBatch, ProfileRecord, Result, ScalarValue};

/// Seed the interactive shell applies on every generate action, so repeated
/// runs reproduce the same batch.
pub const DEFAULT_SEED: u64 = 0;

/// Synthesize `count` full-field records from a seeded random source.
///
/// Two calls with the same `count` and `seed` yield byte-identical batches.
/// Fails with `InvalidCount` before any generation work when `count <= 0`.
pub fn synthesize(count: i64, seed: u64) -> Result<ProfileBatch> {
    if count <= 0 {
        return Err(Error::InvalidCount(count));
    }
    info!(count, seed, "synthesizing profiles");

    let batch = (0..count as u64)
        .map(|index| {
            let mut rng = ChaCha8Rng::seed_from_u64(record_seed(seed, index));
            synthesize_record(&mut rng)
        })
        .collect();
    Ok(batch)
}

fn synthesize_record(rng: &mut ChaCha8Rng) -> ProfileRecord {
    let mut record = ProfileRecord::new();
    for field in FieldName::ALL {
        record.insert(field, field_value(field, rng));
    }
    record
}

fn field_value(field: FieldName, rng: &mut ChaCha8Rng) -> ScalarValue {
    match field {
        FieldName::Name => ScalarValue::Text(Name().fake_with_rng::<String, _>(rng)),
        FieldName::Username => ScalarValue::Text(Username().fake_with_rng::<String, _>(rng)),
        FieldName::Sex => {
            let sex = if rng.random_bool(0.5) { "M" } else { "F" };
            ScalarValue::Text(sex.to_string())
        }
        FieldName::Address => ScalarValue::Text(street_address(rng)),
        FieldName::Mail => ScalarValue::Text(FreeEmail().fake_with_rng::<String, _>(rng)),
        FieldName::Birthdate => ScalarValue::Date(birthdate(rng)),
        FieldName::Job => ScalarValue::Text(Title().fake_with_rng::<String, _>(rng)),
        FieldName::Company => ScalarValue::Text(CompanyName().fake_with_rng::<String, _>(rng)),
    }
}

/// Postal-style address with an embedded newline, so encoders must quote it.
fn street_address(rng: &mut ChaCha8Rng) -> String {
    let building = BuildingNumber().fake_with_rng::<String, _>(rng);
    let street = StreetName().fake_with_rng::<String, _>(rng);
    let city = CityName().fake_with_rng::<String, _>(rng);
    let state = StateAbbr().fake_with_rng::<String, _>(rng);
    let zip = ZipCode().fake_with_rng::<String, _>(rng);
    format!("{building} {street}\n{city}, {state} {zip}")
}

fn birthdate(rng: &mut ChaCha8Rng) -> NaiveDate {
    let min = NaiveDate::from_ymd_opt(1940, 1, 1).unwrap_or_default();
    let max = NaiveDate::from_ymd_opt(2006, 12, 31).unwrap_or_default();
    let span = (max - min).num_days().max(1);
    min + Duration::days(rng.random_range(0..=span))
}

/// Derive a per-record stream seed so each record is stable at its index.
fn record_seed(seed: u64, index: u64) -> u64 {
    let mut hash = seed ^ index.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= 0xcbf29ce484222325;
    hash.wrapping_mul(0x100000001b3)
}
