//! Behavioural tests for the fixture-data crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering deterministic generation, referential consistency, and the
//! bounded value ranges of the realtime readings.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashMap;

use chrono::NaiveDateTime;
use fixture_data::{SeedDocument, generate_seed_document};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

/// Generation instant pinned for every scenario.
const FIXED_NOW: &str = "2025-11-25 12:00:00";

/// Generates a document with the scenario's fixed seed and instant.
fn generate_fixed(seed: u64) -> SeedDocument {
    let now = NaiveDateTime::parse_from_str(FIXED_NOW, "%Y-%m-%d %H:%M:%S")
        .expect("valid fixture timestamp");
    generate_seed_document(seed, now).expect("generation should succeed")
}

/// Test world holding the generated documents.
#[derive(Default, ScenarioState)]
struct World {
    document: Slot<SeedDocument>,
    second_document: Slot<SeedDocument>,
}

impl World {
    /// Extracts the primary document from the world state.
    fn document(&self) -> SeedDocument {
        self.document.get().expect("document should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a seed document generated with seed 42")]
fn a_seed_document_generated_with_seed_42(world: &World) {
    world.document.set(generate_fixed(42));
}

// ============================================================================
// When steps
// ============================================================================

#[when("a second document is generated with seed 42")]
fn a_second_document_is_generated_with_seed_42(world: &World) {
    world.second_document.set(generate_fixed(42));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both documents are identical")]
fn both_documents_are_identical(world: &World) {
    let first = world.document();
    let second = world
        .second_document
        .get()
        .expect("second document should be generated");
    assert_eq!(first, second);
}

#[then("every company owns exactly two sites")]
fn every_company_owns_exactly_two_sites(world: &World) {
    let document = world.document();

    let mut per_company: HashMap<usize, usize> = HashMap::new();
    for site in &document.master_site {
        *per_company.entry(site.id_perusahaan).or_insert(0) += 1;
    }

    assert_eq!(
        document.master_site.len(),
        2 * document.master_perusahaan.len()
    );
    for company in &document.master_perusahaan {
        assert_eq!(
            per_company.get(&company.id),
            Some(&2),
            "company {} does not own two sites",
            company.id
        );
    }
}

#[then("every device reports the company of its owning site")]
fn every_device_reports_the_company_of_its_owning_site(world: &World) {
    let document = world.document();

    let owners: HashMap<usize, usize> = document
        .master_site
        .iter()
        .map(|site| (site.id, site.id_perusahaan))
        .collect();
    for device in &document.master_device {
        assert_eq!(
            owners.get(&device.id_site),
            Some(&device.id_perusahaan),
            "device {} disagrees with its site",
            device.device_id_unik
        );
    }
}

#[then("every reading stays within the calibrated ranges")]
fn every_reading_stays_within_the_calibrated_ranges(world: &World) {
    let document = world.document();

    for reading in &document.data_realtime {
        assert!(
            (-0.5..=0.8).contains(&reading.tmat_value),
            "tmat out of range: {}",
            reading.tmat_value
        );
        assert!(
            (24.0..=32.0).contains(&reading.suhu_value),
            "suhu out of range: {}",
            reading.suhu_value
        );
        assert!(
            (3.5..=6.5).contains(&reading.ph_value),
            "ph out of range: {}",
            reading.ph_value
        );
    }
}

#[then("reading identifiers increase strictly in generation order")]
fn reading_identifiers_increase_strictly_in_generation_order(world: &World) {
    let document = world.document();

    let ids: Vec<usize> = document.data_realtime.iter().map(|r| r.id).collect();
    assert!(
        ids.iter().zip(ids.iter().skip(1)).all(|(a, b)| a < b),
        "reading ids are not strictly increasing"
    );
}

#[then("every company has one api key, one user, and one group membership")]
fn every_company_has_credentials_and_an_account(world: &World) {
    let document = world.document();

    assert_eq!(document.api_keys.len(), document.master_perusahaan.len());
    assert_eq!(document.users.len(), document.master_perusahaan.len());
    assert_eq!(document.users_groups.len(), document.users.len());

    for company in &document.master_perusahaan {
        assert_eq!(
            document
                .api_keys
                .iter()
                .filter(|key| key.id_perusahaan == company.id)
                .count(),
            1
        );
        assert_eq!(
            document
                .users
                .iter()
                .filter(|user| user.id_perusahaan == company.id)
                .count(),
            1
        );
    }
    for group in &document.users_groups {
        assert!(
            document.users.iter().any(|user| user.id == group.user_id),
            "group {} references a missing user",
            group.id
        );
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/fixture_data.feature",
    name = "Fixed seed produces identical documents"
)]
fn fixed_seed_produces_identical_documents(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/fixture_data.feature",
    name = "Each company owns exactly two sites"
)]
fn each_company_owns_exactly_two_sites(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/fixture_data.feature",
    name = "Devices inherit their company through the owning site"
)]
fn devices_inherit_their_company_through_the_owning_site(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/fixture_data.feature",
    name = "Sensor readings stay within calibrated ranges"
)]
fn sensor_readings_stay_within_calibrated_ranges(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/fixture_data.feature",
    name = "Reading identifiers increase monotonically"
)]
fn reading_identifiers_increase_monotonically(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/fixture_data.feature",
    name = "Every company receives credentials and an account"
)]
fn every_company_receives_credentials_and_an_account(world: World) {
    let _ = world;
}
