//! Fixed generation constants and cross-constant validation.
//!
//! Every count, identifier offset, value range, and fixed string used by the
//! generators lives here as a named constant so the relationships between
//! them can be validated before any record is produced. The identifier
//! offsets mirror the downstream database, where earlier rows already occupy
//! the low id ranges.

use crate::error::ConfigError;
use crate::locations::LOCATIONS;

/// An Indonesian region hosting monitoring companies.
///
/// The `code` doubles as the area token in company and device identifiers;
/// the `phone_prefix` seeds the fabricated contact numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Region (province) name, e.g. `Jawa Timur`.
    pub name: &'static str,
    /// Two-letter region code used in generated identifiers.
    pub code: &'static str,
    /// Dialling prefix for fabricated contact numbers.
    pub phone_prefix: &'static str,
}

/// East Java.
pub static JAWA_TIMUR: Region = Region {
    name: "Jawa Timur",
    code: "JT",
    phone_prefix: "08123456",
};

/// Central Kalimantan.
pub static KALIMANTAN_TENGAH: Region = Region {
    name: "Kalimantan Tengah",
    code: "KT",
    phone_prefix: "08223456",
};

/// South Kalimantan.
pub static KALIMANTAN_SELATAN: Region = Region {
    name: "Kalimantan Selatan",
    code: "KS",
    phone_prefix: "08323456",
};

/// Riau.
pub static RIAU: Region = Region {
    name: "Riau",
    code: "RI",
    phone_prefix: "08423456",
};

/// Jambi.
pub static JAMBI: Region = Region {
    name: "Jambi",
    code: "JB",
    phone_prefix: "08523456",
};

/// All regions, in company-assignment order.
pub static REGIONS: [Region; 5] = [
    JAWA_TIMUR,
    KALIMANTAN_TENGAH,
    KALIMANTAN_SELATAN,
    RIAU,
    JAMBI,
];

/// Companies generated per region.
pub const COMPANIES_PER_REGION: usize = 5;

/// Total company count across all regions.
pub const COMPANY_COUNT: usize = 25;

/// Monitoring sites assigned to each company.
pub const SITES_PER_COMPANY: usize = 2;

/// Devices installed at each site.
pub const DEVICES_PER_SITE: usize = 8;

/// Total device count across all sites.
pub const DEVICE_COUNT: usize = 400;

/// Minimum realtime readings generated per device.
pub const MIN_READINGS_PER_DEVICE: usize = 2;

/// Maximum realtime readings generated per device.
pub const MAX_READINGS_PER_DEVICE: usize = 4;

/// First company id in the seed document.
pub const COMPANY_ID_BASE: usize = 19;

/// First site id in the seed document.
pub const SITE_ID_BASE: usize = 11;

/// First device id in the seed document.
pub const DEVICE_ID_BASE: usize = 15;

/// First realtime-reading id in the seed document.
pub const READING_ID_BASE: usize = 17;

/// First API-key id in the seed document.
pub const API_KEY_ID_BASE: usize = 7;

/// First user id in the seed document.
pub const USER_ID_BASE: usize = 15;

/// Group every generated user is enrolled in.
pub const USER_GROUP_ID: usize = 3;

/// Maximum age of a generated reading, in seconds (12 hours).
pub const MAX_READING_AGE_SECS: i64 = 12 * 60 * 60;

/// Uniform jitter applied to each device coordinate axis, in degrees.
pub const COORDINATE_JITTER_DEGREES: f64 = 0.005;

/// Lower bound for water-table depth readings, in metres relative to surface.
pub const TMAT_MIN: f64 = -0.5;

/// Upper bound for water-table depth readings, in metres relative to surface.
pub const TMAT_MAX: f64 = 0.8;

/// Lower bound for temperature readings, in degrees Celsius.
pub const SUHU_MIN: f64 = 24.0;

/// Upper bound for temperature readings, in degrees Celsius.
pub const SUHU_MAX: f64 = 32.0;

/// Lower bound for acidity readings (peat soil is acidic).
pub const PH_MIN: f64 = 3.5;

/// Upper bound for acidity readings.
pub const PH_MAX: f64 = 6.5;

/// Creation timestamp stamped on every master record.
pub const SEED_CREATED_AT: &str = "2025-11-25 00:00:00";

/// Last-online timestamp stamped on every device.
pub const SEED_LAST_ONLINE: &str = "2025-11-25 12:00:00";

/// Unix epoch stamped on API keys and user accounts.
pub const SEED_ACCOUNT_EPOCH: i64 = 1_764_038_400;

/// Placeholder bcrypt-shaped hash; schema filler, never a real credential.
pub const PLACEHOLDER_PASSWORD_HASH: &str = "$2y$10$hashedpassword";

/// Fixed prefix for generated API key values.
pub const API_KEY_PREFIX: &str = "KLHK-JT-";

/// Device hardware designation.
pub const DEVICE_TYPE: &str = "TMAT Logger V3";

/// Active-status marker used across the schema.
pub const STATUS_ACTIVE: &str = "aktif";

/// Company line of business.
pub const COMPANY_KIND: &str = "Perkebunan";

/// Source address recorded for generated users.
pub const USER_IP_ADDRESS: &str = "127.0.0.1";

/// Timestamp layout used for every date-time field in the document.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default destination for the serialized seed document.
pub const DEFAULT_OUTPUT_PATH: &str = "populate_db.json";

/// Validates that the fixed constants agree with each other.
///
/// Generation is refused outright when the relationships do not hold, so a
/// misconfigured build fails fast instead of emitting a document with broken
/// foreign-key arithmetic.
///
/// # Errors
///
/// Returns [`ConfigError`] if:
/// - The region table does not yield [`COMPANY_COUNT`] companies
/// - The location table does not hold [`SITES_PER_COMPANY`] entries per company
/// - [`DEVICE_COUNT`] does not equal sites x [`DEVICES_PER_SITE`] (which also
///   guarantees divisibility by the block size)
pub fn validate_counts() -> Result<(), ConfigError> {
    check_counts(COMPANY_COUNT, LOCATIONS.len(), DEVICE_COUNT)
}

/// Count validation against explicit values, separated for testability.
fn check_counts(
    company_count: usize,
    location_count: usize,
    device_count: usize,
) -> Result<(), ConfigError> {
    let companies_from_regions = REGIONS.len() * COMPANIES_PER_REGION;
    if companies_from_regions != company_count {
        return Err(ConfigError::CompanyCountMismatch {
            expected: companies_from_regions,
            actual: company_count,
        });
    }

    let required_locations = company_count * SITES_PER_COMPANY;
    if location_count != required_locations {
        return Err(ConfigError::LocationCountMismatch {
            expected: required_locations,
            actual: location_count,
        });
    }

    let required_devices = location_count * DEVICES_PER_SITE;
    if device_count != required_devices {
        return Err(ConfigError::DeviceCountMismatch {
            expected: required_devices,
            actual: device_count,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn configured_constants_are_consistent() {
        validate_counts().expect("fixed configuration should validate");
    }

    #[test]
    fn region_codes_are_unique() {
        let mut codes: Vec<&str> = REGIONS.iter().map(|region| region.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), REGIONS.len());
    }

    #[rstest]
    #[case::short_roster(
        24,
        50,
        400,
        ConfigError::CompanyCountMismatch { expected: 25, actual: 24 }
    )]
    #[case::missing_location(
        25,
        49,
        400,
        ConfigError::LocationCountMismatch { expected: 50, actual: 49 }
    )]
    #[case::surplus_location(
        25,
        52,
        400,
        ConfigError::LocationCountMismatch { expected: 50, actual: 52 }
    )]
    #[case::ragged_device_block(
        25,
        50,
        399,
        ConfigError::DeviceCountMismatch { expected: 400, actual: 399 }
    )]
    #[case::device_overflow(
        25,
        50,
        408,
        ConfigError::DeviceCountMismatch { expected: 400, actual: 408 }
    )]
    fn rejects_inconsistent_counts(
        #[case] company_count: usize,
        #[case] location_count: usize,
        #[case] device_count: usize,
        #[case] expected: ConfigError,
    ) {
        let result = check_counts(company_count, location_count, device_count);
        assert_eq!(result, Err(expected));
    }
}
