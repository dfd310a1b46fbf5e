//! Generation stages for the seed document.
//!
//! The stages run in a fixed order, each consuming the previous stage's
//! output as an explicit read-only slice: companies, then sites, then
//! devices, then realtime readings, with API keys and user accounts derived
//! from the company roster. A single seeded RNG is threaded through the
//! stages, so the same seed and generation instant always reproduce the same
//! document.

use chrono::{NaiveDateTime, TimeDelta};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{
    API_KEY_ID_BASE, API_KEY_PREFIX, COMPANY_ID_BASE, COMPANY_KIND, COMPANY_COUNT,
    COMPANIES_PER_REGION, COORDINATE_JITTER_DEGREES, DEVICE_COUNT, DEVICE_ID_BASE, DEVICE_TYPE,
    DEVICES_PER_SITE, MAX_READING_AGE_SECS, MAX_READINGS_PER_DEVICE, MIN_READINGS_PER_DEVICE,
    PH_MAX, PH_MIN, PLACEHOLDER_PASSWORD_HASH, READING_ID_BASE, REGIONS, SEED_ACCOUNT_EPOCH,
    SEED_CREATED_AT, SEED_LAST_ONLINE, SITE_ID_BASE, SITES_PER_COMPANY, STATUS_ACTIVE, SUHU_MAX,
    SUHU_MIN, TIMESTAMP_FORMAT, TMAT_MAX, TMAT_MIN, USER_GROUP_ID, USER_ID_BASE, USER_IP_ADDRESS,
    validate_counts,
};
use crate::document::SeedDocument;
use crate::error::ConfigError;
use crate::locations::{LOCATIONS, Location};
use crate::records::{ApiKey, Company, Device, Reading, Site, User, UserGroup};

/// Generates the complete seed document.
///
/// Validates the fixed configuration, then runs the generation stages in
/// dependency order and assembles their output into one document. The `seed`
/// initialises a deterministic RNG and `now` anchors the realtime-reading
/// timestamps, so fixing both reproduces the document byte for byte.
///
/// # Errors
///
/// Returns [`ConfigError`] if the fixed generation constants disagree with
/// each other. No record is generated in that case.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use fixture_data::generate_seed_document;
///
/// let now = NaiveDateTime::parse_from_str("2025-11-25 12:00:00", "%Y-%m-%d %H:%M:%S")
///     .expect("valid timestamp");
/// let first = generate_seed_document(42, now).expect("generation succeeds");
/// let second = generate_seed_document(42, now).expect("generation succeeds");
///
/// assert_eq!(first.master_perusahaan.len(), 25);
/// assert_eq!(first, second);
/// ```
pub fn generate_seed_document(seed: u64, now: NaiveDateTime) -> Result<SeedDocument, ConfigError> {
    validate_counts()?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let companies = generate_companies();
    let sites = generate_sites(&companies, &LOCATIONS);
    let devices = generate_devices(&sites, &LOCATIONS, &mut rng);
    let readings = generate_readings(&devices, now, &mut rng);
    let api_keys = generate_api_keys(&companies);
    let (users, users_groups) = generate_users(&companies);

    Ok(SeedDocument {
        master_perusahaan: companies,
        master_site: sites,
        master_device: devices,
        data_realtime: readings,
        api_keys,
        users,
        users_groups,
    })
}

/// Builds the company roster: five companies per region, in region order.
///
/// `kode_perusahaan` numbering is global (JT001..JT005, KT006..KT010, ...),
/// not restarted per region; see DESIGN.md for the policy decision.
fn generate_companies() -> Vec<Company> {
    let mut companies = Vec::with_capacity(COMPANY_COUNT);
    for region in &REGIONS {
        for slot in 1..=COMPANIES_PER_REGION {
            let sequence = companies.len() + 1;
            let id = COMPANY_ID_BASE + companies.len();
            companies.push(Company {
                id,
                nama_perusahaan: format!("PT. Sawit {} {slot}", region.name),
                pic_kontak: format!("Contact {sequence}"),
                email_kontak: format!(
                    "contact{sequence}@sawit{}.com",
                    region.code.to_ascii_lowercase()
                ),
                telepon: format!("{}{id}", region.phone_prefix),
                alamat: format!("Jl. Sample No. {sequence}, City {sequence}"),
                status: STATUS_ACTIVE.to_owned(),
                created_at: SEED_CREATED_AT.to_owned(),
                kode_perusahaan: format!("{}{sequence:03}", region.code),
                jenis_perusahaan: COMPANY_KIND.to_owned(),
            });
        }
    }
    companies
}

/// Builds the site roster: one site per location, two consecutive locations
/// per company in company-creation order.
fn generate_sites(companies: &[Company], locations: &[Location]) -> Vec<Site> {
    let mut sites = Vec::with_capacity(locations.len());
    for (company, pair) in companies.iter().zip(locations.chunks(SITES_PER_COMPANY)) {
        for (offset, location) in pair.iter().enumerate() {
            let id = SITE_ID_BASE + sites.len();
            sites.push(Site {
                id,
                id_perusahaan: company.id,
                nama_site: format!("Site {} {}", location.name, offset + 1),
                id_provinsi: 0,
                id_kabupaten: 0,
                id_kecamatan: 0,
                id_kelurahan: 0,
                latitude: location.latitude,
                longitude: location.longitude,
                keterangan: format!(
                    "Lokasi pemantauan di {}, {}",
                    location.name, location.region.name
                ),
                created_at: SEED_CREATED_AT.to_owned(),
            });
        }
    }
    sites
}

/// Builds the device roster: a full block of devices per site, in site order.
///
/// `sites` and `locations` are index-aligned (one site per location, same
/// order); the owning company id is inherited from the site, never re-derived
/// from the company roster. Each device scatters around the site centroid by
/// an independent uniform jitter per axis.
fn generate_devices(
    sites: &[Site],
    locations: &[Location],
    rng: &mut ChaCha8Rng,
) -> Vec<Device> {
    let mut devices = Vec::with_capacity(DEVICE_COUNT);
    for (site, location) in sites.iter().zip(locations.iter()) {
        for block_position in 1..=DEVICES_PER_SITE {
            let sequence = devices.len() + 1;
            let id = DEVICE_ID_BASE + devices.len();
            let lat_offset =
                rng.random_range(-COORDINATE_JITTER_DEGREES..=COORDINATE_JITTER_DEGREES);
            let lon_offset =
                rng.random_range(-COORDINATE_JITTER_DEGREES..=COORDINATE_JITTER_DEGREES);
            devices.push(Device {
                id,
                device_id_unik: format!("DEV-{}-{sequence:03}", location.region.code),
                id_perusahaan: site.id_perusahaan,
                id_site: site.id,
                tipe_alat: DEVICE_TYPE.to_owned(),
                alamat: None,
                provinsi: location.region.name.to_owned(),
                kabupaten: location.regency.to_owned(),
                kota: location.regency.to_owned(),
                latitude: site.latitude + lat_offset,
                longitude: site.longitude + lon_offset,
                status: STATUS_ACTIVE.to_owned(),
                last_online: SEED_LAST_ONLINE.to_owned(),
                created_at: SEED_CREATED_AT.to_owned(),
                kode_titik: format!("{}{sequence:03}", location.region.code),
                kode_blok: format!("A{block_position}"),
            });
        }
    }
    devices
}

/// Builds the realtime readings: a random handful per device, ids assigned
/// from a single global counter so they stay strictly increasing across the
/// whole collection.
fn generate_readings(
    devices: &[Device],
    now: NaiveDateTime,
    rng: &mut ChaCha8Rng,
) -> Vec<Reading> {
    let mut readings = Vec::with_capacity(devices.len() * MAX_READINGS_PER_DEVICE);
    for device in devices {
        let count = rng.random_range(MIN_READINGS_PER_DEVICE..=MAX_READINGS_PER_DEVICE);
        for _ in 0..count {
            let id = READING_ID_BASE + readings.len();
            let age_secs = rng.random_range(0..=MAX_READING_AGE_SECS);
            let timestamp = now - TimeDelta::seconds(age_secs);
            readings.push(Reading {
                id,
                device_id_unik: device.device_id_unik.clone(),
                timestamp_data: format_timestamp(timestamp),
                tmat_value: round_to(rng.random_range(TMAT_MIN..=TMAT_MAX), 1000.0),
                suhu_value: round_to(rng.random_range(SUHU_MIN..=SUHU_MAX), 100.0),
                ph_value: round_to(rng.random_range(PH_MIN..=PH_MAX), 100.0),
                api_key_used: None,
            });
        }
    }
    readings
}

/// Builds one API key per company, in company order.
fn generate_api_keys(companies: &[Company]) -> Vec<ApiKey> {
    let mut api_keys = Vec::with_capacity(companies.len());
    for company in companies {
        let sequence = api_keys.len() + 1;
        api_keys.push(ApiKey {
            id: API_KEY_ID_BASE + api_keys.len(),
            id_perusahaan: company.id,
            key_value: format!("{API_KEY_PREFIX}{sequence:03}"),
            level: 1,
            ignore_limits: 0,
            date_created: SEED_ACCOUNT_EPOCH,
            status: STATUS_ACTIVE.to_owned(),
        });
    }
    api_keys
}

/// Builds one user account and one group membership per company, in company
/// order. Group rows mirror their user's id.
fn generate_users(companies: &[Company]) -> (Vec<User>, Vec<UserGroup>) {
    let mut users = Vec::with_capacity(companies.len());
    let mut users_groups = Vec::with_capacity(companies.len());
    for company in companies {
        let sequence = users.len() + 1;
        let id = USER_ID_BASE + users.len();
        users.push(User {
            id,
            ip_address: USER_IP_ADDRESS.to_owned(),
            username: format!("user.jt{sequence}"),
            password: PLACEHOLDER_PASSWORD_HASH.to_owned(),
            email: format!("user@sawitjt{sequence}.com"),
            created_on: SEED_ACCOUNT_EPOCH,
            last_login: None,
            active: 1,
            first_name: "User".to_owned(),
            last_name: format!("JT{sequence}"),
            company: company.nama_perusahaan.clone(),
            phone: None,
            id_perusahaan: company.id,
        });
        users_groups.push(UserGroup {
            id,
            user_id: id,
            group_id: USER_GROUP_ID,
        });
    }
    (users, users_groups)
}

/// Rounds a value to the precision implied by `scale` (1000.0 keeps three
/// decimal places, 100.0 keeps two).
fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

/// Formats a timestamp in the document's fixed date-time layout.
fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}
