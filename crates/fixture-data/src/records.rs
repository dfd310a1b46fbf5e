//! Record types serialized into the seed document.
//!
//! Field names and declaration order match the downstream database schema
//! column-for-column; the seeding process maps them directly onto tables, so
//! renaming any field here breaks compatibility. Identifiers are plain
//! sequential integers standing in for primary and foreign keys.

use serde::{Deserialize, Serialize};

/// A plantation company; tenant entity owning sites, keys, and users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Primary key.
    pub id: usize,
    /// Legal company name.
    pub nama_perusahaan: String,
    /// Contact person.
    pub pic_kontak: String,
    /// Contact email address.
    pub email_kontak: String,
    /// Contact phone number.
    pub telepon: String,
    /// Street address.
    pub alamat: String,
    /// Activity status flag.
    pub status: String,
    /// Record creation timestamp.
    pub created_at: String,
    /// Region-coded company identifier.
    pub kode_perusahaan: String,
    /// Line of business.
    pub jenis_perusahaan: String,
}

/// A physical monitoring site owned by one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Primary key.
    pub id: usize,
    /// Owning company id.
    pub id_perusahaan: usize,
    /// Site display name.
    pub nama_site: String,
    /// Province id placeholder; no administrative lookup is performed.
    pub id_provinsi: usize,
    /// Regency id placeholder.
    pub id_kabupaten: usize,
    /// District id placeholder.
    pub id_kecamatan: usize,
    /// Village id placeholder.
    pub id_kelurahan: usize,
    /// Site centroid latitude, in degrees.
    pub latitude: f64,
    /// Site centroid longitude, in degrees.
    pub longitude: f64,
    /// Human-readable site description.
    pub keterangan: String,
    /// Record creation timestamp.
    pub created_at: String,
}

/// A sensor unit installed at a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Primary key.
    pub id: usize,
    /// Unique device code referenced by realtime readings.
    pub device_id_unik: String,
    /// Owning company id, denormalized from the owning site.
    pub id_perusahaan: usize,
    /// Owning site id.
    pub id_site: usize,
    /// Hardware designation.
    pub tipe_alat: String,
    /// Street address; unset for generated devices.
    pub alamat: Option<String>,
    /// Province name.
    pub provinsi: String,
    /// Regency name.
    pub kabupaten: String,
    /// City name.
    pub kota: String,
    /// Device latitude: site centroid plus jitter.
    pub latitude: f64,
    /// Device longitude: site centroid plus jitter.
    pub longitude: f64,
    /// Activity status flag.
    pub status: String,
    /// Last heartbeat timestamp.
    pub last_online: String,
    /// Record creation timestamp.
    pub created_at: String,
    /// Measurement point code.
    pub kode_titik: String,
    /// Block label within the site (`A1`..`A8`).
    pub kode_blok: String,
}

/// A single timestamped sensor measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Primary key; globally sequential across all devices.
    pub id: usize,
    /// Code of the reporting device.
    pub device_id_unik: String,
    /// Measurement timestamp.
    pub timestamp_data: String,
    /// Water-table depth in metres relative to surface; negative is below.
    pub tmat_value: f64,
    /// Temperature in degrees Celsius.
    pub suhu_value: f64,
    /// Soil acidity.
    pub ph_value: f64,
    /// API key the reading arrived through; unset for generated data.
    pub api_key_used: Option<String>,
}

/// An API key issued to one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Primary key.
    pub id: usize,
    /// Owning company id.
    pub id_perusahaan: usize,
    /// Key material.
    pub key_value: String,
    /// Access level.
    pub level: u32,
    /// Whether rate limits are bypassed (0 or 1).
    pub ignore_limits: u32,
    /// Creation time as a unix epoch.
    pub date_created: i64,
    /// Activity status flag.
    pub status: String,
}

/// A login account tied to one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary key.
    pub id: usize,
    /// Address the account was created from.
    pub ip_address: String,
    /// Login name.
    pub username: String,
    /// Placeholder password hash; schema filler, not a credential.
    pub password: String,
    /// Account email address.
    pub email: String,
    /// Creation time as a unix epoch.
    pub created_on: i64,
    /// Last login timestamp; unset for generated accounts.
    pub last_login: Option<String>,
    /// Whether the account is active (0 or 1).
    pub active: u32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Owning company name, denormalized for display.
    pub company: String,
    /// Contact phone; unset for generated accounts.
    pub phone: Option<String>,
    /// Owning company id.
    pub id_perusahaan: usize,
}

/// Membership of one user in one access group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    /// Primary key; mirrors the owning user's id.
    pub id: usize,
    /// Member user id.
    pub user_id: usize,
    /// Group id.
    pub group_id: usize,
}
