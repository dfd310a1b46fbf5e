//! The fixed monitoring-location table.
//!
//! Fifty named locations across the five monitored regions, ten per region,
//! in region order. Sites are created one per location, so the table length
//! must stay at [`crate::config::SITES_PER_COMPANY`] entries per company.
//!
//! Each entry is a structured record: the administrative fields that devices
//! report (province, regency) are stored explicitly instead of being parsed
//! back out of the human-readable site description.

use crate::config::{
    JAMBI, JAWA_TIMUR, KALIMANTAN_SELATAN, KALIMANTAN_TENGAH, RIAU, Region,
};

/// A physical monitoring location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Location name as it appears in site names and descriptions.
    pub name: &'static str,
    /// Latitude of the site centroid, in degrees.
    pub latitude: f64,
    /// Longitude of the site centroid, in degrees.
    pub longitude: f64,
    /// Regency (kabupaten) the location belongs to.
    pub regency: &'static str,
    /// Region hosting the location.
    pub region: &'static Region,
}

/// All monitoring locations, in site-creation order.
pub static LOCATIONS: [Location; 50] = [
    // Jawa Timur
    Location {
        name: "Surabaya Utara",
        latitude: -7.2575,
        longitude: 112.7521,
        regency: "Surabaya",
        region: &JAWA_TIMUR,
    },
    Location {
        name: "Malang Selatan",
        latitude: -7.9666,
        longitude: 112.6326,
        regency: "Malang",
        region: &JAWA_TIMUR,
    },
    Location {
        name: "Jember Timur",
        latitude: -8.1845,
        longitude: 113.6681,
        regency: "Jember",
        region: &JAWA_TIMUR,
    },
    Location {
        name: "Kediri Barat",
        latitude: -7.848,
        longitude: 112.0178,
        regency: "Kediri",
        region: &JAWA_TIMUR,
    },
    Location {
        name: "Madiun Utara",
        latitude: -7.6298,
        longitude: 111.5239,
        regency: "Madiun",
        region: &JAWA_TIMUR,
    },
    Location {
        name: "Blitar Selatan",
        latitude: -8.0956,
        longitude: 112.1609,
        regency: "Blitar",
        region: &JAWA_TIMUR,
    },
    Location {
        name: "Probolinggo Timur",
        latitude: -7.7543,
        longitude: 113.2159,
        regency: "Probolinggo",
        region: &JAWA_TIMUR,
    },
    Location {
        name: "Pasuruan Barat",
        latitude: -7.6469,
        longitude: 112.9072,
        regency: "Pasuruan",
        region: &JAWA_TIMUR,
    },
    Location {
        name: "Mojokerto Utara",
        latitude: -7.4722,
        longitude: 112.4338,
        regency: "Mojokerto",
        region: &JAWA_TIMUR,
    },
    Location {
        name: "Batu Selatan",
        latitude: -7.8748,
        longitude: 112.5265,
        regency: "Batu",
        region: &JAWA_TIMUR,
    },
    // Kalimantan Tengah
    Location {
        name: "Palangka Raya",
        latitude: -2.2088,
        longitude: 113.9213,
        regency: "Palangka Raya",
        region: &KALIMANTAN_TENGAH,
    },
    Location {
        name: "Sampit Utara",
        latitude: -2.5312,
        longitude: 112.9497,
        regency: "Kotawaringin Timur",
        region: &KALIMANTAN_TENGAH,
    },
    Location {
        name: "Kuala Kapuas",
        latitude: -3.009,
        longitude: 114.3909,
        regency: "Kapuas",
        region: &KALIMANTAN_TENGAH,
    },
    Location {
        name: "Pangkalan Bun",
        latitude: -2.6769,
        longitude: 111.6294,
        regency: "Kotawaringin Barat",
        region: &KALIMANTAN_TENGAH,
    },
    Location {
        name: "Muara Teweh",
        latitude: -0.9738,
        longitude: 114.8934,
        regency: "Barito Utara",
        region: &KALIMANTAN_TENGAH,
    },
    Location {
        name: "Kapuas Barat",
        latitude: -3.0139,
        longitude: 114.3776,
        regency: "Kapuas",
        region: &KALIMANTAN_TENGAH,
    },
    Location {
        name: "Barito Timur",
        latitude: -2.1386,
        longitude: 114.8451,
        regency: "Barito Timur",
        region: &KALIMANTAN_TENGAH,
    },
    Location {
        name: "Sukamara",
        latitude: -2.6683,
        longitude: 111.2434,
        regency: "Sukamara",
        region: &KALIMANTAN_TENGAH,
    },
    Location {
        name: "Kotawaringin Barat",
        latitude: -2.6174,
        longitude: 111.7418,
        regency: "Kotawaringin Barat",
        region: &KALIMANTAN_TENGAH,
    },
    Location {
        name: "Pulang Pisau",
        latitude: -2.7041,
        longitude: 113.9542,
        regency: "Pulang Pisau",
        region: &KALIMANTAN_TENGAH,
    },
    // Kalimantan Selatan
    Location {
        name: "Banjarmasin Timur",
        latitude: -3.3194,
        longitude: 114.5906,
        regency: "Banjarmasin",
        region: &KALIMANTAN_SELATAN,
    },
    Location {
        name: "Barito Kuala",
        latitude: -3.2697,
        longitude: 114.6405,
        regency: "Barito Kuala",
        region: &KALIMANTAN_SELATAN,
    },
    Location {
        name: "Tapin Selatan",
        latitude: -2.8707,
        longitude: 115.1581,
        regency: "Tapin",
        region: &KALIMANTAN_SELATAN,
    },
    Location {
        name: "Hulu Sungai Tengah",
        latitude: -2.6103,
        longitude: 115.5027,
        regency: "Hulu Sungai Tengah",
        region: &KALIMANTAN_SELATAN,
    },
    Location {
        name: "Kotabaru Utara",
        latitude: -3.2891,
        longitude: 116.1674,
        regency: "Kotabaru",
        region: &KALIMANTAN_SELATAN,
    },
    Location {
        name: "Tanah Bumbu",
        latitude: -3.4464,
        longitude: 115.6356,
        regency: "Tanah Bumbu",
        region: &KALIMANTAN_SELATAN,
    },
    Location {
        name: "Balangan",
        latitude: -2.3167,
        longitude: 115.6167,
        regency: "Balangan",
        region: &KALIMANTAN_SELATAN,
    },
    Location {
        name: "Tabalong",
        latitude: -2.1833,
        longitude: 115.5,
        regency: "Tabalong",
        region: &KALIMANTAN_SELATAN,
    },
    Location {
        name: "Hulu Sungai Selatan",
        latitude: -2.8333,
        longitude: 115.2833,
        regency: "Hulu Sungai Selatan",
        region: &KALIMANTAN_SELATAN,
    },
    Location {
        name: "Hulu Sungai Utara",
        latitude: -2.5,
        longitude: 115.1667,
        regency: "Hulu Sungai Utara",
        region: &KALIMANTAN_SELATAN,
    },
    // Riau
    Location {
        name: "Pekanbaru Selatan",
        latitude: 0.5071,
        longitude: 101.4478,
        regency: "Pekanbaru",
        region: &RIAU,
    },
    Location {
        name: "Dumai Timur",
        latitude: 1.6595,
        longitude: 101.4467,
        regency: "Dumai",
        region: &RIAU,
    },
    Location {
        name: "Bengkalis Utara",
        latitude: 1.4667,
        longitude: 102.0833,
        regency: "Bengkalis",
        region: &RIAU,
    },
    Location {
        name: "Siak Sri Indrapura",
        latitude: 1.1179,
        longitude: 102.0264,
        regency: "Siak",
        region: &RIAU,
    },
    Location {
        name: "Rokan Hilir",
        latitude: 2.0833,
        longitude: 100.8667,
        regency: "Rokan Hilir",
        region: &RIAU,
    },
    Location {
        name: "Rokan Hulu",
        latitude: 1.0,
        longitude: 100.4667,
        regency: "Rokan Hulu",
        region: &RIAU,
    },
    Location {
        name: "Kampar",
        latitude: 0.3267,
        longitude: 101.1474,
        regency: "Kampar",
        region: &RIAU,
    },
    Location {
        name: "Kuantan Singingi",
        latitude: -0.4833,
        longitude: 101.4667,
        regency: "Kuantan Singingi",
        region: &RIAU,
    },
    Location {
        name: "Indragiri Hulu",
        latitude: -0.35,
        longitude: 102.1167,
        regency: "Indragiri Hulu",
        region: &RIAU,
    },
    Location {
        name: "Indragiri Hilir",
        latitude: -0.5167,
        longitude: 103.0833,
        regency: "Indragiri Hilir",
        region: &RIAU,
    },
    // Jambi
    Location {
        name: "Jambi Timur",
        latitude: -1.6101,
        longitude: 103.6131,
        regency: "Jambi",
        region: &JAMBI,
    },
    Location {
        name: "Muaro Jambi",
        latitude: -1.4851,
        longitude: 103.8928,
        regency: "Muaro Jambi",
        region: &JAMBI,
    },
    Location {
        name: "Tanjung Jabung Timur",
        latitude: -1.0581,
        longitude: 104.0122,
        regency: "Tanjung Jabung Timur",
        region: &JAMBI,
    },
    Location {
        name: "Tanjung Jabung Barat",
        latitude: -1.0944,
        longitude: 103.6181,
        regency: "Tanjung Jabung Barat",
        region: &JAMBI,
    },
    Location {
        name: "Batanghari",
        latitude: -1.7833,
        longitude: 103.1167,
        regency: "Batanghari",
        region: &JAMBI,
    },
    Location {
        name: "Sarolangun",
        latitude: -2.2333,
        longitude: 102.6167,
        regency: "Sarolangun",
        region: &JAMBI,
    },
    Location {
        name: "Merangin",
        latitude: -2.0667,
        longitude: 101.5,
        regency: "Merangin",
        region: &JAMBI,
    },
    Location {
        name: "Bungo",
        latitude: -1.4833,
        longitude: 101.8667,
        regency: "Bungo",
        region: &JAMBI,
    },
    Location {
        name: "Tebo",
        latitude: -1.4167,
        longitude: 102.4333,
        regency: "Tebo",
        region: &JAMBI,
    },
    Location {
        name: "Kerinci",
        latitude: -1.9667,
        longitude: 101.0833,
        regency: "Kerinci",
        region: &JAMBI,
    },
];
