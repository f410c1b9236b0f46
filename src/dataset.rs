//! Bundled reference dataset: continents, countries, and the IANA
//! timezone list.
//!
//! Country names and calling codes follow ISO 3166-1 / ITU-T E.164.
//! Countries with multiple calling codes carry them comma-joined
//! (e.g. Kazakhstan `"76,77"`); the builder splits them apart.
//! Timezone names come from chrono-tz's compiled-in tz database.

use chrono_tz::TZ_VARIANTS;

/// A continent record: two-letter code and English name.
#[derive(Debug, Clone)]
pub struct Continent {
    pub code: &'static str,
    pub name: &'static str,
}

/// A country record from the bundled dataset.
#[derive(Debug, Clone)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code (e.g. "TZ").
    pub code: &'static str,
    pub name: &'static str,
    /// Continent code (e.g. "AF").
    pub continent: &'static str,
    /// Calling code(s), comma-joined when a country has several.
    pub phone: &'static str,
}

/// Read-only access to the three reference tables every constant
/// derivation depends on.
pub trait ReferenceData {
    fn continents(&self) -> &[Continent];
    fn countries(&self) -> &[Country];
    fn timezone_names(&self) -> Vec<String>;
}

/// The compiled-in dataset. Always available; never empty.
pub struct BundledData;

impl ReferenceData for BundledData {
    fn continents(&self) -> &[Continent] {
        CONTINENTS
    }

    fn countries(&self) -> &[Country] {
        COUNTRIES
    }

    fn timezone_names(&self) -> Vec<String> {
        TZ_VARIANTS.iter().map(|tz| tz.name().to_string()).collect()
    }
}

const CONTINENTS: &[Continent] = &[
    Continent { code: "AF", name: "Africa" },
    Continent { code: "AN", name: "Antarctica" },
    Continent { code: "AS", name: "Asia" },
    Continent { code: "EU", name: "Europe" },
    Continent { code: "NA", name: "North America" },
    Continent { code: "OC", name: "Oceania" },
    Continent { code: "SA", name: "South America" },
];

const COUNTRIES: &[Country] = &[
    // ─── Africa ─────────────────────────────────────────────────
    Country { code: "DZ", name: "Algeria", continent: "AF", phone: "213" },
    Country { code: "AO", name: "Angola", continent: "AF", phone: "244" },
    Country { code: "BJ", name: "Benin", continent: "AF", phone: "229" },
    Country { code: "BW", name: "Botswana", continent: "AF", phone: "267" },
    Country { code: "BF", name: "Burkina Faso", continent: "AF", phone: "226" },
    Country { code: "BI", name: "Burundi", continent: "AF", phone: "257" },
    Country { code: "CM", name: "Cameroon", continent: "AF", phone: "237" },
    Country { code: "EG", name: "Egypt", continent: "AF", phone: "20" },
    Country { code: "ET", name: "Ethiopia", continent: "AF", phone: "251" },
    Country { code: "GH", name: "Ghana", continent: "AF", phone: "233" },
    Country { code: "CI", name: "Ivory Coast", continent: "AF", phone: "225" },
    Country { code: "KE", name: "Kenya", continent: "AF", phone: "254" },
    Country { code: "LY", name: "Libya", continent: "AF", phone: "218" },
    Country { code: "MG", name: "Madagascar", continent: "AF", phone: "261" },
    Country { code: "MW", name: "Malawi", continent: "AF", phone: "265" },
    Country { code: "ML", name: "Mali", continent: "AF", phone: "223" },
    Country { code: "MA", name: "Morocco", continent: "AF", phone: "212" },
    Country { code: "MZ", name: "Mozambique", continent: "AF", phone: "258" },
    Country { code: "NA", name: "Namibia", continent: "AF", phone: "264" },
    Country { code: "NE", name: "Niger", continent: "AF", phone: "227" },
    Country { code: "NG", name: "Nigeria", continent: "AF", phone: "234" },
    Country { code: "RW", name: "Rwanda", continent: "AF", phone: "250" },
    Country { code: "SN", name: "Senegal", continent: "AF", phone: "221" },
    Country { code: "SO", name: "Somalia", continent: "AF", phone: "252" },
    Country { code: "ZA", name: "South Africa", continent: "AF", phone: "27" },
    Country { code: "SS", name: "South Sudan", continent: "AF", phone: "211" },
    Country { code: "SD", name: "Sudan", continent: "AF", phone: "249" },
    Country { code: "TZ", name: "Tanzania", continent: "AF", phone: "255" },
    Country { code: "TN", name: "Tunisia", continent: "AF", phone: "216" },
    Country { code: "UG", name: "Uganda", continent: "AF", phone: "256" },
    Country { code: "ZM", name: "Zambia", continent: "AF", phone: "260" },
    Country { code: "ZW", name: "Zimbabwe", continent: "AF", phone: "263" },
    // ─── Antarctica ─────────────────────────────────────────────
    Country { code: "AQ", name: "Antarctica", continent: "AN", phone: "672" },
    // ─── Asia ───────────────────────────────────────────────────
    Country { code: "AF", name: "Afghanistan", continent: "AS", phone: "93" },
    Country { code: "AM", name: "Armenia", continent: "AS", phone: "374" },
    Country { code: "AZ", name: "Azerbaijan", continent: "AS", phone: "994" },
    Country { code: "BD", name: "Bangladesh", continent: "AS", phone: "880" },
    Country { code: "KH", name: "Cambodia", continent: "AS", phone: "855" },
    Country { code: "CN", name: "China", continent: "AS", phone: "86" },
    Country { code: "GE", name: "Georgia", continent: "AS", phone: "995" },
    Country { code: "IN", name: "India", continent: "AS", phone: "91" },
    Country { code: "ID", name: "Indonesia", continent: "AS", phone: "62" },
    Country { code: "IR", name: "Iran", continent: "AS", phone: "98" },
    Country { code: "IQ", name: "Iraq", continent: "AS", phone: "964" },
    Country { code: "IL", name: "Israel", continent: "AS", phone: "972" },
    Country { code: "JP", name: "Japan", continent: "AS", phone: "81" },
    Country { code: "JO", name: "Jordan", continent: "AS", phone: "962" },
    Country { code: "KZ", name: "Kazakhstan", continent: "AS", phone: "76,77" },
    Country { code: "KW", name: "Kuwait", continent: "AS", phone: "965" },
    Country { code: "LB", name: "Lebanon", continent: "AS", phone: "961" },
    Country { code: "MY", name: "Malaysia", continent: "AS", phone: "60" },
    Country { code: "MN", name: "Mongolia", continent: "AS", phone: "976" },
    Country { code: "MM", name: "Myanmar", continent: "AS", phone: "95" },
    Country { code: "NP", name: "Nepal", continent: "AS", phone: "977" },
    Country { code: "KP", name: "North Korea", continent: "AS", phone: "850" },
    Country { code: "OM", name: "Oman", continent: "AS", phone: "968" },
    Country { code: "PK", name: "Pakistan", continent: "AS", phone: "92" },
    Country { code: "PS", name: "Palestine", continent: "AS", phone: "970" },
    Country { code: "PH", name: "Philippines", continent: "AS", phone: "63" },
    Country { code: "QA", name: "Qatar", continent: "AS", phone: "974" },
    Country { code: "SA", name: "Saudi Arabia", continent: "AS", phone: "966" },
    Country { code: "SG", name: "Singapore", continent: "AS", phone: "65" },
    Country { code: "KR", name: "South Korea", continent: "AS", phone: "82" },
    Country { code: "LK", name: "Sri Lanka", continent: "AS", phone: "94" },
    Country { code: "SY", name: "Syria", continent: "AS", phone: "963" },
    Country { code: "TW", name: "Taiwan", continent: "AS", phone: "886" },
    Country { code: "TH", name: "Thailand", continent: "AS", phone: "66" },
    Country { code: "TR", name: "Turkey", continent: "AS", phone: "90" },
    Country { code: "AE", name: "United Arab Emirates", continent: "AS", phone: "971" },
    Country { code: "UZ", name: "Uzbekistan", continent: "AS", phone: "998" },
    Country { code: "VN", name: "Vietnam", continent: "AS", phone: "84" },
    Country { code: "YE", name: "Yemen", continent: "AS", phone: "967" },
    // ─── Europe ─────────────────────────────────────────────────
    Country { code: "AL", name: "Albania", continent: "EU", phone: "355" },
    Country { code: "AT", name: "Austria", continent: "EU", phone: "43" },
    Country { code: "BY", name: "Belarus", continent: "EU", phone: "375" },
    Country { code: "BE", name: "Belgium", continent: "EU", phone: "32" },
    Country { code: "BA", name: "Bosnia and Herzegovina", continent: "EU", phone: "387" },
    Country { code: "BG", name: "Bulgaria", continent: "EU", phone: "359" },
    Country { code: "HR", name: "Croatia", continent: "EU", phone: "385" },
    Country { code: "CZ", name: "Czechia", continent: "EU", phone: "420" },
    Country { code: "DK", name: "Denmark", continent: "EU", phone: "45" },
    Country { code: "EE", name: "Estonia", continent: "EU", phone: "372" },
    Country { code: "FI", name: "Finland", continent: "EU", phone: "358" },
    Country { code: "FR", name: "France", continent: "EU", phone: "33" },
    Country { code: "DE", name: "Germany", continent: "EU", phone: "49" },
    Country { code: "GR", name: "Greece", continent: "EU", phone: "30" },
    Country { code: "HU", name: "Hungary", continent: "EU", phone: "36" },
    Country { code: "IS", name: "Iceland", continent: "EU", phone: "354" },
    Country { code: "IE", name: "Ireland", continent: "EU", phone: "353" },
    Country { code: "IT", name: "Italy", continent: "EU", phone: "39" },
    Country { code: "LV", name: "Latvia", continent: "EU", phone: "371" },
    Country { code: "LT", name: "Lithuania", continent: "EU", phone: "370" },
    Country { code: "LU", name: "Luxembourg", continent: "EU", phone: "352" },
    Country { code: "MT", name: "Malta", continent: "EU", phone: "356" },
    Country { code: "MD", name: "Moldova", continent: "EU", phone: "373" },
    Country { code: "NL", name: "Netherlands", continent: "EU", phone: "31" },
    Country { code: "MK", name: "North Macedonia", continent: "EU", phone: "389" },
    Country { code: "NO", name: "Norway", continent: "EU", phone: "47" },
    Country { code: "PL", name: "Poland", continent: "EU", phone: "48" },
    Country { code: "PT", name: "Portugal", continent: "EU", phone: "351" },
    Country { code: "RO", name: "Romania", continent: "EU", phone: "40" },
    Country { code: "RU", name: "Russia", continent: "EU", phone: "7" },
    Country { code: "RS", name: "Serbia", continent: "EU", phone: "381" },
    Country { code: "SK", name: "Slovakia", continent: "EU", phone: "421" },
    Country { code: "SI", name: "Slovenia", continent: "EU", phone: "386" },
    Country { code: "ES", name: "Spain", continent: "EU", phone: "34" },
    Country { code: "SE", name: "Sweden", continent: "EU", phone: "46" },
    Country { code: "CH", name: "Switzerland", continent: "EU", phone: "41" },
    Country { code: "UA", name: "Ukraine", continent: "EU", phone: "380" },
    Country { code: "GB", name: "United Kingdom", continent: "EU", phone: "44" },
    // ─── North America ──────────────────────────────────────────
    Country { code: "CA", name: "Canada", continent: "NA", phone: "1" },
    Country { code: "CR", name: "Costa Rica", continent: "NA", phone: "506" },
    Country { code: "CU", name: "Cuba", continent: "NA", phone: "53" },
    Country { code: "DO", name: "Dominican Republic", continent: "NA", phone: "1809,1829,1849" },
    Country { code: "SV", name: "El Salvador", continent: "NA", phone: "503" },
    Country { code: "GT", name: "Guatemala", continent: "NA", phone: "502" },
    Country { code: "HT", name: "Haiti", continent: "NA", phone: "509" },
    Country { code: "HN", name: "Honduras", continent: "NA", phone: "504" },
    Country { code: "JM", name: "Jamaica", continent: "NA", phone: "1876" },
    Country { code: "MX", name: "Mexico", continent: "NA", phone: "52" },
    Country { code: "NI", name: "Nicaragua", continent: "NA", phone: "505" },
    Country { code: "PA", name: "Panama", continent: "NA", phone: "507" },
    Country { code: "PR", name: "Puerto Rico", continent: "NA", phone: "1787,1939" },
    Country { code: "TT", name: "Trinidad and Tobago", continent: "NA", phone: "1868" },
    Country { code: "US", name: "United States", continent: "NA", phone: "1" },
    // ─── Oceania ────────────────────────────────────────────────
    Country { code: "AU", name: "Australia", continent: "OC", phone: "61" },
    Country { code: "FJ", name: "Fiji", continent: "OC", phone: "679" },
    Country { code: "NZ", name: "New Zealand", continent: "OC", phone: "64" },
    Country { code: "PG", name: "Papua New Guinea", continent: "OC", phone: "675" },
    Country { code: "WS", name: "Samoa", continent: "OC", phone: "685" },
    Country { code: "TO", name: "Tonga", continent: "OC", phone: "676" },
    Country { code: "VU", name: "Vanuatu", continent: "OC", phone: "678" },
    // ─── South America ──────────────────────────────────────────
    Country { code: "AR", name: "Argentina", continent: "SA", phone: "54" },
    Country { code: "BO", name: "Bolivia", continent: "SA", phone: "591" },
    Country { code: "BR", name: "Brazil", continent: "SA", phone: "55" },
    Country { code: "CL", name: "Chile", continent: "SA", phone: "56" },
    Country { code: "CO", name: "Colombia", continent: "SA", phone: "57" },
    Country { code: "EC", name: "Ecuador", continent: "SA", phone: "593" },
    Country { code: "GY", name: "Guyana", continent: "SA", phone: "592" },
    Country { code: "PY", name: "Paraguay", continent: "SA", phone: "595" },
    Country { code: "PE", name: "Peru", continent: "SA", phone: "51" },
    Country { code: "SR", name: "Suriname", continent: "SA", phone: "597" },
    Country { code: "UY", name: "Uruguay", continent: "SA", phone: "598" },
    Country { code: "VE", name: "Venezuela", continent: "SA", phone: "58" },
];
