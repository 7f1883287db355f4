//! Country tables used by the customs rules.

/// ISO-3166 alpha-2 codes of the EU member states.
///
/// Shipments to any country outside this set need a customs declaration.
pub const EU_COUNTRIES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR",
    "HR", "HU", "IE", "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO",
    "SE", "SI", "SK",
];

/// Whether `cc` is an EU member state.
pub fn is_eu_country(cc: &str) -> bool {
    EU_COUNTRIES.contains(&cc)
}
