//! Field normalisation rules

use identity_qr_decoder::normalizer::{canonical_gender, normalize_date, title_case};
use identity_qr_decoder::types::Gender;

#[test]
fn test_date_formats() {
    assert_eq!(normalize_date("15-08-1990").as_deref(), Some("1990-08-15"));
    assert_eq!(normalize_date("15/08/1990").as_deref(), Some("1990-08-15"));
    assert_eq!(normalize_date("1990-08-15").as_deref(), Some("1990-08-15"));
    assert_eq!(normalize_date("5-8-1990").as_deref(), Some("1990-08-05"));
}

#[test]
fn test_invalid_dates() {
    assert_eq!(normalize_date("31-02-1990"), None);
    assert_eq!(normalize_date("1990"), None);
    assert_eq!(normalize_date("yesterday"), None);
    assert_eq!(normalize_date(""), None);
}

#[test]
fn test_title_case() {
    assert_eq!(title_case("  RAVI   kumar "), "Ravi Kumar");
    assert_eq!(title_case("asha"), "Asha");
}

#[test]
fn test_gender_codes() {
    assert_eq!(canonical_gender("m"), Some(Gender::Male));
    assert_eq!(canonical_gender("FEMALE"), Some(Gender::Female));
    assert_eq!(canonical_gender("T"), Some(Gender::Other));
    assert_eq!(canonical_gender(" "), None);
}
