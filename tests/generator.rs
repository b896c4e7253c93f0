use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;

use fake_identity::generator::contact::{SENTINEL_CITY, SENTINEL_LINE1, SENTINEL_POSTCODE};
use fake_identity::generator::locale::{au, ca, en, regions, us};
use fake_identity::generator::{address, build_identity, email, person, phone_number, slug};
use fake_identity::random::{int_between, pick_one};
use fake_identity::types::CountryCode;

const SAMPLES: usize = 500;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn postcode_re(country: CountryCode) -> Regex {
    let pattern = match country {
        CountryCode::Us => r"^\d{5}$",
        CountryCode::Ca => {
            r"^[ABCEGHJ-NPRSTVXY]\d[ABCEGHJ-NPRSTVXY] \d[ABCEGHJ-NPRSTVXY]\d$"
        }
        CountryCode::Au => r"^\d{4}$",
    };
    Regex::new(pattern).unwrap()
}

#[test]
fn test_int_between_stays_in_closed_range() {
    let mut rng = rng();
    let mut saw_low = false;
    let mut saw_high = false;
    for _ in 0..SAMPLES {
        let n = int_between(&mut rng, 3, 5);
        assert!((3..=5).contains(&n));
        saw_low |= n == 3;
        saw_high |= n == 5;
    }
    assert!(saw_low && saw_high);
    assert_eq!(int_between(&mut rng, 7, 7), 7);
}

#[test]
fn test_pick_one_returns_member() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let name = pick_one(&mut rng, en::FIRST_NAMES);
        assert!(en::FIRST_NAMES.contains(name));
    }
}

#[test]
fn test_tables_are_populated() {
    assert_eq!(us::STATES.len(), 20);
    assert_eq!(ca::PROVINCES.len(), 13);
    assert_eq!(au::STATES.len(), 8);
    assert_eq!(en::EMAIL_DOMAINS.len(), 3);
    for letter in ['D', 'F', 'I', 'O', 'Q', 'U', 'W', 'Z'] {
        assert!(!ca::POSTAL_LETTERS.contains(&letter));
    }
    assert!(!en::FIRST_NAMES.is_empty());
    assert!(!en::LAST_NAMES.is_empty());
    assert!(!us::AREA_CODES.is_empty());
}

#[test]
fn test_person_draws_from_name_tables() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let p = person(&mut rng);
        assert!(en::FIRST_NAMES.contains(&p.first_name.as_str()));
        assert!(en::LAST_NAMES.contains(&p.last_name.as_str()));
    }
}

#[test]
fn test_slug() {
    assert_eq!(slug("Avery"), "avery");
    assert_eq!(slug("Mary Ann"), "mary.ann");
    assert_eq!(slug("  O'Brien--Smith!! "), "o.brien.smith");
    assert_eq!(slug("José"), "jos");
    assert_eq!(slug("R2-D2"), "r2.d2");
    assert_eq!(slug("!!!"), "");
}

#[test]
fn test_email_local_part_from_plain_names() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let value = email(&mut rng, "Harper", "Lopez");
        let (local, domain) = value.split_once('@').unwrap();
        assert_eq!(local, "harper.lopez");
        assert!(en::EMAIL_DOMAINS.contains(&domain));
    }
}

#[test]
fn test_email_keeps_empty_slug_segment() {
    let mut rng = rng();
    let value = email(&mut rng, "???", "Quinn");
    assert!(value.starts_with(".quinn@"));
}

#[test]
fn test_regions_match_country() {
    let mut rng = rng();
    for country in [CountryCode::Us, CountryCode::Ca, CountryCode::Au] {
        for format_valid in [true, false] {
            for _ in 0..SAMPLES {
                let addr = address(&mut rng, country, format_valid);
                assert!(regions(country).contains(&addr.region.as_str()));
                assert_eq!(addr.country, country);
            }
        }
    }
}

#[test]
fn test_postcodes_match_country_grammar() {
    let mut rng = rng();
    for country in [CountryCode::Us, CountryCode::Ca, CountryCode::Au] {
        let re = postcode_re(country);
        for _ in 0..SAMPLES {
            let addr = address(&mut rng, country, true);
            assert!(re.is_match(&addr.postcode), "{} postcode {}", country, addr.postcode);
        }
    }
}

#[test]
fn test_postcode_ranges() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let us_code: u32 = address(&mut rng, CountryCode::Us, true).postcode.parse().unwrap();
        assert!((10000..=99999).contains(&us_code));
        let au_code: u32 = address(&mut rng, CountryCode::Au, true).postcode.parse().unwrap();
        assert!((200..=9999).contains(&au_code));
    }
}

#[test]
fn test_format_valid_line1_and_city() {
    let line1_re = Regex::new(r"^(\d+) (\S+) (\S+)$").unwrap();
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let addr = address(&mut rng, CountryCode::Us, true);
        assert_ne!(addr.line1, SENTINEL_LINE1);
        let caps = line1_re.captures(&addr.line1).unwrap();
        let number: u32 = caps[1].parse().unwrap();
        assert!((10..=9999).contains(&number));
        assert!(en::STREET_NAMES.contains(&&caps[2]));
        assert!(en::STREET_SUFFIXES.contains(&&caps[3]));
        assert!(!addr.city.contains(' '));
        assert!(en::CITY_PREFIXES.iter().any(|p| addr.city.starts_with(p)));
        assert!(en::CITY_SUFFIXES.iter().any(|s| addr.city.ends_with(s)));
    }
}

#[test]
fn test_format_invalid_uses_sentinel() {
    let mut rng = rng();
    for country in [CountryCode::Us, CountryCode::Ca, CountryCode::Au] {
        let addr = address(&mut rng, country, false);
        assert_eq!(addr.line1, SENTINEL_LINE1);
        assert_eq!(addr.city, SENTINEL_CITY);
        assert_eq!(addr.postcode, SENTINEL_POSTCODE);
        assert_eq!(addr.line1, "0000 Example St");
        assert_eq!(addr.city, "Nowhere");
        assert_eq!(addr.postcode, "00000");
    }
}

#[test]
fn test_phone_grammar() {
    let au_re = Regex::new(r"^04\d{2} \d{3} \d{3}$").unwrap();
    let nanp_re = Regex::new(r"^\((\d{3})\) [2-9]\d{2}-\d{4}$").unwrap();
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let au_phone = phone_number(&mut rng, CountryCode::Au);
        assert!(au_re.is_match(&au_phone), "{}", au_phone);

        for country in [CountryCode::Us, CountryCode::Ca] {
            let phone = phone_number(&mut rng, country);
            let caps = nanp_re.captures(&phone).unwrap();
            let area: u16 = caps[1].parse().unwrap();
            assert!(us::AREA_CODES.contains(&area));
        }
    }
}

#[test]
fn test_identity_email_follows_its_own_name() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let identity = build_identity(&mut rng, CountryCode::Ca, true);
        let local = identity.email.split('@').next().unwrap();
        assert_eq!(
            local,
            format!(
                "{}.{}",
                identity.person.first_name.to_lowercase(),
                identity.person.last_name.to_lowercase()
            )
        );
        assert_eq!(identity.address.country, CountryCode::Ca);
    }
}

#[test]
fn test_identity_serializes_flat() {
    let mut rng = rng();
    let identity = build_identity(&mut rng, CountryCode::Au, false);
    let value = serde_json::to_value(&identity).unwrap();
    assert!(value["first_name"].is_string());
    assert!(value["last_name"].is_string());
    assert!(value["email"].is_string());
    assert!(value["phone"].is_string());
    assert_eq!(value["address"]["country"], "AU");
    assert_eq!(value["address"]["postcode"], "00000");
    assert!(value.get("person").is_none());
}

#[test]
fn test_country_code_parsing() {
    assert_eq!("US".parse::<CountryCode>().unwrap(), CountryCode::Us);
    assert_eq!("ca".parse::<CountryCode>().unwrap(), CountryCode::Ca);
    assert_eq!(" Canada ".parse::<CountryCode>().unwrap(), CountryCode::Ca);
    assert_eq!("aus".parse::<CountryCode>().unwrap(), CountryCode::Au);
    assert_eq!("ZZ".parse::<CountryCode>().unwrap(), CountryCode::Us);
    assert_eq!("".parse::<CountryCode>().unwrap(), CountryCode::Us);
    assert_eq!(CountryCode::Au.to_string(), "AU");
}
