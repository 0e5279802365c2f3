use proptest::prelude::*;

use rust_decimal::Decimal;
use veolas_types::{BaseUnits, NomineeAddress};

proptest! {
    /// A two-decimal percentage converts to exactly its base units.
    #[test]
    fn two_decimal_percent_is_exact(units in 0u64..=1_000_000) {
        let percent = Decimal::new(units as i64, 2);
        prop_assert_eq!(BaseUnits::from_percent(percent), BaseUnits::new(units));
        prop_assert_eq!(BaseUnits::new(units).to_percent(), percent);
    }

    /// Extra fractional digits are always truncated away.
    #[test]
    fn extra_digits_truncate(units in 0u64..=10_000, extra in 0u64..10) {
        let percent = Decimal::new((units * 10 + extra) as i64, 3);
        prop_assert_eq!(BaseUnits::from_percent(percent), BaseUnits::new(units));
    }

    /// Negative percentages never produce weight.
    #[test]
    fn negative_percent_is_zero(units in 1i64..1_000_000) {
        prop_assert_eq!(BaseUnits::from_percent(Decimal::new(-units, 2)), BaseUnits::ZERO);
    }

    /// Base units survive a string round trip.
    #[test]
    fn base_units_string_roundtrip(raw in any::<u64>()) {
        let parsed: BaseUnits = BaseUnits::new(raw).to_string().parse().unwrap();
        prop_assert_eq!(parsed, BaseUnits::new(raw));
    }

    /// Addresses that differ only in ASCII case are the same nominee.
    #[test]
    fn address_identity_ignores_case(hex in "0x[0-9a-f]{40}") {
        let lower = NomineeAddress::new(hex.clone());
        let upper = NomineeAddress::new(hex.to_ascii_uppercase());
        prop_assert_eq!(&lower, &upper);
        prop_assert_eq!(lower.key(), upper.key());
        prop_assert_eq!(upper.as_str(), hex.to_ascii_uppercase());
    }
}
