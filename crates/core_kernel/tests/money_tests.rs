//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, currency handling,
//! rate application, and display formatting.

use core_kernel::{Currency, Money, MoneyError, Rate};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_positive_false_for_zero() {
        assert!(!Money::zero(Currency::USD).is_positive());
    }

    #[test]
    fn test_is_negative_true_for_negative_amount() {
        let m = Money::new(dec!(-5.00), Currency::USD);
        assert!(m.is_negative());
        assert!(!m.is_positive());
    }

    #[test]
    fn test_abs_strips_sign() {
        let m = Money::new(dec!(-5.00), Currency::USD);
        assert_eq!(m.abs().amount(), dec!(5.00));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(1.25), Currency::USD);
        let b = Money::new(dec!(2.75), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(4.00));
    }

    #[test]
    fn test_checked_add_rejects_currency_mismatch() {
        let usd = Money::new(dec!(1.00), Currency::USD);
        let gbp = Money::new(dec!(1.00), Currency::GBP);
        assert!(matches!(
            usd.checked_add(&gbp),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_multiply_by_quantity() {
        let unit = Money::new(dec!(2.50), Currency::USD);
        assert_eq!(unit.multiply(dec!(3)).amount(), dec!(7.50));
    }

    #[test]
    fn test_divide_rejects_zero_divisor() {
        let m = Money::new(dec!(10.00), Currency::USD);
        assert_eq!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_round_to_currency() {
        let m = Money::new(dec!(19.4488), Currency::USD);
        assert_eq!(m.round_to_currency().amount(), dec!(19.45));
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(15));
        assert_eq!(rate.as_decimal(), dec!(0.15));
        assert_eq!(rate.as_percentage(), dec!(15));
    }

    #[test]
    fn test_rate_apply_computes_tax() {
        let rate = Rate::new(dec!(0.08));
        let subtotal = Money::new(dec!(20.00), Currency::USD);
        assert_eq!(rate.apply(&subtotal).amount(), dec!(1.60));
    }

    #[test]
    fn test_zero_rate() {
        assert!(Rate::ZERO.is_zero());
        assert_eq!(Rate::ZERO.complement(), dec!(1));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(0.05)).to_string(), "5.00%");
    }
}

mod display {
    use super::*;

    #[test]
    fn test_usd_display_uses_symbol_and_two_decimals() {
        let m = Money::new(dec!(1234.5), Currency::USD);
        assert_eq!(m.to_string(), "$1234.50");
    }

    #[test]
    fn test_eur_display() {
        let m = Money::new(dec!(9.99), Currency::EUR);
        assert_eq!(m.to_string(), "€9.99");
    }
}
