#[cfg(test)]
mod tests {
    use crate::quote::models::{
        vat_rate, DocumentKind, LineItem, QuoteHeader, QuoteModel,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn header(include_vat: bool) -> QuoteHeader {
        QuoteHeader {
            kind: DocumentKind::Quote,
            date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
            number: "88".to_string(),
            client: "Rossi Srl".to_string(),
            subject: "Launch services".to_string(),
            include_vat,
        }
    }

    fn item(label: &str, real: &str, applied: &str) -> LineItem {
        LineItem {
            label: label.to_string(),
            frequency: "one-time".to_string(),
            description: String::new(),
            real_price: Decimal::from_str(real).unwrap(),
            applied_price: Decimal::from_str(applied).unwrap(),
        }
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_totals_for_two_items() {
        let mut model = QuoteModel::new(header(true));
        model.add_item(item("Analysis", "1000", "800"));
        model.add_item(item("Funnel", "500", "500"));

        let totals = model.compute_totals();
        assert_eq!(totals.real_total, dec("1500"));
        assert_eq!(totals.applied_total, dec("1300"));
        assert_eq!(totals.discount, dec("200"));
        assert_eq!(totals.discount_pct.round_dp(1), dec("13.3"));
        assert_eq!(totals.vat_total, Some(dec("1586.00")));
    }

    #[test]
    fn test_totals_for_empty_sequence_are_zero() {
        let model = QuoteModel::new(header(false));

        let totals = model.compute_totals();
        assert_eq!(totals.real_total, Decimal::ZERO);
        assert_eq!(totals.applied_total, Decimal::ZERO);
        assert_eq!(totals.discount, Decimal::ZERO);
        assert_eq!(totals.discount_pct, Decimal::ZERO);
        assert_eq!(totals.vat_total, None);
    }

    #[test]
    fn test_vat_total_absent_when_excluded() {
        let mut model = QuoteModel::new(header(false));
        model.add_item(item("Analysis", "1000", "800"));

        assert_eq!(model.compute_totals().vat_total, None);
    }

    #[test]
    fn test_discount_can_be_negative() {
        // Applied price above real price is allowed; the discount goes negative.
        let mut model = QuoteModel::new(header(false));
        model.add_item(item("Rush fee", "100", "150"));

        let totals = model.compute_totals();
        assert_eq!(totals.discount, dec("-50"));
        assert_eq!(totals.discount_pct, dec("-50"));
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut model = QuoteModel::new(header(false));
        model.add_item(item("First", "1", "1"));
        model.add_item(item("Second", "2", "2"));
        model.add_item(item("Third", "3", "3"));

        let labels: Vec<_> = model.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_remove_item_shifts_rows() {
        let mut model = QuoteModel::new(header(false));
        model.add_item(item("First", "1", "1"));
        model.add_item(item("Second", "2", "2"));

        let removed = model.remove_item(0).unwrap();
        assert_eq!(removed.label, "First");
        assert_eq!(model.items.len(), 1);
        assert_eq!(model.items[0].label, "Second");

        assert!(model.remove_item(5).is_none());
    }

    #[test]
    fn test_vat_rate_is_fixed() {
        assert_eq!(vat_rate(), dec("0.22"));
    }

    #[test]
    fn test_totals_keep_full_precision() {
        // Rounding is a display concern; the model accumulates exactly.
        let mut model = QuoteModel::new(header(false));
        model.add_item(item("A", "0.105", "0.105"));
        model.add_item(item("B", "0.105", "0.105"));

        let totals = model.compute_totals();
        assert_eq!(totals.real_total, dec("0.21"));
        assert_eq!(totals.discount, Decimal::ZERO);
    }
}
