use crate::format_currency;

#[test]
fn test_format_currency_groups_thousands() {
    assert_eq!(format_currency(25000.0), "$25,000.00");
    assert_eq!(format_currency(1234567.891), "$1,234,567.89");
}

#[test]
fn test_format_currency_small_amounts() {
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(999.0), "$999.00");
    assert_eq!(format_currency(0.5), "$0.50");
}

#[test]
fn test_format_currency_negative() {
    assert_eq!(format_currency(-1200.0), "-$1,200.00");
}
