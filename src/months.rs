/// Two-digit month codes in calendar order.
pub const MONTHS: [&str; 12] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
];

pub fn months() -> impl Iterator<Item = &'static str> {
    MONTHS.iter().copied()
}

#[test]
fn test_months() {
    let all: Vec<_> = months().collect();
    assert_eq!(all.len(), 12);
    assert_eq!(
        all,
        ["01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12"]
    );
    assert_eq!(months().collect::<Vec<_>>(), all);
}
