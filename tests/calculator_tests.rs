use chrono::NaiveDate;
use rtenure::core::{
    LESS_THAN_A_MONTH, format_duration, format_duration_i64, months_between,
    months_between_dates, total_experience, total_months,
};
use rtenure::models::{DurationMonths, EndDate, EvaluationInstant, WorkPeriod};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn at() -> EvaluationInstant {
    EvaluationInstant::new(d(2025, 10, 18))
}

fn months(n: u64) -> DurationMonths {
    DurationMonths::new(n)
}

#[test]
fn test_same_date_is_zero_months() {
    for date in [d(2020, 1, 1), d(2024, 2, 29), d(2025, 12, 31)] {
        assert_eq!(months_between_dates(date, date), DurationMonths::ZERO);
    }
}

#[test]
fn test_no_rollback_when_end_day_reached() {
    // 21 >= 1: a full 13th month has elapsed
    assert_eq!(months_between_dates(d(2023, 9, 1), d(2024, 10, 21)), months(13));
    assert_eq!(months_between_dates(d(2024, 3, 15), d(2024, 5, 15)), months(2));
}

#[test]
fn test_rollback_when_end_day_before_start_day() {
    assert_eq!(months_between_dates(d(2024, 10, 22), d(2025, 10, 18)), months(11));
    assert_eq!(months_between_dates(d(2024, 1, 31), d(2024, 2, 29)), months(0));
    assert_eq!(months_between_dates(d(2024, 1, 15), d(2024, 2, 14)), months(0));
}

#[test]
fn test_inverted_range_is_zero() {
    assert_eq!(months_between_dates(d(2025, 1, 10), d(2024, 12, 1)), months(0));
    assert_eq!(months_between_dates(d(2024, 5, 20), d(2024, 4, 25)), months(0));
    // same month, start day after end day
    assert_eq!(months_between_dates(d(2024, 5, 20), d(2024, 5, 10)), months(0));
    assert_eq!(months_between_dates(d(2030, 1, 1), d(2020, 1, 1)), months(0));
}

#[test]
fn test_ongoing_resolves_to_evaluation_instant() {
    assert_eq!(
        months_between(d(2024, 10, 22), EndDate::Ongoing, at()),
        months(11)
    );
    assert_eq!(
        months_between(d(2024, 10, 22), EndDate::Ongoing, at()),
        months_between_dates(d(2024, 10, 22), at().date())
    );
    // started after the instant: inverted, so zero
    assert_eq!(
        months_between(d(2026, 1, 1), EndDate::Ongoing, at()),
        months(0)
    );
}

#[test]
fn test_concrete_end_ignores_evaluation_instant() {
    let end = EndDate::On(d(2024, 10, 21));
    let a = months_between(d(2023, 9, 1), end, EvaluationInstant::new(d(2000, 1, 1)));
    let b = months_between(d(2023, 9, 1), end, EvaluationInstant::new(d(2099, 1, 1)));
    assert_eq!(a, b);
    assert_eq!(a, months(13));
}

#[test]
fn test_months_between_monotonic_in_end() {
    let start = d(2020, 1, 31);
    let mut end = d(2019, 12, 1);
    let mut prev = months_between_dates(start, end);

    while end <= d(2023, 12, 31) {
        let cur = months_between_dates(start, end);
        assert!(cur >= prev, "{start} -> {end}: {cur:?} < {prev:?}");
        prev = cur;
        end = end.succ_opt().expect("next day");
    }
    assert_eq!(prev, months(47));
}

#[test]
fn test_format_duration_shapes() {
    assert_eq!(format_duration(months(0)), "Less than a month");
    assert_eq!(format_duration(months(0)), LESS_THAN_A_MONTH);
    assert_eq!(format_duration(months(1)), "1 months");
    assert_eq!(format_duration(months(6)), "6 months");
    assert_eq!(format_duration(months(11)), "11 months");
    assert_eq!(format_duration(months(12)), "1 years");
    assert_eq!(format_duration(months(13)), "1 years, 1 months");
    assert_eq!(format_duration(months(24)), "2 years");
    assert_eq!(format_duration(months(123)), "10 years, 3 months");
}

#[test]
fn test_format_duration_i64_matches_unsigned() {
    for n in [0_i64, 1, 12, 13, 59] {
        assert_eq!(format_duration_i64(n), format_duration(months(n as u64)));
    }
}

#[test]
fn test_format_duration_i64_beyond_u32_range() {
    assert_eq!(
        format_duration_i64(u32::MAX as i64 + 1),
        "357913941 years, 4 months"
    );
    assert_eq!(
        format_duration_i64(i64::MAX),
        format_duration(months(i64::MAX as u64))
    );
}

#[test]
#[should_panic(expected = "negative month count")]
fn test_format_duration_i64_rejects_negative() {
    format_duration_i64(-1);
}

#[test]
fn test_total_experience_empty() {
    assert_eq!(total_experience(&[], at()), "Less than a month");
    assert_eq!(total_experience(&[], at()), format_duration(DurationMonths::ZERO));
}

#[test]
fn test_total_experience_sums_entries() {
    let periods = vec![
        WorkPeriod::closed(d(2023, 9, 1), d(2024, 10, 21)),
        WorkPeriod::ongoing(d(2024, 10, 22)),
    ];
    assert_eq!(total_months(&periods, at()), months(24));
    assert_eq!(total_experience(&periods, at()), "2 years");
}

#[test]
fn test_total_counts_inverted_period_as_zero() {
    let periods = vec![
        WorkPeriod::closed(d(2023, 9, 1), d(2024, 10, 21)),
        WorkPeriod::closed(d(2025, 1, 1), d(2024, 1, 1)),
    ];
    assert_eq!(total_experience(&periods, at()), "1 years, 1 months");
}

#[test]
fn test_total_experience_order_independent() {
    let a = WorkPeriod::closed(d(2015, 3, 10), d(2017, 6, 9));
    let b = WorkPeriod::closed(d(2018, 1, 1), d(2018, 7, 31)).with_title("Contract");
    let c = WorkPeriod::ongoing(d(2021, 2, 28)).with_company("Initech");

    let orders = [
        vec![a.clone(), b.clone(), c.clone()],
        vec![a.clone(), c.clone(), b.clone()],
        vec![b.clone(), a.clone(), c.clone()],
        vec![b.clone(), c.clone(), a.clone()],
        vec![c.clone(), a.clone(), b.clone()],
        vec![c, b, a],
    ];

    let expected = total_experience(&orders[0], at());
    for order in &orders {
        assert_eq!(total_experience(order, at()), expected);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let periods = vec![
        WorkPeriod::closed(d(2023, 9, 1), d(2024, 10, 21)),
        WorkPeriod::ongoing(d(2024, 10, 22)),
    ];
    let first = total_experience(&periods, at());
    for _ in 0..5 {
        assert_eq!(total_experience(&periods, at()), first);
        assert_eq!(
            months_between(d(2024, 10, 22), EndDate::Ongoing, at()),
            months(11)
        );
        assert_eq!(format_duration(months(13)), "1 years, 1 months");
    }
}

#[test]
fn test_duration_months_sum_widens_then_saturates() {
    // sums past the u32 range stay exact
    let total: DurationMonths = [months(u32::MAX as u64), months(5)].into_iter().sum();
    assert_eq!(total, months(u32::MAX as u64 + 5));

    let capped: DurationMonths = [months(u64::MAX), months(5)].into_iter().sum();
    assert_eq!(capped, months(u64::MAX));
    assert!(DurationMonths::ZERO.is_zero());
    assert_eq!(months(27).years(), 2);
    assert_eq!(months(27).remainder(), 3);
}
