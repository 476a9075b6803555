//! Cross-checks generated sequences against RFC 5545 expansion of the
//! equivalent RRULE for the rule shapes where both agree.

use chrono::NaiveDate;
use kairos_engine::{DayOfWeek, RecurrenceRule, WeekOfMonth, generate};
use rrule::RRuleSet;

struct CrossCheckCase {
    name: &'static str,
    rule: RecurrenceRule,
    rruleset: &'static str,
    recurring: usize,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn cases() -> Vec<CrossCheckCase> {
    vec![
        CrossCheckCase {
            name: "daily_every_third_day",
            rule: RecurrenceRule::daily(date(2024, 1, 1), 3),
            rruleset: "DTSTART:20240101T000000Z\nRRULE:FREQ=DAILY;INTERVAL=3;COUNT=21",
            recurring: 20,
        },
        CrossCheckCase {
            name: "weekly_mondays",
            rule: RecurrenceRule::weekly(date(2024, 1, 1), 1, [DayOfWeek::Monday]),
            rruleset: "DTSTART:20240101T000000Z\nRRULE:FREQ=WEEKLY;BYDAY=MO;COUNT=11",
            recurring: 10,
        },
        CrossCheckCase {
            name: "weekly_every_other_monday",
            rule: RecurrenceRule::weekly(date(2024, 1, 1), 2, [DayOfWeek::Monday]),
            rruleset: "DTSTART:20240101T000000Z\nRRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=MO;COUNT=11",
            recurring: 10,
        },
        CrossCheckCase {
            name: "monthly_on_the_fifteenth",
            rule: RecurrenceRule::monthly_by_date(date(2024, 1, 15), 1, 15),
            rruleset: "DTSTART:20240115T000000Z\nRRULE:FREQ=MONTHLY;BYMONTHDAY=15;COUNT=13",
            recurring: 12,
        },
        CrossCheckCase {
            name: "quarterly_on_the_fifteenth",
            rule: RecurrenceRule::monthly_by_date(date(2024, 1, 15), 3, 15),
            rruleset: "DTSTART:20240115T000000Z\nRRULE:FREQ=MONTHLY;INTERVAL=3;BYMONTHDAY=15;COUNT=9",
            recurring: 8,
        },
        CrossCheckCase {
            name: "monthly_second_tuesday",
            rule: RecurrenceRule::monthly_by_weekday(
                date(2024, 1, 9),
                1,
                WeekOfMonth::Second,
                DayOfWeek::Tuesday,
            ),
            rruleset: "DTSTART:20240109T000000Z\nRRULE:FREQ=MONTHLY;BYDAY=2TU;COUNT=13",
            recurring: 12,
        },
        CrossCheckCase {
            name: "monthly_last_friday",
            rule: RecurrenceRule::monthly_by_weekday(
                date(2024, 1, 26),
                1,
                WeekOfMonth::Last,
                DayOfWeek::Friday,
            ),
            rruleset: "DTSTART:20240126T000000Z\nRRULE:FREQ=MONTHLY;BYDAY=-1FR;COUNT=13",
            recurring: 12,
        },
        CrossCheckCase {
            name: "yearly_june_fifteenth",
            rule: RecurrenceRule::yearly(date(2024, 6, 15), 1, Some(6), Some(15)),
            rruleset: "DTSTART:20240615T000000Z\nRRULE:FREQ=YEARLY;BYMONTH=6;BYMONTHDAY=15;COUNT=6",
            recurring: 5,
        },
    ]
}

#[test_log::test]
fn generated_dates_match_rrule_expansion() {
    for case in cases() {
        let rrule_set: RRuleSet = case
            .rruleset
            .parse()
            .unwrap_or_else(|err| panic!("Failed to parse {}: {}", case.name, err));
        let expected: Vec<NaiveDate> = rrule_set
            .all(u16::MAX)
            .dates
            .iter()
            .map(chrono::DateTime::date_naive)
            .collect();

        let actual: Vec<NaiveDate> = generate(&case.rule, case.recurring)
            .iter()
            .map(|occurrence| occurrence.date)
            .collect();

        assert_eq!(actual, expected, "Case {} did not match", case.name);
    }
}
