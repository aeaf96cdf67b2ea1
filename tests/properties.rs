//! Property tests for the record model and store.

use proptest::prelude::*;
use rust_decimal::Decimal;

use campus_records::models::{
    FullTimeEmployee, PASS_MARK, PartTimeEmployee, Person, Record, Salaried, Student,
};
use campus_records::store::RecordStore;

/// Positive amounts with up to two decimal places.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn any_record() -> impl Strategy<Value = Record> {
    prop_oneof![
        (any::<i32>(), 0.0f64..=100.0).prop_map(|(id, grade)| {
            Record::from(Student::new("Student", id, "CS101", grade).unwrap())
        }),
        (any::<i32>(), positive_amount()).prop_map(|(id, salary)| {
            Record::from(FullTimeEmployee::new("Full", id, salary).unwrap())
        }),
        (any::<i32>(), positive_amount(), 1u32..10_000).prop_map(|(id, rate, hours)| {
            Record::from(PartTimeEmployee::new("Part", id, rate, hours).unwrap())
        }),
    ]
}

proptest! {
    #[test]
    fn pass_iff_grade_at_least_fifty(grade in 0.0f64..=100.0) {
        let student = Student::new("Student", 1, "CS101", grade).unwrap();
        prop_assert_eq!(student.is_pass(), grade >= PASS_MARK);
    }

    #[test]
    fn grades_outside_range_are_rejected(grade in prop_oneof![-1.0e6f64..-0.0001, 100.0001f64..1.0e6]) {
        prop_assert!(Student::new("Student", 1, "CS101", grade).is_err());
    }

    #[test]
    fn full_time_salary_is_exactly_monthly_salary(salary in positive_amount()) {
        let employee = FullTimeEmployee::new("Full", 1, salary).unwrap();
        prop_assert_eq!(employee.calculate_salary(), salary);
    }

    #[test]
    fn part_time_salary_is_rate_times_hours(rate in positive_amount(), hours in 1u32..10_000) {
        let employee = PartTimeEmployee::new("Part", 1, rate, hours).unwrap();
        prop_assert_eq!(employee.calculate_salary(), rate * Decimal::from(hours));
    }

    #[test]
    fn iteration_preserves_insertion_order(records in prop::collection::vec(any_record(), 0..50)) {
        let mut store = RecordStore::new();
        for record in records.clone() {
            store.append(record);
        }

        prop_assert_eq!(store.len(), records.len());
        let stored: Vec<&Record> = store.iter().collect();
        let expected: Vec<&Record> = records.iter().collect();
        prop_assert_eq!(stored, expected);

        // A second traversal starts again from the beginning.
        let ids: Vec<i32> = store.iter().map(|r| r.id()).collect();
        let expected_ids: Vec<i32> = records.iter().map(|r| r.id()).collect();
        prop_assert_eq!(ids, expected_ids);
    }

    #[test]
    fn is_empty_iff_nothing_appended(records in prop::collection::vec(any_record(), 0..10)) {
        let mut store = RecordStore::new();
        prop_assert!(store.is_empty());

        let mut appended = 0;
        for record in records {
            store.append(record);
            appended += 1;
            prop_assert!(!store.is_empty());
        }
        prop_assert_eq!(store.is_empty(), appended == 0);
    }
}
