use super::*;

fn leave(start: &str, end: &str) -> LeaveRecord {
    LeaveRecord {
        id: 1,
        user_name: None,
        leave_type: Some("Casual".to_owned()),
        start_date: start.to_owned(),
        end_date: end.to_owned(),
        reason: None,
        status: LeaveStatus::Pending,
        approved_by_role: None,
    }
}

#[test]
fn duration_label_counts_inclusive_days() {
    assert_eq!(duration_label(&leave("2025-03-10", "2025-03-10")), "1 day");
    assert_eq!(duration_label(&leave("2025-03-10", "2025-03-12")), "3 days");
}

#[test]
fn duration_label_marks_unusable_ranges() {
    assert_eq!(duration_label(&leave("2025-03-12", "2025-03-10")), "-");
    assert_eq!(duration_label(&leave("soon", "2025-03-10")), "-");
}

#[test]
fn status_class_is_distinct_per_status() {
    let classes = [
        status_class(LeaveStatus::Pending),
        status_class(LeaveStatus::Approved),
        status_class(LeaveStatus::Rejected),
        status_class(LeaveStatus::Cancelled),
    ];
    for (i, a) in classes.iter().enumerate() {
        assert!(a.starts_with("status "));
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
