use crate::LeaveStatus;

use std::str::FromStr;

#[test]
fn test_leave_status_as_str() {
    assert_eq!(LeaveStatus::Pending.as_str(), "pending");
    assert_eq!(LeaveStatus::Approved.as_str(), "approved");
    assert_eq!(LeaveStatus::Rejected.as_str(), "rejected");
}

#[test]
fn test_leave_status_from_str() {
    assert_eq!(
        LeaveStatus::from_str("pending").unwrap(),
        LeaveStatus::Pending
    );
    assert_eq!(
        LeaveStatus::from_str("approved").unwrap(),
        LeaveStatus::Approved
    );
    assert_eq!(
        LeaveStatus::from_str("rejected").unwrap(),
        LeaveStatus::Rejected
    );
    assert!(LeaveStatus::from_str("cancelled").is_err());
}
