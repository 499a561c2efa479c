mod execute;

/// Menu 9: list the maintenance requests handled by one staff member.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffRequests;
