mod execute;

/// Menu 10: list the maintenance requests raised for a doctor, looked up by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoctorRequests;
