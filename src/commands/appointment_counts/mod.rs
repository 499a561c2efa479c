mod execute;

/// Menu 7: count appointments per doctor and status, largest count first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentCounts;
