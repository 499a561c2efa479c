mod execute;

/// Menu 12: show who runs an appointment, when, and in which department.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentDetails;
