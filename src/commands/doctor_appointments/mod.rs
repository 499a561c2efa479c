mod execute;

/// Menu 5: list a doctor's active and available appointments between two
/// dates, both ends included.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoctorAppointments;
