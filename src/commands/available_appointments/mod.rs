mod execute;

/// Menu 6: list the distinct available appointments of a department on one date.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailableAppointments;
