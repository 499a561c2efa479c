mod execute;

/// Menu 8: for one appointment status, count distinct patients per doctor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatientCounts;
