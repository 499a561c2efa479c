mod execute;

pub(crate) use execute::create_patient;

/// Menu 2: ask for a patient's details and add the patient to the database.
///
/// Also run inline by [`MakeAppointment`](super::MakeAppointment) when the
/// patient being booked does not exist yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddPatient;
