mod execute;

/// Menu 3: ask for an appointment's details and add it to the database.
///
/// The status code is passed through unchecked; the schema's domain
/// constraint decides whether it is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddAppointment;
