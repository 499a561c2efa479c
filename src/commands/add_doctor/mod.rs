mod execute;

/// Menu 1: ask for a doctor's details and add the doctor to the database.
///
/// Prompts: doctor id, name, specialty, department id. Prints the stored row.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddDoctor;
