mod execute;

/// Menu 11: list the departments of a hospital, looked up by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct HospitalDepartments;
