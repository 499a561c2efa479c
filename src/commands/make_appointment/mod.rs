mod execute;

/// Menu 4: book a patient into one of a doctor's appointments.
///
/// Unknown patients are created on the spot with the Add Patient prompts.
/// Unknown doctors and appointments abandon the booking. The status change
/// and the patient's booking counter are applied in one transaction:
///
/// | current | becomes | counter |
/// |---------|---------|---------|
/// | `AV`    | `AC`    | +1      |
/// | `AC`    | `WL`    | +1      |
/// | `WL`    | `WL`    | +1      |
/// | `PA`    | `PA`    | -       |
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeAppointment;
