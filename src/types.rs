//! Closed code sets stored in the schema, and the booking transition table.

/// Patient gender code (`gtype` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "Other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Appointment status code (`status` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// `AC`: booked.
    Active,
    /// `AV`: open for booking.
    Available,
    /// `WL`: booked, further patients wait.
    Waitlisted,
    /// `PA`: in the past.
    Past,
}

impl AppointmentStatus {
    pub fn code(self) -> &'static str {
        match self {
            AppointmentStatus::Active => "AC",
            AppointmentStatus::Available => "AV",
            AppointmentStatus::Waitlisted => "WL",
            AppointmentStatus::Past => "PA",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AC" => Some(AppointmentStatus::Active),
            "AV" => Some(AppointmentStatus::Available),
            "WL" => Some(AppointmentStatus::Waitlisted),
            "PA" => Some(AppointmentStatus::Past),
            _ => None,
        }
    }

    /// What booking a patient into an appointment in this status does.
    ///
    /// `PA` is absorbing. The other three keep accepting bookings, and the
    /// overflow goes to the waitlist.
    pub fn book(self) -> Booking {
        let (to, counts_booking) = match self {
            AppointmentStatus::Available => (AppointmentStatus::Active, true),
            AppointmentStatus::Active => (AppointmentStatus::Waitlisted, true),
            AppointmentStatus::Waitlisted => (AppointmentStatus::Waitlisted, true),
            AppointmentStatus::Past => (AppointmentStatus::Past, false),
        };
        Booking {
            from: self,
            to,
            counts_booking,
        }
    }
}

/// Outcome of one booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub from: AppointmentStatus,
    pub to: AppointmentStatus,
    /// Whether the patient's `number_of_appts` goes up by one.
    pub counts_booking: bool,
}

impl Booking {
    pub fn changes_status(&self) -> bool {
        self.from != self.to
    }

    pub fn confirmation(&self) -> &'static str {
        match self.from {
            AppointmentStatus::Available => "We successfully put you into the appointment (moved AV→AC).",
            AppointmentStatus::Active => "We successfully put you on the waitlist (moved AC→WL).",
            AppointmentStatus::Waitlisted => "We have added you to the waitlist of this appointment.",
            AppointmentStatus::Past => "We are sorry, the appointment you want to book is already past.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppointmentStatus::Available, AppointmentStatus::Active, true)]
    #[case(AppointmentStatus::Active, AppointmentStatus::Waitlisted, true)]
    #[case(AppointmentStatus::Waitlisted, AppointmentStatus::Waitlisted, true)]
    #[case(AppointmentStatus::Past, AppointmentStatus::Past, false)]
    fn test_booking_transition_table(
        #[case] from: AppointmentStatus,
        #[case] to: AppointmentStatus,
        #[case] counts_booking: bool,
    ) {
        assert_eq!(
            from.book(),
            Booking {
                from,
                to,
                counts_booking,
            }
        );
    }

    #[rstest]
    fn test_only_av_and_ac_change_status() {
        assert!(AppointmentStatus::Available.book().changes_status());
        assert!(AppointmentStatus::Active.book().changes_status());
        assert!(!AppointmentStatus::Waitlisted.book().changes_status());
        assert!(!AppointmentStatus::Past.book().changes_status());
    }

    #[rstest]
    fn test_past_is_absorbing() {
        let mut status = AppointmentStatus::Past;
        for _ in 0..3 {
            status = status.book().to;
        }
        assert_eq!(status, AppointmentStatus::Past);
    }

    #[rstest]
    #[case("AC")]
    #[case("AV")]
    #[case("WL")]
    #[case("PA")]
    fn test_status_code_round_trip(#[case] code: &str) {
        assert_eq!(AppointmentStatus::from_code(code).map(|s| s.code()), Some(code));
    }

    #[rstest]
    fn test_gender_codes() {
        assert_eq!(Gender::from_code("Other"), Some(Gender::Other));
        assert_eq!(Gender::Female.code(), "F");
        assert_eq!(Gender::from_code("X"), None);
    }
}
