//! The interactive menu loop.
//!
//! Shows the numbered menu, reads a choice and runs the matching action until
//! the user exits or input ends. An action that fails is reported on the
//! error stream and the menu comes back; nothing the action already did is
//! undone here.

use std::io;

use tracing::{debug, info};

use super::{
    ActionError, AddAppointment, AddDoctor, AddPatient, AppointmentCounts, AppointmentDetails,
    AvailableAppointments, DoctorAppointments, DoctorRequests, Execute, HospitalDepartments,
    MakeAppointment, PatientCounts, StaffRequests,
};
use crate::console::Console;
use crate::db::DatabaseBackend;

const BANNER: &[&str] = &[
    "",
    "",
    "*******************************************************************************",
    "                 Welcome to your Hospital Database management System!     ",
    "***********************************************************************************",
    "",
    "",
    "--------------------------Welcome to---------------------------",
    "---------------------------------------------------------------",
    " 88                                88                    88    ",
    " 88                                     88               88    ",
    " 88,dba,  ,adba,   ,adba  888888,  88 MM88MMM  ,aPYba,   88    ",
    " 88   88 8b    d8 88      88    ad 88   8P     88   88   88    ",
    " 88   88 8b    88  ,8888, 88   ad  88   8P    88     88  88    ",
    " 88   88 8b    d8      88 88aad    88   8P P   88    88  88    ",
    " 88   88  `YbdP'  aadba,  88       88   8PP     'aPY' 8P 88888 ",
    "                          88                                   ",
    "                          88                                   ",
    "---------------------------------------------------------------",
    "",
];

/// One entry of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddDoctor,
    AddPatient,
    AddAppointment,
    MakeAppointment,
    DoctorAppointments,
    AvailableAppointments,
    AppointmentCounts,
    PatientCounts,
    StaffRequests,
    DoctorRequests,
    HospitalDepartments,
    AppointmentDetails,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 13] = [
        MenuAction::AddDoctor,
        MenuAction::AddPatient,
        MenuAction::AddAppointment,
        MenuAction::MakeAppointment,
        MenuAction::DoctorAppointments,
        MenuAction::AvailableAppointments,
        MenuAction::AppointmentCounts,
        MenuAction::PatientCounts,
        MenuAction::StaffRequests,
        MenuAction::DoctorRequests,
        MenuAction::HospitalDepartments,
        MenuAction::AppointmentDetails,
        MenuAction::Exit,
    ];

    /// Map a menu number (1-based) to its entry.
    pub fn from_choice(choice: i64) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|action| *action == self).unwrap_or(0) + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddDoctor => "Add Doctor",
            MenuAction::AddPatient => "Add Patient",
            MenuAction::AddAppointment => "Add Appointment",
            MenuAction::MakeAppointment => "Make an Appointment",
            MenuAction::DoctorAppointments => "List appointments of a given doctor",
            MenuAction::AvailableAppointments => "List all available appointments of a given department",
            MenuAction::AppointmentCounts => {
                "List total number of different types of appointments per doctor in descending order"
            }
            MenuAction::PatientCounts => "Find total number of patients per doctor with a given status",
            MenuAction::StaffRequests => "List maintenance requests of a given staff member",
            MenuAction::DoctorRequests => "List maintenance requests of a given doctor",
            MenuAction::HospitalDepartments => "List departments of a given hospital",
            MenuAction::AppointmentDetails => "Show details of a given appointment",
            MenuAction::Exit => "< EXIT",
        }
    }

    /// Run the action behind this entry. `Exit` does nothing.
    pub fn run(self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        match self {
            MenuAction::AddDoctor => AddDoctor.execute(db, console),
            MenuAction::AddPatient => AddPatient.execute(db, console),
            MenuAction::AddAppointment => AddAppointment.execute(db, console),
            MenuAction::MakeAppointment => MakeAppointment.execute(db, console),
            MenuAction::DoctorAppointments => DoctorAppointments.execute(db, console),
            MenuAction::AvailableAppointments => AvailableAppointments.execute(db, console),
            MenuAction::AppointmentCounts => AppointmentCounts.execute(db, console),
            MenuAction::PatientCounts => PatientCounts.execute(db, console),
            MenuAction::StaffRequests => StaffRequests.execute(db, console),
            MenuAction::DoctorRequests => DoctorRequests.execute(db, console),
            MenuAction::HospitalDepartments => HospitalDepartments.execute(db, console),
            MenuAction::AppointmentDetails => AppointmentDetails.execute(db, console),
            MenuAction::Exit => Ok(()),
        }
    }
}

pub fn print_banner(console: &mut Console<'_>) -> io::Result<()> {
    for line in BANNER {
        console.say(line)?;
    }
    Ok(())
}

fn print_menu(console: &mut Console<'_>) -> io::Result<()> {
    console.say("MAIN MENU")?;
    console.say("---------")?;
    for action in MenuAction::ALL {
        console.say(&format!("{}. {}", action.number(), action.label()))?;
    }
    Ok(())
}

/// Run the menu until the user picks exit or input runs out.
///
/// Only terminal I/O failures escape; action errors are reported and the
/// loop goes on.
pub fn run_menu(db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> io::Result<()> {
    print_banner(console)?;
    loop {
        print_menu(console)?;
        let Some(choice) = console.read_choice()? else {
            info!("input closed at the menu prompt");
            return Ok(());
        };
        let Some(action) = MenuAction::from_choice(choice) else {
            console.say(&format!("Unrecognized choice {}, please pick 1-{}", choice, MenuAction::ALL.len()))?;
            continue;
        };
        if action == MenuAction::Exit {
            return Ok(());
        }

        debug!(choice, action = action.label(), "running menu action");
        match action.run(db, console) {
            Ok(()) => {}
            Err(ActionError::InputClosed) => {
                info!("input closed during an action");
                return Ok(());
            }
            Err(ActionError::Io(err)) => return Err(err),
            Err(err) => console.report(&err.to_string())?,
        }
    }
}
