//! Menu choices

/// Menu banner shown before every choice prompt
pub const BANNER: &str = "\n===== Attendance Management System =====\n\
                          1. Add a new student\n\
                          2. Add a subject to a student\n\
                          3. Mark attendance\n\
                          4. Get attendance for a student\n\
                          5. Display all students\n\
                          0. Exit";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: register a student
    AddStudent,
    /// 2: enroll a student in a subject
    AddSubject,
    /// 3: record attendance
    MarkAttendance,
    /// 4: query attendance
    GetAttendance,
    /// 5: list every student
    DisplayAll,
    /// 0: leave the menu
    Exit,
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(1) => Ok(Self::AddStudent),
            Ok(2) => Ok(Self::AddSubject),
            Ok(3) => Ok(Self::MarkAttendance),
            Ok(4) => Ok(Self::GetAttendance),
            Ok(5) => Ok(Self::DisplayAll),
            Ok(0) => Ok(Self::Exit),
            _ => Err(format!("Invalid choice: {}", s.trim())),
        }
    }
}
