/// Job positions recognized by the verification service.
///
/// Entries keep their position as free text (an unknown label is reported
/// back as invalid by the service), this enum is the catalogue offered to the
/// user when editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    BackOffice,
    IsftAssistant,
    IsftLead,
    Pss,
    SpecialEvent,
    SummerManager,
    SummerTeacher,
    TeacherAssistant,
    TeacherLead,
    TeacherOnlineClass,
}

impl Position {
    pub const ALL: [Position; 10] = [
        Position::BackOffice,
        Position::IsftAssistant,
        Position::IsftLead,
        Position::Pss,
        Position::SpecialEvent,
        Position::SummerManager,
        Position::SummerTeacher,
        Position::TeacherAssistant,
        Position::TeacherLead,
        Position::TeacherOnlineClass,
    ];

    /// Label as written in spreadsheets and sent on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Position::BackOffice => "Back Office",
            Position::IsftAssistant => "ISFT Assistant",
            Position::IsftLead => "ISFT Lead",
            Position::Pss => "PSS",
            Position::SpecialEvent => "Special Event",
            Position::SummerManager => "Summer Manager",
            Position::SummerTeacher => "Summer Teacher",
            Position::TeacherAssistant => "Teacher - Assistant",
            Position::TeacherLead => "Teacher - Lead",
            Position::TeacherOnlineClass => "Teacher - Online Class",
        }
    }

    /// Exact label lookup.
    pub fn from_label(s: &str) -> Option<Self> {
        Position::ALL.into_iter().find(|p| p.label() == s)
    }

    pub fn is_recognized(s: &str) -> bool {
        Position::from_label(s).is_some()
    }
}
