use absence_core::form::Field;

/// What currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    CopyButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::TimeOfDay)
    }
}

impl Focus {
    /// Fields in display order, then the copy button, wrapping around.
    pub fn next(self) -> Focus {
        match self {
            Focus::Field(Field::RollNo) => Focus::CopyButton,
            Focus::Field(field) => Focus::Field(field.next()),
            Focus::CopyButton => Focus::Field(Field::TimeOfDay),
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Field(Field::TimeOfDay) => Focus::CopyButton,
            Focus::Field(field) => Focus::Field(field.prev()),
            Focus::CopyButton => Focus::Field(Field::RollNo),
        }
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::CopyButton => None,
        }
    }
}
