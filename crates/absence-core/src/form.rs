//! Form state for the absence message.
//!
//! The form is a flat record of six string fields. Completeness is never
//! stored: it is derived from the field values every time it is asked for,
//! so it can't drift out of sync with an edit.

use enum_map::{Enum, EnumMap};

/// One named slot in the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Field {
    TimeOfDay,
    Salutation,
    Subject,
    Reason,
    Name,
    RollNo,
}

impl Field {
    /// All fields in display (and focus) order.
    pub const ALL: [Field; 6] = [
        Field::TimeOfDay,
        Field::Salutation,
        Field::Subject,
        Field::Reason,
        Field::Name,
        Field::RollNo,
    ];

    /// Stable camelCase identifier, used when reporting missing fields.
    pub fn id(self) -> &'static str {
        match self {
            Field::TimeOfDay => "timeOfDay",
            Field::Salutation => "salutation",
            Field::Subject => "subject",
            Field::Reason => "reason",
            Field::Name => "name",
            Field::RollNo => "rollNo",
        }
    }

    /// Placeholder shown while the field is unset.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::TimeOfDay => "morning/afternoon/evening",
            Field::Salutation => "ma'am/sir",
            Field::Subject => "subject",
            Field::Reason => "reason",
            Field::Name => "name",
            Field::RollNo => "roll no",
        }
    }

    /// Fixed options for selector fields, `None` for free text.
    pub fn choices(self) -> Option<&'static [&'static str]> {
        match self {
            Field::TimeOfDay => Some(&TimeOfDay::LABELS),
            Field::Salutation => Some(&Salutation::LABELS),
            Field::Subject | Field::Reason | Field::Name | Field::RollNo => None,
        }
    }

    pub fn is_choice(self) -> bool {
        self.choices().is_some()
    }

    pub fn next(self) -> Field {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Field {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Options for the `timeOfDay` selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];
    const LABELS: [&'static str; 3] = [
        Self::ALL[0].as_str(),
        Self::ALL[1].as_str(),
        Self::ALL[2].as_str(),
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

/// Options for the `salutation` selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Salutation {
    Maam,
    Sir,
}

impl Salutation {
    pub const ALL: [Salutation; 2] = [Salutation::Maam, Salutation::Sir];
    const LABELS: [&'static str; 2] = [Self::ALL[0].as_str(), Self::ALL[1].as_str()];

    pub const fn as_str(self) -> &'static str {
        match self {
            Salutation::Maam => "ma'am",
            Salutation::Sir => "sir",
        }
    }
}

/// The six field values. Any string is accepted for any field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: EnumMap<Field, String>,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field]
    }

    /// A field is set iff its trimmed value is non-empty.
    pub fn is_set(&self, field: Field) -> bool {
        !self.values[field].trim().is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.values.values().all(|value| !value.trim().is_empty())
    }

    /// Unset fields in display order.
    pub fn missing_fields(&self) -> Vec<Field> {
        self.values
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values[field] = value.into();
        self
    }
}

/// Single-session form state, mutated field by field by user input.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    data: FormData,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field` to `value` unconditionally.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(field = %field, len = value.len(), "field updated");
        self.data.values[field] = value;
    }

    pub fn get(&self, field: Field) -> &str {
        self.data.get(field)
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn is_complete(&self) -> bool {
        self.data.is_complete()
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        self.data.missing_fields()
    }

    /// Appends a character to a field.
    pub fn push_char(&mut self, field: Field, c: char) {
        let mut value = self.get(field).to_string();
        value.push(c);
        self.update(field, value);
    }

    /// Removes the last character of a field, if any.
    pub fn pop_char(&mut self, field: Field) {
        let mut value = self.get(field).to_string();
        if value.pop().is_some() {
            self.update(field, value);
        }
    }

    /// Appends pasted text to a field. Newlines collapse to spaces since every
    /// field is a single line in the template.
    pub fn insert_str(&mut self, field: Field, text: &str) {
        let cleaned: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        let mut value = self.get(field).to_string();
        value.push_str(&cleaned);
        self.update(field, value);
    }

    /// Moves a selector field to the next/previous option.
    ///
    /// An unset (or off-list) value moves to the first option going forward
    /// and the last going backward. Free-text fields are left untouched.
    pub fn cycle_choice(&mut self, field: Field, forward: bool) {
        let Some(choices) = field.choices() else {
            return;
        };
        let current = choices.iter().position(|c| *c == self.get(field));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % choices.len(),
            (Some(i), false) => (i + choices.len() - 1) % choices.len(),
            (None, true) => 0,
            (None, false) => choices.len() - 1,
        };
        self.update(field, choices[next]);
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        self.data = FormData::default();
    }
}
