//! Message template rendering.

use thiserror::Error;

use crate::form::{Field, FormData};

/// Returned when composing from a form with unset fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("form is incomplete, missing: {}", display_fields(.missing))]
pub struct IncompleteFormError {
    pub missing: Vec<Field>,
}

fn display_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.id())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the absence message.
///
/// Field values are inserted verbatim; the only transformation is the
/// capitalized salutation opening the second paragraph.
pub fn compose(data: &FormData) -> Result<String, IncompleteFormError> {
    if !data.is_complete() {
        return Err(IncompleteFormError {
            missing: data.missing_fields(),
        });
    }
    Ok(render(|field| data.get(field).to_string()))
}

/// Renders the template with unset fields shown as `[placeholder]`.
///
/// Display only, the export path always goes through [`compose`].
pub fn preview(data: &FormData) -> String {
    render(|field| {
        if data.is_set(field) {
            data.get(field).to_string()
        } else {
            format!("[{}]", field.placeholder())
        }
    })
}

fn render(value: impl Fn(Field) -> String) -> String {
    let salutation = value(Field::Salutation);
    format!(
        "Good {} {}.\n\n\
         {} I was unable to attend today's {} class as {}.\n\n\
         Humbly request you to please mark my attendance for the same.\n\n\
         Best regards\n\
         {}\n\
         {}",
        value(Field::TimeOfDay),
        salutation,
        capitalize_first(&salutation),
        value(Field::Subject),
        value(Field::Reason),
        value(Field::Name),
        value(Field::RollNo),
    )
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
