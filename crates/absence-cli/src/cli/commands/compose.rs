//! Non-interactive message composition.

use absence_core::clipboard::{Clipboard, SystemClipboard};
use absence_core::config::Config;
use absence_core::export::{ClipboardExporter, NotificationKind};
use absence_core::form::{Field, FormData, Salutation, TimeOfDay};
use absence_core::message;
use anyhow::Result;

/// `--time-of-day` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TimeOfDayArg {
    Morning,
    Afternoon,
    Evening,
}

impl From<TimeOfDayArg> for TimeOfDay {
    fn from(arg: TimeOfDayArg) -> Self {
        match arg {
            TimeOfDayArg::Morning => TimeOfDay::Morning,
            TimeOfDayArg::Afternoon => TimeOfDay::Afternoon,
            TimeOfDayArg::Evening => TimeOfDay::Evening,
        }
    }
}

/// `--salutation` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SalutationArg {
    #[value(name = "ma'am", alias = "maam")]
    Maam,
    Sir,
}

impl From<SalutationArg> for Salutation {
    fn from(arg: SalutationArg) -> Self {
        match arg {
            SalutationArg::Maam => Salutation::Maam,
            SalutationArg::Sir => Salutation::Sir,
        }
    }
}

pub struct ComposeOptions {
    pub time_of_day: Option<TimeOfDayArg>,
    pub salutation: Option<SalutationArg>,
    pub subject: Option<String>,
    pub reason: Option<String>,
    pub name: Option<String>,
    pub roll_no: Option<String>,
    pub copy: bool,
    pub preview: bool,
}

impl ComposeOptions {
    fn form_data(&self) -> FormData {
        let mut data = FormData::default();
        if let Some(t) = self.time_of_day {
            data = data.with(Field::TimeOfDay, TimeOfDay::from(t).as_str());
        }
        if let Some(s) = self.salutation {
            data = data.with(Field::Salutation, Salutation::from(s).as_str());
        }
        for (field, value) in [
            (Field::Subject, &self.subject),
            (Field::Reason, &self.reason),
            (Field::Name, &self.name),
            (Field::RollNo, &self.roll_no),
        ] {
            if let Some(value) = value {
                data = data.with(field, value.as_str());
            }
        }
        data
    }
}

pub fn run(opts: &ComposeOptions, config: &Config) -> Result<()> {
    let data = opts.form_data();

    if opts.preview {
        println!("{}", message::preview(&data));
        return Ok(());
    }

    let text = message::compose(&data)?;
    println!("{text}");

    if opts.copy {
        let notice = copy_message(&SystemClipboard::new(config.clipboard), &text)?;
        eprintln!("{notice}");
    }

    Ok(())
}

/// Copies `text` and returns the success line for stderr.
///
/// A failed write is an error so the process exits non-zero.
fn copy_message(clipboard: &dyn Clipboard, text: &str) -> Result<String> {
    let mut exporter = ClipboardExporter::new();
    let Some(outcome) = exporter.export_with(clipboard, text) else {
        anyhow::bail!("clipboard export did not run");
    };
    let notification = outcome.notification;
    match notification.kind {
        NotificationKind::Success => Ok(format!("✓ {}", notification.message)),
        NotificationKind::Error => anyhow::bail!("{}", notification.message),
    }
}
