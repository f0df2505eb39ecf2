//! Colored terminal rendering for tripcheck types.

use owo_colors::OwoColorize;
use tripcheck_core::date::{format_date, format_date_range};
use tripcheck_core::{Conflict, Holiday, Trip};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Trip {
    fn render(&self) -> String {
        let dates = match (self.start(), self.end()) {
            (Ok(start), Ok(end)) => format_date_range(start, end),
            _ => format!("{} - {}", self.start_date, self.end_date),
        };

        let mut line = format!(
            "{} {} {}",
            self.title.bold(),
            format!("@ {}", self.destination).cyan(),
            dates.dimmed()
        );
        if let Some(description) = &self.description {
            line.push_str(&format!("\n   {}", description.dimmed()));
        }
        line
    }
}

impl Render for Holiday {
    fn render(&self) -> String {
        let date = match self.date() {
            Ok(date) => format_date(date),
            Err(_) => self.date.clone(),
        };

        let mut line = format!("{} {}", date.dimmed(), self.name);
        if self.local_name != self.name {
            line.push_str(&format!(" {}", format!("({})", self.local_name).dimmed()));
        }
        if !self.global {
            if let Some(counties) = &self.counties {
                line.push_str(&format!(" {}", format!("[{}]", counties.join(", ")).yellow()));
            }
        }
        line
    }
}

impl Render for Conflict {
    fn render(&self) -> String {
        let count = self.conflicting_holidays.len();
        let mut lines = vec![
            self.trip.render(),
            format!("   Conflicting holidays ({count}):").red().to_string(),
        ];
        lines.extend(
            self.conflicting_holidays
                .iter()
                .map(|h| format!("   {} {}", "!".red(), h.render())),
        );
        lines.join("\n")
    }
}

/// Header for a conflict list, or the all-clear message.
pub fn render_conflict_summary(conflicts: &[Conflict]) -> String {
    if conflicts.is_empty() {
        return format!(
            "{}\n{}",
            "No Conflicts Found!".green().bold(),
            "Your trips don't overlap with any public holidays in the selected country.".green()
        );
    }

    let n = conflicts.len();
    format!(
        "{}\n{}",
        format!("{n} {} with Holiday Conflicts", pluralize("Trip", n)).red().bold(),
        "The following trips overlap with public holidays. Consider adjusting your travel dates."
            .red()
    )
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
