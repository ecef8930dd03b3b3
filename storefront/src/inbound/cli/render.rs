//! Text rendering of derived screen state.

use std::io::{self, Write};

use crate::config::LogFormat;
use crate::domain::{CatalogQuery, Category, MenuRecord, StoredProfile};

use super::CliError;

/// Shown when the filter leaves nothing visible.
pub const EMPTY_MENU_MESSAGE: &str = "No items";

/// Render the category buttons, marking the selected one with brackets.
pub fn render_categories(out: &mut impl Write, query: &CatalogQuery) -> io::Result<()> {
    let buttons: Vec<String> = Category::ALL
        .iter()
        .map(|category| {
            if query.selected_category() == Some(*category) {
                format!("[{category}]")
            } else {
                category.to_string()
            }
        })
        .collect();
    writeln!(out, "{}", buttons.join(" "))
}

/// Render the visible items, one block per record, or [`EMPTY_MENU_MESSAGE`].
pub fn render_menu(out: &mut impl Write, items: &[&MenuRecord]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "{EMPTY_MENU_MESSAGE}");
    }
    for item in items {
        writeln!(out, "{} {}", item.title(), item.price())?;
        if !item.description().is_empty() {
            writeln!(out, "    {}", item.description())?;
        }
    }
    Ok(())
}

pub fn render_profile(out: &mut impl Write, profile: Option<&StoredProfile>) -> io::Result<()> {
    let Some(profile) = profile else {
        return writeln!(out, "No profile stored");
    };
    writeln!(out, "First name: {}", profile.first_name)?;
    writeln!(out, "Last name: {}", profile.last_name)?;
    writeln!(out, "Email: {}", profile.email)
}

/// Report a failed command.
///
/// With JSON output a rejected session request is written as its
/// [`crate::domain::Feedback`] payload on one line; everything else is
/// written as plain text.
pub fn render_failure(out: &mut impl Write, error: &CliError, format: LogFormat) -> io::Result<()> {
    match (format, error.feedback()) {
        (LogFormat::Json, Some(feedback)) => {
            let payload = serde_json::to_string(feedback).map_err(io::Error::other)?;
            writeln!(out, "{payload}")
        }
        _ => writeln!(out, "{error}"),
    }
}
