use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::run::ExportSettings;

pub(crate) fn summary_lines(settings: &ExportSettings) -> Vec<String> {
    vec![
        "===== Your Configuration =====".to_string(),
        format!("QUERY: {}", settings.query),
        format!("LOCATION: {}", settings.location),
        format!("PAGES: {}", settings.pages),
        format!("OUTPUT: {}", settings.output.display()),
    ]
}

pub(crate) fn print_summary(settings: &ExportSettings) {
    for line in summary_lines(settings) {
        println!("{line}");
    }
}

/// Asks the operator to confirm before any billable API call is made.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read (e.g. stdin is not a TTY);
/// pass `--yes` in non-interactive environments.
pub(crate) fn confirm_charges() -> anyhow::Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Do you want to continue? This may incur charges on your GCP account.")
        .default(false)
        .interact()?)
}
