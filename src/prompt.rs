//! Interactive file selection.
//!
//! The converters take no CLI flags; both paths are asked for on the
//! terminal. An empty answer at either prompt means the user cancelled.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Ask for the input JSON path. `None` means the user cancelled.
pub fn select_input_file(prompt: &str) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    let path = PathBuf::from(answer);
    if !path.exists() {
        return Err(format!("Input file does not exist: {answer}").into());
    }
    Ok(Some(path))
}

/// Ask where to save the spreadsheet. `None` means the save was cancelled.
/// A missing extension defaults to `.xlsx`.
pub fn select_output_file(prompt: &str) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    Ok(Some(default_xlsx_extension(Path::new(answer))))
}

fn default_xlsx_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(_) => path.to_path_buf(),
        None => path.with_extension("xlsx"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_xlsx_extension() {
        assert_eq!(
            default_xlsx_extension(Path::new("report")),
            PathBuf::from("report.xlsx")
        );
        assert_eq!(
            default_xlsx_extension(Path::new("report.xlsx")),
            PathBuf::from("report.xlsx")
        );
        assert_eq!(
            default_xlsx_extension(Path::new("out/report.XLSX")),
            PathBuf::from("out/report.XLSX")
        );
    }
}
