//! Interactive prompts

use dialoguer::{theme::ColorfulTheme, Password};

use crate::error::{BigipError, Result};

/// Prompt for a password with hidden input
///
/// In batch mode no prompt is shown and an error explains which flag to pass.
pub fn prompt_password(context_name: &str, batch: bool) -> Result<String> {
    if batch {
        return Err(BigipError::Validation(format!(
            "--password is required for context '{}' in batch mode",
            context_name
        )));
    }

    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Password for context '{}'", context_name))
        .interact()?;
    Ok(password)
}
