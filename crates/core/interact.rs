use dialoguer::Input;
use eyre::{eyre, Context, Result};

pub fn user_input(prompt: String) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}

/// Prompts for the search language, defaulting to English on an empty answer.
pub fn user_language_input() -> Result<String> {
    let language: String = Input::new()
        .with_prompt("Enter the language (leave empty for English)")
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))?;

    if language.is_empty() {
        Ok("en".to_owned())
    } else {
        Ok(language)
    }
}
