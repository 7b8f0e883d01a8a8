use anyhow::Context;

/// Ask the user to pick one of `items`; Escape or `q` cancels.
pub(crate) fn select_action<T: Copy + ToString>(
    prompt: &str,
    items: &[T],
) -> Result<T, crate::ProgError> {
    let selection = dialoguer::Select::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .context("failed to query your selection")?
        .ok_or(crate::ProgError::Cancelled)?;

    Ok(items[selection])
}
