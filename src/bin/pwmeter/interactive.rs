//! The interactive password form.

use std::fmt;

use anyhow::Context;
use console::{Key, Term};
use pwmeter::{ClickTarget, ElementId, Modal, PasswordForm};

use crate::meter::summary_line;
use crate::select::select_action;
use crate::ProgError;

#[derive(Clone, Copy)]
enum Action {
    Edit,
    Toggle(&'static str),
    Generate,
    Clear,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Edit => f.write_str("Edit password"),
            Action::Toggle(label) => write!(f, "{label} password"),
            Action::Generate => f.write_str("Generate password"),
            Action::Clear => f.write_str("Clear"),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

pub(crate) fn run_form(config: &pwmeter::Config) -> Result<(), ProgError> {
    let mut form = PasswordForm::new(config.generator()?);
    let mut modal = Modal::new();
    let mut rng = rand::thread_rng();
    let term = Term::stderr();

    loop {
        term.write_line(&format!(
            "Password: {}  {}",
            form.field().display(),
            summary_line(form.assessment())
        ))
        .context("failed to write to the terminal")?;

        let actions = [
            Action::Edit,
            Action::Toggle(form.toggle().label()),
            Action::Generate,
            Action::Clear,
            Action::Quit,
        ];
        let action = match select_action("What next?", &actions) {
            Ok(action) => action,
            Err(ProgError::Cancelled) => break,
            Err(err) => return Err(err),
        };
        match action {
            Action::Edit => edit_candidate(&term, &mut form)?,
            Action::Toggle(_) => {
                form.click(ElementId::ToggleShow, &mut rng);
            }
            Action::Generate => {
                form.click(ElementId::GenerateBtn, &mut rng);
            }
            Action::Clear => confirm_clear(&mut form, &mut modal)?,
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Read the candidate a key at a time, rescoring and redrawing after each key.
fn edit_candidate(term: &Term, form: &mut PasswordForm) -> anyhow::Result<()> {
    let mut value = form.field().value().as_str().to_owned();
    loop {
        term.clear_line()?;
        term.write_str(&format!(
            "Password: {}  {}",
            form.field().display(),
            summary_line(form.assessment())
        ))?;
        match term.read_key().context("failed to read a key from the terminal")? {
            Key::Char(ch) if !ch.is_control() => value.push(ch),
            Key::Backspace => {
                value.pop();
            }
            Key::Enter | Key::Escape => break,
            _ => continue,
        }
        form.on_input(value.as_str());
    }
    term.write_line("")?;
    Ok(())
}

fn confirm_clear(form: &mut PasswordForm, modal: &mut Modal) -> Result<(), ProgError> {
    modal.open();
    let answer = dialoguer::Confirm::new()
        .with_prompt("Clear the password?")
        .default(false)
        .interact_opt()
        .context("failed to prompt you, somehow")?;
    match answer {
        Some(true) => {
            modal.on_click(ClickTarget::Content);
            form.clear();
            modal.close();
        }
        // Declining or escaping is a click outside the dialog.
        Some(false) | None => {
            modal.on_click(ClickTarget::Backdrop);
        }
    }
    log::debug!("delete dialog is now {:?}", modal.visibility());
    Ok(())
}
