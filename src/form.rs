//! View state for a password form: the candidate field, its strength bar, and the show/hide
//! toggle.
//!
//! A front end constructs one [`PasswordForm`], forwards its input events to it, and renders
//! whatever state the form exposes afterwards.

use rand::{CryptoRng, Rng};

use crate::password_generation::Generator;
use crate::strength::{Assessment, StrengthBar};
use crate::Secret;

/// Identifiers of the widgets a form front end is expected to provide.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ElementId {
    Password,
    StrengthBar,
    ToggleShow,
    GenerateBtn,
    DeleteModal,
}

impl ElementId {
    pub const ALL: [ElementId; 5] = [
        ElementId::Password,
        ElementId::StrengthBar,
        ElementId::ToggleShow,
        ElementId::GenerateBtn,
        ElementId::DeleteModal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::Password => "password",
            ElementId::StrengthBar => "strength-bar",
            ElementId::ToggleShow => "toggle-show",
            ElementId::GenerateBtn => "generate-btn",
            ElementId::DeleteModal => "deleteModal",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldMode {
    #[default]
    Masked,
    Plaintext,
}

impl FieldMode {
    fn flipped(self) -> FieldMode {
        match self {
            FieldMode::Masked => FieldMode::Plaintext,
            FieldMode::Plaintext => FieldMode::Masked,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PasswordField {
    value: Secret,
    mode: FieldMode,
}

impl PasswordField {
    pub fn value(&self) -> &Secret {
        &self.value
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    /// The value as it should be shown: bullets while masked.
    pub fn display(&self) -> String {
        match self.mode {
            FieldMode::Masked => "•".repeat(self.value.char_len()),
            FieldMode::Plaintext => self.value.as_str().to_owned(),
        }
    }
}

/// Its label names the action a click performs, so it reads "Show" while the field is masked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ToggleButton {
    label: &'static str,
}

impl ToggleButton {
    fn for_mode(mode: FieldMode) -> ToggleButton {
        let label = match mode {
            FieldMode::Masked => "Show",
            FieldMode::Plaintext => "Hide",
        };
        ToggleButton { label }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

pub struct PasswordForm {
    field: PasswordField,
    bar: StrengthBar,
    toggle: ToggleButton,
    assessment: Assessment,
    generator: Generator,
}

impl Default for PasswordForm {
    fn default() -> PasswordForm {
        PasswordForm::new(Generator::default())
    }
}

impl PasswordForm {
    pub fn new(generator: Generator) -> PasswordForm {
        let field = PasswordField::default();
        let assessment = Assessment::of(field.value.as_str());
        let mut bar = StrengthBar::default();
        bar.render(&assessment);
        PasswordForm {
            toggle: ToggleButton::for_mode(field.mode),
            field,
            bar,
            assessment,
            generator,
        }
    }

    pub fn field(&self) -> &PasswordField {
        &self.field
    }

    pub fn bar(&self) -> &StrengthBar {
        &self.bar
    }

    pub fn toggle(&self) -> &ToggleButton {
        &self.toggle
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    /// The candidate changed; rescore it right away.
    pub fn on_input(&mut self, value: impl Into<Secret>) {
        self.field.value = value.into();
        self.refresh();
    }

    pub fn toggle_visibility(&mut self) {
        self.field.mode = self.field.mode.flipped();
        self.toggle = ToggleButton::for_mode(self.field.mode);
    }

    /// Replace the candidate with a freshly generated password and rescore it.
    pub fn generate<R>(&mut self, rng: &mut R)
    where
        R: Rng + CryptoRng,
    {
        let generated = self.generator.generate(rng);
        self.on_input(generated);
    }

    pub fn clear(&mut self) {
        self.on_input(Secret::default());
    }

    /// Dispatch a click on one of the form's buttons. Returns `false` if the element has no click
    /// behaviour here.
    pub fn click<R>(&mut self, id: ElementId, rng: &mut R) -> bool
    where
        R: Rng + CryptoRng,
    {
        log::debug!("click on #{}", id.as_str());
        match id {
            ElementId::ToggleShow => self.toggle_visibility(),
            ElementId::GenerateBtn => self.generate(rng),
            ElementId::Password | ElementId::StrengthBar | ElementId::DeleteModal => return false,
        }
        true
    }

    fn refresh(&mut self) {
        self.assessment = Assessment::of(self.field.value.as_str());
        self.bar.render(&self.assessment);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::strength::Tier;

    #[test]
    fn starts_empty_masked_and_weak() {
        let form = PasswordForm::default();
        assert!(form.field().value().is_empty());
        assert_eq!(form.field().mode(), FieldMode::Masked);
        assert_eq!(form.toggle().label(), "Show");
        assert_eq!(form.bar().width_percent(), 0);
        assert_eq!(form.bar().tier(), Tier::Weak);
    }

    #[test]
    fn every_keystroke_rescores() {
        let mut form = PasswordForm::default();
        let mut typed = String::new();
        let mut widths = Vec::new();
        for ch in "Aa1!aaaaaa".chars() {
            typed.push(ch);
            form.on_input(typed.as_str());
            widths.push(form.bar().width_percent());
        }
        assert_eq!(widths, vec![20, 20, 40, 60, 60, 80, 80, 80, 80, 100]);
        assert_eq!(form.bar().color(), "green");
    }

    #[test]
    fn toggling_twice_round_trips() {
        let mut form = PasswordForm::default();
        form.on_input("secret");
        form.toggle_visibility();
        assert_eq!(form.field().mode(), FieldMode::Plaintext);
        assert_eq!(form.toggle().label(), "Hide");
        assert_eq!(form.field().display(), "secret");
        form.toggle_visibility();
        assert_eq!(form.field().mode(), FieldMode::Masked);
        assert_eq!(form.toggle().label(), "Show");
        assert_eq!(form.field().display(), "••••••");
    }

    #[test]
    fn generate_fills_field_and_rescores() {
        let mut form = PasswordForm::default();
        form.generate(&mut ChaCha20Rng::seed_from_u64(11));
        let value = form.field().value().as_str().to_owned();
        assert_eq!(value.chars().count(), 16);
        assert_eq!(form.assessment(), &Assessment::of(&value));
        assert_eq!(form.bar().width_percent(), form.assessment().percent);
    }

    #[test]
    fn clear_resets_bar() {
        let mut form = PasswordForm::default();
        form.on_input("Aa1!aaaaaa");
        form.clear();
        assert!(form.field().value().is_empty());
        assert_eq!(form.bar().width_percent(), 0);
    }

    #[test]
    fn clicks_dispatch_by_id() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut form = PasswordForm::default();
        assert!(form.click(ElementId::ToggleShow, &mut rng));
        assert_eq!(form.toggle().label(), "Hide");
        assert!(form.click(ElementId::GenerateBtn, &mut rng));
        assert!(!form.field().value().is_empty());
        assert!(!form.click(ElementId::StrengthBar, &mut rng));
        assert_eq!(ElementId::DeleteModal.as_str(), "deleteModal");
    }
}
