use pwmeter::password_generation::DEFAULT_ALPHABET;
use pwmeter::{
    score, ClickTarget, ElementId, FieldMode, Generator, GeneratorConfig, Modal, PasswordForm,
    Tier, Visibility,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn generated_passwords_use_the_alphabet_and_mostly_score_top() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut form = PasswordForm::default();
    let mut strong = 0;
    for _ in 0..500 {
        form.click(ElementId::GenerateBtn, &mut rng);
        let value = form.field().value().as_str();
        assert_eq!(value.chars().count(), 16);
        assert!(value.chars().all(|c| DEFAULT_ALPHABET.contains(c)));
        assert_eq!(form.bar().width_percent(), score(value).percent());
        // Two length rules are always met.
        assert!(score(value).value() >= 2);
        if form.bar().tier() == Tier::Strong {
            strong += 1;
        }
    }
    // Class inclusion is not enforced, but sixteen draws almost always hit every class.
    assert!(strong > 450, "{strong}");
}

#[test]
fn configured_generator_drives_the_form() {
    let generator = Generator::new(&GeneratorConfig {
        alphabet: "ab".to_owned(),
        length: 6,
    })
    .unwrap();
    let mut form = PasswordForm::new(generator);
    form.generate(&mut ChaCha20Rng::seed_from_u64(9));
    let value = form.field().value().as_str();
    assert_eq!(value.len(), 6);
    assert!(value.chars().all(|c| c == 'a' || c == 'b'));
    assert_eq!(form.bar().width_percent(), 20);
    assert_eq!(form.bar().color(), "red");
}

#[test]
fn visibility_survives_input_and_generation() {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    let mut form = PasswordForm::default();
    form.click(ElementId::ToggleShow, &mut rng);
    form.on_input("typed");
    form.click(ElementId::GenerateBtn, &mut rng);
    assert_eq!(form.field().mode(), FieldMode::Plaintext);
    assert_eq!(form.toggle().label(), "Hide");
    assert_eq!(form.field().display(), form.field().value().as_str());
}

#[test]
fn delete_dialog_flow() {
    let mut modal = Modal::new();
    modal.open();
    modal.on_click(ClickTarget::Content);
    assert_eq!(modal.visibility(), Visibility::Visible);
    modal.on_click(ClickTarget::Backdrop);
    assert_eq!(modal.visibility(), Visibility::Hidden);

    modal.open();
    modal.close();
    assert_eq!(modal.visibility(), Visibility::Hidden);
}
