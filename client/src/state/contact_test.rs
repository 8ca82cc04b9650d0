use super::*;

fn filled() -> FormState {
    FormState {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        company: "Analytical Engines".into(),
        license: LicenseType::Design.value().into(),
        message: String::new(),
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_empty_form_reports_all_required_fields() {
    let errors = validate(&FormState::default());
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[&ContactField::Name], "Name is required");
    assert_eq!(errors[&ContactField::Email], "Email is required");
    assert_eq!(errors[&ContactField::Company], "Company is required");
    assert_eq!(errors[&ContactField::License], "License is required");
}

#[test]
fn validate_filled_form_is_clean() {
    assert!(validate(&filled()).is_empty());
}

#[test]
fn validate_reports_exactly_the_blank_fields() {
    let cases: [(fn(&mut FormState), ContactField); 4] = [
        (|f| f.name.clear(), ContactField::Name),
        (|f| f.email.clear(), ContactField::Email),
        (|f| f.company.clear(), ContactField::Company),
        (|f| f.license.clear(), ContactField::License),
    ];
    for (clear, field) in cases {
        let mut form = filled();
        clear(&mut form);
        let errors = validate(&form);
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), [field], "{field:?}");
    }
}

#[test]
fn validate_accepts_whitespace_only_values() {
    let mut form = filled();
    form.name = "   ".into();
    form.company = " \t".into();
    assert!(validate(&form).is_empty());
}

#[test]
fn validate_ignores_optional_message() {
    let mut form = filled();
    form.message = String::new();
    assert!(validate(&form).is_empty());
}

#[test]
fn validate_accepts_unlisted_license_value() {
    let mut form = filled();
    form.license = "Enterprise ERP".into();
    assert!(validate(&form).is_empty());
}

// =============================================================
// submit (pure)
// =============================================================

#[test]
fn submit_rejects_and_replaces_stale_errors() {
    let mut stale = ValidationErrors::new();
    stale.insert(ContactField::Name, "Name is required".into());
    let mut form = filled();
    form.email.clear();

    let (action, errors) = submit(&form, &stale);
    assert_eq!(action, SubmitAction::Rejected);
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), [ContactField::Email]);
}

#[test]
fn submit_accepts_with_acknowledgment() {
    let (action, errors) = submit(&filled(), &ValidationErrors::new());
    assert_eq!(action, SubmitAction::Accepted { acknowledgment: SUBMITTED_TEXT.into() });
    assert!(errors.is_empty());
}

// =============================================================
// ContactState
// =============================================================

#[test]
fn rejected_submit_keeps_form_as_typed() {
    let mut state = ContactState::default();
    state.set_field(FormField::Name, "Ada".into());
    state.set_field(FormField::Message, "hello".into());

    assert_eq!(state.submit(), SubmitAction::Rejected);
    assert_eq!(state.form.name, "Ada");
    assert_eq!(state.form.message, "hello");
    assert_eq!(state.errors.len(), 3);
    assert_eq!(state.error(ContactField::Email), Some("Email is required"));
    assert_eq!(state.error(ContactField::Name), None);
    assert!(state.acknowledgment.is_none());
}

#[test]
fn accepted_submit_resets_form_and_errors() {
    let mut state = ContactState::default();
    assert_eq!(state.submit(), SubmitAction::Rejected);
    assert!(!state.errors.is_empty());

    state.form = filled();
    state.form.message = "Three seats".into();
    assert!(matches!(state.submit(), SubmitAction::Accepted { .. }));
    assert_eq!(state.form, FormState::default());
    assert!(state.errors.is_empty());
    assert_eq!(state.acknowledgment.as_deref(), Some(SUBMITTED_TEXT));
}

#[test]
fn editing_clears_acknowledgment() {
    let mut state = ContactState { form: filled(), ..ContactState::default() };
    state.submit();
    assert!(state.acknowledgment.is_some());
    state.set_field(FormField::Name, "B".into());
    assert!(state.acknowledgment.is_none());
}

// =============================================================
// LicenseType
// =============================================================

#[test]
fn license_options_match_select_values() {
    let pairs: Vec<_> = LicenseType::ALL.iter().map(|l| (l.value(), l.label())).collect();
    assert_eq!(pairs, [("Office", "Office Suite"), ("Antivirus", "Antivirus"), ("Design", "Design Software")]);
}
