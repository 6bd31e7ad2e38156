use super::*;

#[test]
fn fields_keep_insertion_order() {
    let form = LoginForm::new()
        .with_field("username", "alice")
        .with_field("password", "secret");

    let fields = form.fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0], ("username".to_owned(), "alice".to_owned()));
    assert_eq!(fields[1], ("password".to_owned(), "secret".to_owned()));
}

#[test]
fn field_returns_first_match() {
    let mut form = LoginForm::new();
    form.push("role", "admin");
    form.push("role", "viewer");

    assert_eq!(form.field("role"), Some("admin"));
    assert_eq!(form.field("missing"), None);
}

#[test]
fn values_pass_through_unvalidated() {
    // Empty and whitespace-only values are legal; the server decides.
    let form = LoginForm::new()
        .with_field("username", "")
        .with_field("password", "   ");

    assert_eq!(form.field("username"), Some(""));
    assert_eq!(form.field("password"), Some("   "));
}

#[test]
fn new_form_is_empty() {
    assert!(LoginForm::new().is_empty());
    assert!(!LoginForm::new().with_field("a", "b").is_empty());
}

#[test]
fn static_source_snapshots_fixed_form() {
    let source = StaticFormSource::new(LoginForm::new().with_field("username", "alice"));

    let first = source.read_form().expect("static source should read");
    let second = source.read_form().expect("static source should read");
    assert_eq!(first.field("username"), Some("alice"));
    assert_eq!(second.field("username"), Some("alice"));
}
