//! Rule tables exercised through the public form types.

use pretty_assertions::assert_eq;
use realty_forms::{
    ContactForm, Form, LoginForm, PropertyForm, RegistrationForm, ValidationErrors, WaitlistForm,
};
use rstest::rstest;

fn registration(password: &str, confirm: &str) -> RegistrationForm {
    RegistrationForm {
        username: "newuser".into(),
        password: password.into(),
        confirm_password: confirm.into(),
        email: "new@example.com".into(),
        full_name: "New User".into(),
        user_type: "Rent & Buy".into(),
        phone_number: "555-0199".into(),
    }
}

#[rstest]
#[case("secret1", "secret1", None, None)]
#[case("secret1", "secret2", None, Some("Passwords do not match"))]
#[case(
    "abc",
    "abc",
    Some("Password must be at least 6 characters"),
    Some("Confirm password is required")
)]
fn registration_password_rules(
    #[case] password: &str,
    #[case] confirm: &str,
    #[case] password_error: Option<&str>,
    #[case] confirm_error: Option<&str>,
) {
    let errors = registration(password, confirm)
        .validate()
        .err()
        .unwrap_or_default();
    assert_eq!(errors.get("password"), password_error);
    assert_eq!(errors.get("confirmPassword"), confirm_error);
}

#[rstest]
#[case("1", None)]
#[case("0", Some("Price must be positive"))]
#[case("-5", Some("Price must be positive"))]
#[case("", Some("Price must be positive"))]
#[case("five", Some("Expected number"))]
fn property_price(#[case] price: &str, #[case] expected: Option<&str>) {
    let form = PropertyForm {
        title: "Garden villa".into(),
        description: "Villa with a walled garden and a pool house".into(),
        location: "4 Palm Way".into(),
        city: "Miami".into(),
        state: "FL".into(),
        price: price.into(),
        image_url: "https://img.example.com/villa.jpg".into(),
        square_feet: "3200".into(),
        bedrooms: "4".into(),
        bathrooms: "3".into(),
        property_type: "Villa".into(),
        listing_type: "For Rent".into(),
        ..PropertyForm::default()
    };
    let errors = form.validate().err().unwrap_or_default();
    assert_eq!(errors.get("price"), expected);
}

#[test]
fn blank_property_form_reports_every_required_field() {
    let errors = PropertyForm::default().validate().unwrap_err();
    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(
        fields,
        [
            "title",
            "description",
            "location",
            "city",
            "state",
            "price",
            "imageUrl",
            "squareFeet",
            "propertyType",
            "listingType",
        ]
    );
}

#[test]
fn errors_render_for_display() {
    let errors: ValidationErrors = LoginForm::default().validate().unwrap_err();
    assert_eq!(
        errors.to_string(),
        "username: Username is required; password: Password is required"
    );
}

#[test]
fn email_rules_are_shared() {
    let contact = ContactForm {
        name: "Al".into(),
        email: "al@".into(),
        phone: "5550100100".into(),
        message: "Interested in a viewing".into(),
    };
    let waitlist = WaitlistForm {
        full_name: "Al".into(),
        email: "al@".into(),
        property_interest: "commercial".into(),
        agreed_to_terms: true,
    };
    assert!(contact.validate().unwrap_err().has("email"));
    assert!(waitlist.validate().unwrap_err().has("email"));
}
