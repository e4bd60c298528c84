// crates.io
use rand::Rng;
// self
use hrms_signup::validate::{
	FieldValidation, FormError, MAX_SCORE, SignUpForm, score_password, strength_color,
	strength_label, validate_company_name, validate_email,
};

const LENGTH_MESSAGE: &str = "Password must be at least 8 characters long";
const UPPERCASE_MESSAGE: &str = "Include at least one uppercase letter (A-Z)";

fn random_string(rng: &mut impl Rng, max_len: usize) -> String {
	let len = rng.random_range(0..=max_len);

	(0..len)
		.map(|_| match rng.random_range(0..3) {
			0 => rng.random_range(' '..='~'),
			1 => rng.random_range('\u{a0}'..='\u{2fff}'),
			_ => rng.random::<char>(),
		})
		.collect()
}

#[test]
fn short_passwords_never_earn_the_length_point() {
	let mut rng = rand::rng();

	for _ in 0..500 {
		let password = random_string(&mut rng, 7);
		let strength = score_password(&password);

		assert!(
			strength.feedback.iter().any(|m| m == LENGTH_MESSAGE),
			"Short password {password:?} should report the length requirement."
		);
		assert!(strength.score <= 4, "Short password {password:?} scored {}.", strength.score);
		assert!(!strength.is_strong);
	}
}

#[test]
fn missing_uppercase_is_always_reported() {
	let mut rng = rand::rng();

	for _ in 0..500 {
		let password = random_string(&mut rng, 24).replace(|c: char| c.is_ascii_uppercase(), "");
		let strength = score_password(&password);

		assert!(
			strength.feedback.iter().any(|m| m == UPPERCASE_MESSAGE),
			"Password {password:?} without uppercase should report it."
		);
	}
}

#[test]
fn empty_password_reports_every_requirement() {
	let strength = score_password("");

	assert_eq!(strength.score, 0);
	assert_eq!(strength.feedback.len(), 5);
	assert_eq!(strength.feedback[0], LENGTH_MESSAGE);
	assert!(!strength.is_strong);
}

#[test]
fn denylisted_password_is_penalized() {
	let strength = score_password("Password123!");

	assert_eq!(strength.score, 3);
	assert_eq!(strength.feedback, ["Avoid common passwords", "Avoid sequential characters"]);
	assert!(!strength.is_strong);
	assert_eq!(strength.label(), "Fair");
}

#[test]
fn strong_password_gets_one_encouragement() {
	let strength = score_password("Xk9#mQ7zVt2!");

	assert_eq!(strength.score, 6);
	assert!(strength.is_strong);
	assert_eq!(strength.feedback, ["✅ Excellent password strength!"]);
	assert_eq!(strength.color(), strength_color(6));
	assert_eq!(strength_label(6), "Excellent");
}

#[test]
fn score_stays_in_range_for_adversarial_input() {
	let mut rng = rand::rng();
	let fixtures = [
		"\u{0}".repeat(64),
		"ÄÖÜßẞ".repeat(40),
		"🔐🔑".repeat(100),
		"A\u{301}a1!".repeat(1_000),
		"Password123!abcdefQWERTY".repeat(50),
	];

	for password in fixtures.iter().cloned().chain((0..500).map(|_| random_string(&mut rng, 64))) {
		let strength = score_password(&password);

		assert!(strength.score <= MAX_SCORE, "Score escaped range for {password:?}.");
		assert!(!strength.is_strong || strength.score >= 5);
	}
}

#[test]
fn validators_are_idempotent() {
	let mut rng = rand::rng();

	for _ in 0..200 {
		let input = random_string(&mut rng, 32);

		assert_eq!(score_password(&input), score_password(&input));
		assert_eq!(validate_email(&input), validate_email(&input));
		assert_eq!(validate_company_name(&input), validate_company_name(&input));
	}
}

#[test]
fn email_rules_follow_screen_order() {
	assert_eq!(validate_email(""), FieldValidation::reject("Email is required"));
	assert_eq!(
		validate_email("not-an-email"),
		FieldValidation::reject("Please enter a valid email address")
	);
	assert_eq!(
		validate_email("user@gmial.com"),
		FieldValidation::suggest("Did you mean user@gmail.com?")
	);
	assert_eq!(validate_email("user@systech.com"), FieldValidation::ok());
}

#[test]
fn company_names_get_placeholder_hint_only_when_short() {
	let test_co = validate_company_name("Test Co");

	assert!(test_co.valid);
	assert!(test_co.has_suggestion());
	assert_eq!(validate_company_name("Acme Corporation International"), FieldValidation::ok());
	assert!(!validate_company_name("A").valid);
	assert!(!validate_company_name(&"x".repeat(101)).valid);
}

#[test]
fn form_check_stops_at_first_problem() {
	let mut form = SignUpForm {
		email: "admin@systech.com".into(),
		password: "Xk9#mQ7zVt2!".into(),
		confirm_password: "Xk9#mQ7zVt2?".into(),
		company_name: "".into(),
		first_name: "Ada".into(),
		last_name: " ".into(),
		phone: String::new(),
	};

	assert_eq!(form.check(), Err(FormError::PasswordMismatch));

	form.confirm_password = form.password.clone();

	assert_eq!(form.check(), Err(FormError::CompanyName("Company name is required".into())));

	form.company_name = "Systech Solutions".into();

	assert_eq!(form.check(), Err(FormError::MissingName));

	form.last_name = "Lovelace".into();

	assert_eq!(form.check(), Ok(()));
}
