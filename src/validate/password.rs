//! Heuristic password strength scoring.
//!
//! The scorer awards one point per satisfied requirement (length, uppercase, lowercase, digit,
//! special character) plus a bonus point for long passwords, then subtracts penalties for
//! denylisted substrings and short ascending runs. Scores always land in `0..=6`.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::_prelude::*;

/// Minimum length that earns the first point.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Length that earns the bonus point.
pub const LONG_PASSWORD_LENGTH: usize = 12;
/// Upper bound of [`PasswordStrength::score`].
pub const MAX_SCORE: u8 = 6;
/// Minimum score for [`PasswordStrength::is_strong`].
pub const STRONG_SCORE: u8 = 5;

/// Characters counted as "special".
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Substrings that mark a password as common, matched against the lowercased input.
pub const COMMON_PASSWORDS: [&str; 10] = [
	"password",
	"password123",
	"12345678",
	"qwerty",
	"abc123",
	"letmein",
	"welcome",
	"monkey",
	"dragon",
	"master",
];

const MSG_TOO_SHORT: &str = "Password must be at least 8 characters long";
const MSG_UPPERCASE: &str = "Include at least one uppercase letter (A-Z)";
const MSG_LOWERCASE: &str = "Include at least one lowercase letter (a-z)";
const MSG_DIGIT: &str = "Include at least one number (0-9)";
const MSG_SPECIAL: &str = "Include at least one special character (!@#$%^&*...)";
const MSG_COMMON: &str = "Avoid common passwords";
const MSG_SEQUENTIAL: &str = "Avoid sequential characters";
const MSG_EXCELLENT: &str = "✅ Excellent password strength!";
const MSG_STRONG: &str = "✅ Strong password";
const MSG_GOOD: &str = "⚠️ Good password, but could be stronger";

// Literal ascending triples only; "987" and "zyx" do not match.
static SEQUENTIAL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new("(?i)abc|bcd|cde|def|123|234|345|456")
		.expect("SEQUENTIAL is a valid regex pattern")
});

/// Result of [`score_password`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrength {
	/// Heuristic score in `0..=6`.
	pub score: u8,
	/// Ordered diagnostics, or a single encouragement when every check passed.
	pub feedback: Vec<String>,
	/// `true` when the score is at least [`STRONG_SCORE`] and no check failed.
	pub is_strong: bool,
}
impl PasswordStrength {
	/// Display bucket for the score.
	pub fn level(&self) -> StrengthLevel {
		StrengthLevel::from_score(self.score)
	}

	/// Human-readable label for the score.
	pub fn label(&self) -> &'static str {
		self.level().label()
	}

	/// Hex color for the score.
	pub fn color(&self) -> &'static str {
		self.level().color()
	}
}

/// Display buckets shared by the label and color helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
	/// Score 0 through 2.
	Weak,
	/// Score 3.
	Fair,
	/// Score 4.
	Good,
	/// Score 5.
	Strong,
	/// Score 6 and above.
	Excellent,
}
impl StrengthLevel {
	/// Buckets a raw score.
	pub const fn from_score(score: u8) -> Self {
		match score {
			0..=2 => Self::Weak,
			3 => Self::Fair,
			4 => Self::Good,
			5 => Self::Strong,
			_ => Self::Excellent,
		}
	}

	/// Returns the label rendered next to the strength meter.
	pub const fn label(self) -> &'static str {
		match self {
			Self::Weak => "Weak",
			Self::Fair => "Fair",
			Self::Good => "Good",
			Self::Strong => "Strong",
			Self::Excellent => "Excellent",
		}
	}

	/// Returns the meter color; greener means stronger.
	pub const fn color(self) -> &'static str {
		match self {
			Self::Weak => "#d32f2f",
			Self::Fair => "#f57c00",
			Self::Good => "#fbc02d",
			Self::Strong => "#7cb342",
			Self::Excellent => "#388e3c",
		}
	}
}
impl Display for StrengthLevel {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.label())
	}
}

/// Scores a password and collects user-facing feedback.
///
/// Lengths are measured in Unicode scalar values. Character-class checks only consider ASCII
/// letters and digits, so non-ASCII input never satisfies them.
pub fn score_password(password: &str) -> PasswordStrength {
	let mut feedback = Vec::new();
	let mut score = 0_u8;
	let length = password.chars().count();

	if length >= MIN_PASSWORD_LENGTH {
		score += 1;
	} else {
		feedback.push(MSG_TOO_SHORT.to_owned());
	}
	if length >= LONG_PASSWORD_LENGTH {
		score += 1;
	}

	let classes: [(fn(&char) -> bool, &str); 4] = [
		(char::is_ascii_uppercase, MSG_UPPERCASE),
		(char::is_ascii_lowercase, MSG_LOWERCASE),
		(char::is_ascii_digit, MSG_DIGIT),
		(is_special, MSG_SPECIAL),
	];

	for (matches, message) in classes {
		if password.chars().any(|c| matches(&c)) {
			score += 1;
		} else {
			feedback.push(message.to_owned());
		}
	}

	let lowered = password.to_lowercase();

	if COMMON_PASSWORDS.iter().any(|common| lowered.contains(common)) {
		feedback.push(MSG_COMMON.to_owned());
		score = score.saturating_sub(2);
	}
	if SEQUENTIAL.is_match(password) {
		feedback.push(MSG_SEQUENTIAL.to_owned());
		score = score.saturating_sub(1);
	}

	let is_strong = score >= STRONG_SCORE && feedback.is_empty();

	if feedback.is_empty() {
		let message = match score {
			6.. => Some(MSG_EXCELLENT),
			5 => Some(MSG_STRONG),
			4 => Some(MSG_GOOD),
			_ => None,
		};

		feedback.extend(message.map(str::to_owned));
	}

	PasswordStrength { score: score.min(MAX_SCORE), feedback, is_strong }
}

/// Label for a raw score: `Weak`, `Fair`, `Good`, `Strong` or `Excellent`.
pub fn strength_label(score: u8) -> &'static str {
	StrengthLevel::from_score(score).label()
}

/// Hex color for a raw score.
pub fn strength_color(score: u8) -> &'static str {
	StrengthLevel::from_score(score).color()
}

fn is_special(c: &char) -> bool {
	SPECIAL_CHARACTERS.contains(*c)
}
