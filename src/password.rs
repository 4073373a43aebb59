//! Heuristic password-strength scoring.
//!
//! Advisory only: the interactive prompt uses this to warn, never to reject.
//! The engine itself accepts any password, including an empty one.

/// A 0-4 strength estimate with human-readable feedback.
pub struct Strength {
    pub score: u8,
    pub label: &'static str,
    pub feedback: Vec<&'static str>,
}

const COMMON_SEQUENCES: &[&str] = &[
    "123", "234", "345", "456", "567", "678", "789", "abc", "qwerty", "asdfgh", "zxcvbn", "password", "admin", "letmein", "welcome", "monkey", "dragon", "master",
];

/// Scores a password from length, character variety, and common patterns.
#[must_use]
pub fn score(password: &str) -> Strength {
    if password.is_empty() {
        return Strength { score: 0, label: "No Password", feedback: vec!["Please enter a password"] };
    }

    let mut score: i8 = 0;
    let mut feedback = Vec::new();

    let length = password.chars().count();
    score += i8::from(length >= 8) + i8::from(length >= 12) + i8::from(length >= 16);

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());
    let variety = [has_lower, has_upper, has_digit, has_special].iter().filter(|&&v| v).count();

    score += i8::from(variety >= 2) + i8::from(variety >= 3) + i8::from(variety == 4);

    if has_common_pattern(password) {
        score -= 2;
        feedback.push("Avoid common patterns and words");
    }

    if length < 12 {
        feedback.push("Use at least 12 characters for better security");
    }
    if !has_upper || !has_lower {
        feedback.push("Include both uppercase and lowercase letters");
    }
    if !has_digit {
        feedback.push("Include at least one number");
    }
    if !has_special {
        feedback.push("Include special characters (!@#$%^&*)");
    }

    let score = score.clamp(0, 4) as u8;
    let label = match score {
        0 | 1 => "Very Weak",
        2 => "Weak",
        3 => "Fair",
        _ if length >= 16 && variety == 4 => "Very Strong",
        _ => "Strong",
    };

    if feedback.is_empty() {
        feedback.push("Password strength is good");
    }

    Strength { score, label, feedback }
}

fn has_common_pattern(password: &str) -> bool {
    let lowered = password.to_lowercase();

    if COMMON_SEQUENCES.iter().any(|s| lowered.contains(s)) {
        return true;
    }

    // Three or more of the same character in a row.
    let chars: Vec<char> = lowered.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        let strength = score("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, "No Password");
    }

    #[test]
    fn test_weak_common_password() {
        assert!(score("password123").score <= 1);
    }

    #[test]
    fn test_repeated_characters_penalized() {
        assert!(score("aaaaaaaa").score <= 1);
    }

    #[test]
    fn test_strong_password() {
        let strength = score("cY7#mK9$pL2@wX5!");
        assert_eq!(strength.score, 4);
        assert_eq!(strength.label, "Very Strong");
    }

    #[test]
    fn test_fair_password_gets_feedback() {
        let strength = score("Tr0ub4dor");
        assert!(strength.score >= 2);
        assert!(!strength.feedback.is_empty());
    }
}
