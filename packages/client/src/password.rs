//! Random password generation for supervisor-provisioned accounts.

use rand::seq::SliceRandom;

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-+";

/// Generated passwords are always exactly this long.
pub const PASSWORD_LEN: usize = 12;

/// Generate a random password containing at least one uppercase letter,
/// one lowercase letter, one digit, and one symbol.
///
/// Coverage is guaranteed by construction: the first four characters are
/// drawn one from each class, the rest from the combined alphabet, and the
/// whole sequence is shuffled so the guaranteed characters do not sit in
/// predictable positions. The thread RNG is OsRng-seeded, so the output is
/// suitable for initial-account credentials.
pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    let mut chars: Vec<u8> = Vec::with_capacity(PASSWORD_LEN);

    for class in [UPPER, LOWER, DIGITS, SYMBOLS] {
        chars.push(*class.choose(&mut rng).expect("character class is non-empty"));
    }

    let alphabet: Vec<u8> = [UPPER, LOWER, DIGITS, SYMBOLS].concat();
    while chars.len() < PASSWORD_LEN {
        chars.push(*alphabet.choose(&mut rng).expect("alphabet is non-empty"));
    }

    chars.shuffle(&mut rng);
    chars.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn has_class(password: &str, class: &[u8]) -> bool {
        password.bytes().any(|b| class.contains(&b))
    }

    #[test]
    fn test_length_and_class_coverage() {
        for _ in 0..100 {
            let password = generate_password();
            assert_eq!(password.len(), PASSWORD_LEN);
            assert!(has_class(&password, UPPER));
            assert!(has_class(&password, LOWER));
            assert!(has_class(&password, DIGITS));
            assert!(has_class(&password, SYMBOLS));
        }
    }

    #[test]
    fn test_only_known_characters() {
        let alphabet: Vec<u8> = [UPPER, LOWER, DIGITS, SYMBOLS].concat();
        for _ in 0..100 {
            let password = generate_password();
            assert!(password.bytes().all(|b| alphabet.contains(&b)));
        }
    }

    #[test]
    fn test_no_duplicates_across_invocations() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(generate_password()), "generated a duplicate password");
        }
    }
}
