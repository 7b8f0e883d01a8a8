//! Utilities for generating passwords.

use std::collections::HashSet;

use rand::{CryptoRng, Rng};
use serde::Deserialize;

use crate::{Error, ErrorRepr, Secret};

/// Lowercase, uppercase, digits, then symbols.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+[]{}|;:,.<>?";

pub const DEFAULT_LENGTH: usize = 16;

/// Generate a password by randomly sampling the given alphabet, with replacement.
///
/// No character class is guaranteed to appear, so a generated password can score below the
/// maximum.
///
/// `rand`'s uniform range sampler rejects out-of-range draws rather than reducing them modulo the
/// alphabet size, so every character is equally likely.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &[char], len: usize) -> Result<Secret, Error>
where
    R: Rng + CryptoRng,
{
    if alphabet.is_empty() {
        return Err(ErrorRepr::EmptyAlphabet.into());
    }
    Ok(sample(rng, alphabet, len))
}

/// Generate a password from [`DEFAULT_ALPHABET`] of [`DEFAULT_LENGTH`] characters.
pub fn generate_default_password<R>(rng: &mut R) -> Secret
where
    R: Rng + CryptoRng,
{
    Generator::default().generate(rng)
}

fn sample<R>(rng: &mut R, alphabet: &[char], len: usize) -> Secret
where
    R: Rng + CryptoRng,
{
    let secret = (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect::<String>();
    Secret::from(secret)
}

/// User-facing generator settings, as read from the config file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub alphabet: String,
    pub length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            alphabet: DEFAULT_ALPHABET.to_owned(),
            length: DEFAULT_LENGTH,
        }
    }
}

/// A validated [`GeneratorConfig`]; generating with it cannot fail.
#[derive(Clone, Debug)]
pub struct Generator {
    alphabet: Vec<char>,
    length: usize,
}

impl Default for Generator {
    fn default() -> Generator {
        Generator {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            length: DEFAULT_LENGTH,
        }
    }
}

impl Generator {
    pub fn new(config: &GeneratorConfig) -> Result<Generator, Error> {
        if config.length == 0 {
            return Err(ErrorRepr::ZeroLength.into());
        }
        let alphabet = config.alphabet.chars().collect::<Vec<_>>();
        if alphabet.is_empty() {
            return Err(ErrorRepr::EmptyAlphabet.into());
        }
        // Duplicates would silently weight some characters over others.
        let mut seen = HashSet::with_capacity(alphabet.len());
        if let Some(dup) = alphabet.iter().find(|ch| !seen.insert(**ch)) {
            return Err(ErrorRepr::DuplicateAlphabetChar(*dup).into());
        }
        Ok(Generator {
            alphabet,
            length: config.length,
        })
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn with_length(mut self, length: usize) -> Result<Generator, Error> {
        if length == 0 {
            return Err(ErrorRepr::ZeroLength.into());
        }
        self.length = length;
        Ok(self)
    }

    pub fn generate<R>(&self, rng: &mut R) -> Secret
    where
        R: Rng + CryptoRng,
    {
        log::debug!(
            "generating a {}-character password from a {}-character alphabet",
            self.length,
            self.alphabet.len()
        );
        sample(rng, &self.alphabet, self.length)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn default_alphabet_has_no_duplicates() {
        let unique = DEFAULT_ALPHABET.chars().collect::<HashSet<_>>();
        assert_eq!(unique.len(), DEFAULT_ALPHABET.chars().count());
        assert_eq!(unique.len(), 88);
    }

    #[test]
    fn default_password_shape() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..200 {
            let pw = generate_default_password(&mut rng);
            assert_eq!(pw.char_len(), DEFAULT_LENGTH);
            assert!(pw.as_str().chars().all(|c| DEFAULT_ALPHABET.contains(c)));
        }
    }

    #[test]
    fn same_seed_same_password() {
        let a = generate_default_password(&mut ChaCha20Rng::seed_from_u64(1));
        let b = generate_default_password(&mut ChaCha20Rng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert!(generate_random_password(&mut rng, &[], 8).is_err());
        let config = GeneratorConfig {
            alphabet: String::new(),
            length: 8,
        };
        assert!(Generator::new(&config).is_err());
    }

    #[test]
    fn single_char_alphabet() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let pw = generate_random_password(&mut rng, &['x'], 5).unwrap();
        assert_eq!(pw.as_str(), "xxxxx");
    }

    #[test]
    fn config_validation() {
        let zero = GeneratorConfig {
            length: 0,
            ..GeneratorConfig::default()
        };
        assert!(Generator::new(&zero).unwrap_err().to_string().contains("at least 1"));

        let dup = GeneratorConfig {
            alphabet: "abca".to_owned(),
            length: 4,
        };
        assert!(Generator::new(&dup).unwrap_err().to_string().contains("'a'"));

        assert!(Generator::default().with_length(0).is_err());
        assert_eq!(Generator::default().with_length(24).unwrap().length(), 24);
    }

    #[test]
    fn every_character_gets_drawn() {
        let generator = Generator::new(&GeneratorConfig {
            alphabet: "abcd".to_owned(),
            length: 400,
        })
        .unwrap();
        let pw = generator.generate(&mut ChaCha20Rng::seed_from_u64(3));
        for ch in generator.alphabet() {
            assert!(pw.as_str().contains(*ch));
        }
    }
}
