use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Lengths below this are generated, but callers should warn about them.
pub const WEAK_PASSWORD_LENGTH: usize = 8;

const VOWELS: &str = "aeiouy";

// Changing the order or content of these groups changes every generated password.
const SPECIAL_CHAR_GROUPS: [&str; 6] = ["`~]'", "!&^#", ")(*$", "[ -=", "@%.;", "<,}+"];
const SPECIAL_CHAR_GROUP_LEN: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Empty master password")]
    EmptyMasterPhrase,
    #[error("Empty domain")]
    EmptyDomain,
    #[error("Cannot generate password with so many symbols. The current limit is [{limit}], requested [{requested}]")]
    TooLong { requested: usize, limit: usize },
    #[error("Password length [{requested}] is too short, the minimum is [{minimum}]")]
    TooShort { requested: usize, minimum: usize },
}

/// Everything that determines a generated password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub master_phrase: String,
    pub domain: String,
    pub additional_info: String,
    pub password_length: usize,
    pub add_special_characters: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_phrase: String::new(),
            domain: String::new(),
            additional_info: String::new(),
            password_length: DEFAULT_PASSWORD_LENGTH,
            add_special_characters: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.master_phrase.is_empty() {
            return Err(GeneratorError::EmptyMasterPhrase);
        }
        if self.domain.is_empty() {
            return Err(GeneratorError::EmptyDomain);
        }

        let minimum = if self.add_special_characters {
            SPECIAL_CHAR_GROUP_LEN
        } else {
            1
        };
        if self.password_length < minimum {
            return Err(GeneratorError::TooShort {
                requested: self.password_length,
                minimum,
            });
        }

        Ok(())
    }

    pub fn is_weak(&self) -> bool {
        self.password_length < WEAK_PASSWORD_LENGTH
    }
}

/// Picks a special character group from the number of vowels in `hash`.
pub fn special_characters(hash: &str) -> &'static str {
    let vowel_count = hash
        .chars()
        .filter(|c| VOWELS.contains(c.to_ascii_lowercase()))
        .count();
    SPECIAL_CHAR_GROUPS[vowel_count % SPECIAL_CHAR_GROUPS.len()]
}

fn hash_settings(settings: &Settings) -> String {
    let input = format!(
        "{}:{}:{}",
        settings.master_phrase, settings.domain, settings.additional_info
    );
    let digest = Sha256::digest(input.as_bytes());
    STANDARD.encode(digest)
}

/// Generates the domain specific password.
///
/// The same settings always produce the same password; nothing is stored.
pub fn generate_password(settings: &Settings) -> Result<String, GeneratorError> {
    settings.validate()?;

    // base64 output is ASCII, so byte slicing below is on char boundaries
    let hash = hash_settings(settings);
    if hash.len() < settings.password_length {
        return Err(GeneratorError::TooLong {
            requested: settings.password_length,
            limit: hash.len(),
        });
    }

    let mut password = hash[..settings.password_length].to_string();

    if settings.add_special_characters {
        let suffix = special_characters(&hash);
        password.truncate(password.len() - suffix.len());
        password.push_str(suffix);
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(master: &str, domain: &str, info: &str, length: usize, special: bool) -> Settings {
        Settings {
            master_phrase: master.to_string(),
            domain: domain.to_string(),
            additional_info: info.to_string(),
            password_length: length,
            add_special_characters: special,
        }
    }

    const GROUP_CASES: [(&str, &str); 15] = [
        ("zxcv", "`~]'"),
        ("123", "`~]'"),
        ("a", "!&^#"),
        ("e", "!&^#"),
        ("i", "!&^#"),
        ("o", "!&^#"),
        ("u", "!&^#"),
        ("y", "!&^#"),
        ("ae", ")(*$"),
        ("axe", ")(*$"),
        ("aei", "[ -="),
        ("aeio", "@%.;"),
        ("aeiou", "<,}+"),
        ("aeiouy", "`~]'"),
        ("aeiouya", "!&^#"),
    ];

    #[test]
    fn test_special_characters_lower_case() {
        for (given, expected) in GROUP_CASES {
            assert_eq!(special_characters(given), expected, "input {given}");
        }
    }

    #[test]
    fn test_special_characters_ignores_case() {
        for (given, expected) in GROUP_CASES {
            let upper = given.to_uppercase();
            assert_eq!(special_characters(&upper), expected, "input {upper}");

            let mixed: String = given
                .chars()
                .enumerate()
                .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
                .collect();
            assert_eq!(special_characters(&mixed), expected, "input {mixed}");
        }
    }

    #[test]
    fn test_generate_password_known_values() {
        let cases = [
            (settings("secret", "localhost", "", 12, true), "B8MYkTQT`~]'"),
            (settings("secret", "localhost", "", 12, false), "B8MYkTQTtUwW"),
            (settings("secret", "google.com", "", 12, true), "ODejwny3!&^#"),
            (settings("terces", "google.com", "", 12, true), "cLJk0Cnq!&^#"),
            (settings("terces", "google.com", "", 20, true), "cLJk0CnqwfDqjv4Y!&^#"),
            (settings("terces", "google.com", "addInfo", 12, true), "SKkSa4NN)(*$"),
            (settings("terces", "google.com", "addInfo", 12, false), "SKkSa4NN+5Xo"),
        ];

        for (input, expected) in cases {
            assert_eq!(generate_password(&input).unwrap(), expected);
        }
    }

    #[test]
    fn test_generate_password_is_deterministic() {
        let input = settings("Sup3rSecret!", "example.org", "", 16, true);
        assert_eq!(generate_password(&input).unwrap(), "y2PFT2ikbfGC)(*$");
        assert_eq!(generate_password(&input).unwrap(), "y2PFT2ikbfGC)(*$");
    }

    #[test]
    fn test_generate_password_full_hash_length() {
        let input = settings("secret", "localhost", "", 44, false);
        assert_eq!(
            generate_password(&input).unwrap(),
            "B8MYkTQTtUwWqac4l++lJAfxp2W0kkPu2pCBdcQ5DLA="
        );
    }

    #[test]
    fn test_generate_password_validation() {
        assert_eq!(
            generate_password(&settings("", "localhost", "", 12, true)),
            Err(GeneratorError::EmptyMasterPhrase)
        );
        assert_eq!(
            generate_password(&settings("secret", "", "", 12, true)),
            Err(GeneratorError::EmptyDomain)
        );
        assert_eq!(
            generate_password(&settings("secret", "localhost", "", 45, true)),
            Err(GeneratorError::TooLong {
                requested: 45,
                limit: 44
            })
        );
        assert_eq!(
            generate_password(&settings("secret", "localhost", "", 3, true)),
            Err(GeneratorError::TooShort {
                requested: 3,
                minimum: 4
            })
        );
        assert_eq!(
            generate_password(&settings("secret", "localhost", "", 0, false)),
            Err(GeneratorError::TooShort {
                requested: 0,
                minimum: 1
            })
        );
    }

    #[test]
    fn test_short_passwords_are_allowed_but_weak() {
        let input = settings("secret", "localhost", "", 4, true);
        assert!(input.is_weak());
        assert_eq!(generate_password(&input).unwrap(), "`~]'");

        assert!(!Settings::default().is_weak());
    }
}
