//! Password strength metering and generation for a password form.
//!
//! The pieces a form needs are split so that the pure parts can be used on their own:
//! [`strength`] scores a candidate, [`password_generation`] produces new candidates, and
//! [`form`] / [`modal`] hold the view state a front end renders.

use std::io;
use std::path::PathBuf;

pub mod config;
pub mod form;
pub mod modal;
pub mod password_generation;
pub mod strength;

pub use config::Config;
pub use form::{ElementId, FieldMode, PasswordField, PasswordForm, ToggleButton};
pub use modal::{ClickTarget, Modal, Visibility};
pub use password_generation::{Generator, GeneratorConfig};
pub use strength::{score, Assessment, Rule, Score, StrengthBar, Tier};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(ErrorRepr);

impl From<ErrorRepr> for Error {
    fn from(err: ErrorRepr) -> Error {
        Error(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum ErrorRepr {
    #[error("the password alphabet is empty")]
    EmptyAlphabet,
    #[error("the password alphabet contains {0:?} more than once")]
    DuplicateAlphabetChar(char),
    #[error("the password length must be at least 1")]
    ZeroLength,
    #[error("failed to read config file {}: {1}", .0.display())]
    ConfigIo(PathBuf, #[source] io::Error),
    #[error("failed to parse config file {}: {1}", .0.display())]
    ConfigParse(PathBuf, #[source] serde_yaml::Error),
}

/// A password, or password candidate. `Debug` output never shows the contents.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters, which is what the strength rules count.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Secret {
        Secret(s.to_owned())
    }
}
