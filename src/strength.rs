//! Heuristic password strength scoring.
//!
//! A candidate earns one point per [`Rule`] it satisfies. There are no penalties, so a candidate
//! that satisfies more rules never scores lower.

use std::fmt;

use serde::Serialize;

/// One of the independent criteria a candidate is scored against.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// At least 6 UTF-16 code units.
    MinLength,
    /// At least 10 UTF-16 code units.
    LongLength,
    /// Contains an ASCII uppercase letter.
    Uppercase,
    /// Contains an ASCII digit.
    Digit,
    /// Contains anything that is not an ASCII letter or digit.
    Symbol,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::MinLength,
        Rule::LongLength,
        Rule::Uppercase,
        Rule::Digit,
        Rule::Symbol,
    ];

    pub fn is_met(self, value: &str) -> bool {
        match self {
            Rule::MinLength => utf16_len(value) >= 6,
            Rule::LongLength => utf16_len(value) >= 10,
            Rule::Uppercase => value.chars().any(|c| c.is_ascii_uppercase()),
            Rule::Digit => value.chars().any(|c| c.is_ascii_digit()),
            Rule::Symbol => value.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Rule::MinLength => "at least 6 characters",
            Rule::LongLength => "at least 10 characters",
            Rule::Uppercase => "an uppercase letter (A-Z)",
            Rule::Digit => "a digit (0-9)",
            Rule::Symbol => "a symbol (not A-Z, a-z, 0-9)",
        }
    }
}

/// Length as a browser input reports it: characters outside the BMP count twice.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Number of rules a candidate satisfies, `0..=5`.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = Rule::ALL.len() as u8;

    pub fn value(self) -> u8 {
        self.0
    }

    /// The score as a share of [`Score::MAX`], in `0..=100`.
    pub fn percent(self) -> u8 {
        // 5 * 100 does not fit in a u8.
        (u16::from(self.0) * 100 / u16::from(Self::MAX)) as u8
    }

    pub fn tier(self) -> Tier {
        Tier::from_percent(self.percent())
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Score a candidate. Total: every string, including the empty one, has a score.
pub fn score(value: &str) -> Score {
    let met = Rule::ALL.iter().filter(|rule| rule.is_met(value)).count();
    Score(met as u8)
}

/// Named strength band. Bands include their lower bound and exclude their upper one.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// `[0, 40)`
    Weak,
    /// `[40, 60)`
    Fair,
    /// `[60, 80)`
    Good,
    /// `[80, 100]`
    Strong,
}

impl Tier {
    pub fn from_percent(percent: u8) -> Tier {
        match percent {
            0..=39 => Tier::Weak,
            40..=59 => Tier::Fair,
            60..=79 => Tier::Good,
            _ => Tier::Strong,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Weak => "weak",
            Tier::Fair => "fair",
            Tier::Good => "good",
            Tier::Strong => "strong",
        }
    }

    /// CSS color name of the bar fill for this tier.
    pub fn color(self) -> &'static str {
        match self {
            Tier::Weak => "red",
            Tier::Fair => "orange",
            Tier::Good => "yellow",
            Tier::Strong => "green",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RuleOutcome {
    pub rule: Rule,
    pub met: bool,
}

/// Everything derived from a single candidate.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Assessment {
    pub score: Score,
    pub percent: u8,
    pub tier: Tier,
    pub rules: Vec<RuleOutcome>,
}

impl Assessment {
    pub fn of(value: &str) -> Assessment {
        let rules = Rule::ALL
            .iter()
            .map(|&rule| RuleOutcome {
                rule,
                met: rule.is_met(value),
            })
            .collect::<Vec<_>>();
        let score = Score(rules.iter().filter(|outcome| outcome.met).count() as u8);
        log::debug!(
            "assessed a candidate of length {}: score {}",
            utf16_len(value),
            score
        );
        Assessment {
            score,
            percent: score.percent(),
            tier: score.tier(),
            rules,
        }
    }
}

/// The strength indicator's fill: a width in percent and a color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StrengthBar {
    width_percent: u8,
    tier: Tier,
}

impl Default for StrengthBar {
    fn default() -> StrengthBar {
        StrengthBar {
            width_percent: 0,
            tier: Tier::Weak,
        }
    }
}

impl StrengthBar {
    pub fn render(&mut self, assessment: &Assessment) {
        self.width_percent = assessment.percent;
        self.tier = assessment.tier;
    }

    pub fn width_percent(&self) -> u8 {
        self.width_percent
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn color(&self) -> &'static str {
        self.tier.color()
    }

    /// Number of filled cells when the bar is drawn `cells` wide.
    pub fn filled_cells(&self, cells: usize) -> usize {
        cells * usize::from(self.width_percent) / 100
    }
}
