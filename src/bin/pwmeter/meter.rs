//! Non-interactive commands: scoring a typed password and printing generated ones.

use std::io::{self, Write};

use anyhow::Context;
use console::{style, Color};
use pwmeter::strength::RuleOutcome;
use pwmeter::{Assessment, StrengthBar, Tier};

use crate::table::{display_table, TableRow};
use crate::ProgError;

const BAR_CELLS: usize = 20;

pub(crate) fn check(json: bool) -> Result<(), ProgError> {
    let password = pwmeter::Secret::from(
        rpassword::prompt_password("Password: ").context("failed to read password from TTY")?,
    );
    let assessment = Assessment::of(password.as_str());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &assessment)
            .context("failed to write the assessment as JSON")?;
        writeln!(out).context("failed to write to stdout")?;
        return Ok(());
    }

    writeln!(out, "{}", summary_line(&assessment)).context("failed to write to stdout")?;
    writeln!(out).context("failed to write to stdout")?;
    let rows = assessment.rules.iter().copied().map(RuleRow).collect::<Vec<_>>();
    display_table(&rows, &mut out).context("failed to write to stdout")?;
    Ok(())
}

pub(crate) fn generate(
    config: &pwmeter::Config,
    length: Option<usize>,
    count: usize,
) -> Result<(), ProgError> {
    if count == 0 {
        return Err(ProgError::ZeroCount);
    }
    let mut generator = config.generator()?;
    if let Some(length) = length {
        generator = generator.with_length(length)?;
    }

    let mut rng = rand::thread_rng();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..count {
        let password = generator.generate(&mut rng);
        let assessment = Assessment::of(password.as_str());
        writeln!(out, "{}  {}", password.as_str(), summary_line(&assessment))
            .context("failed to write to stdout")?;
    }
    Ok(())
}

/// `[████████░░] 80% strong (4/5)`, colored by tier.
pub(crate) fn summary_line(assessment: &Assessment) -> String {
    let mut bar = StrengthBar::default();
    bar.render(assessment);
    format!(
        "{} {:>3}% {} ({})",
        draw_bar(&bar),
        bar.width_percent(),
        style(bar.tier()).fg(tier_color(bar.tier())),
        assessment.score
    )
}

pub(crate) fn draw_bar(bar: &StrengthBar) -> String {
    let filled = bar.filled_cells(BAR_CELLS);
    format!(
        "[{}{}]",
        style("█".repeat(filled)).fg(tier_color(bar.tier())),
        "░".repeat(BAR_CELLS - filled)
    )
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Weak => Color::Red,
        // 256-color orange
        Tier::Fair => Color::Color256(208),
        Tier::Good => Color::Yellow,
        Tier::Strong => Color::Green,
    }
}

struct RuleRow(RuleOutcome);

impl TableRow for RuleRow {
    const HEADERS: &'static [&'static str] = &["Rule", "Met"];

    fn cell(&self, column_index: usize) -> &str {
        match column_index {
            0 => self.0.rule.description(),
            1 if self.0.met => "yes",
            1 => "no",
            _ => unreachable!("rule table has two columns"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_rows_show_description_and_outcome() {
        let assessment = Assessment::of("abcdef1");
        let rows = assessment.rules.iter().copied().map(RuleRow).collect::<Vec<_>>();
        assert_eq!(rows[0].cell(0), "at least 6 characters");
        assert_eq!(rows[0].cell(1), "yes");
        assert_eq!(rows[2].cell(1), "no");
    }

    #[test]
    #[should_panic(expected = "rule table has two columns")]
    fn rule_rows_have_two_columns() {
        RuleRow(Assessment::of("").rules[0]).cell(2);
    }
}
