use anyhow::{bail, Result};
use clap::Parser;
use sgorm::Model;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct CheckCommand {}

impl CheckCommand {
    pub(crate) fn run<W: Write>(self, models: &[Model], out: &mut W) -> Result<()> {
        let mut invalid = 0;

        for model in models {
            let issues = model.lint_issues();

            if issues.is_empty() {
                writeln!(out, "  ✓ {}", model.name())?;
                continue;
            }

            invalid += 1;
            for issue in issues {
                writeln!(out, "  ✗ {}: {issue}", model.name())?;
            }
        }

        if invalid > 0 {
            bail!("{invalid} of {} models have declaration issues", models.len());
        }

        Ok(())
    }
}
