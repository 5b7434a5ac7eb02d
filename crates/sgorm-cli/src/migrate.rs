use anyhow::{bail, Result};
use clap::Parser;
use sgorm::{Model, Registry};
use std::io::Write;

#[derive(Parser, Debug)]
pub struct MigrateCommand {
    /// Name of the database configuration to migrate. Defaults to the
    /// configuration's `use` entry.
    #[arg(short, long)]
    database: Option<String>,
}

impl MigrateCommand {
    pub(crate) async fn run<W: Write + Send>(
        self,
        registry: &Registry,
        models: &[Model],
        out: &mut W,
    ) -> Result<()> {
        let db = match &self.database {
            Some(name) => registry.connection(name).await?,
            None => registry.default_connection().await?,
        };

        writeln!(out, "Migrating database `{}`", db.name())?;

        let mut failed = 0;

        // A failing model does not stop the others
        for model in models {
            match db.sync(model).await {
                Ok(report) => writeln!(out, "  ✓ {report}")?,
                Err(err) => {
                    tracing::error!(model = model.name(), error = %err, "migration failed");
                    writeln!(out, "  ✗ {}: {err}", model.name())?;
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            bail!("{failed} of {} models failed to migrate", models.len());
        }

        Ok(())
    }
}
