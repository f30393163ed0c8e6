use crate::core::strategy::DefaultStrategy;
use crate::core::{RecordSource, TeamRecord};
use crate::utils::error::{AppError, Result};
use std::io::Write;

/// Fetches one record once per strategy and prints each result as a JSON line.
pub struct Showcase<S: RecordSource> {
    source: S,
    record_id: String,
    strategies: Vec<DefaultStrategy>,
}

impl<S: RecordSource> Showcase<S> {
    pub fn new(source: S, record_id: impl Into<String>) -> Self {
        Self {
            source,
            record_id: record_id.into(),
            strategies: DefaultStrategy::ALL.to_vec(),
        }
    }

    /// Run only these strategies, in this order. An empty list keeps all three.
    pub fn with_strategies(mut self, strategies: Vec<DefaultStrategy>) -> Self {
        if !strategies.is_empty() {
            self.strategies = strategies;
        }
        self
    }

    pub fn strategies(&self) -> &[DefaultStrategy] {
        &self.strategies
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn fetch(&self, strategy: DefaultStrategy) -> Result<TeamRecord> {
        tracing::debug!("Querying _id {} ({})", self.record_id, strategy);
        let document = self
            .source
            .find_by_id(&self.record_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                id: self.record_id.clone(),
            })?;

        strategy.decode(document)
    }

    /// Writes one line per strategy. Stops at the first error.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut written = 0;

        for strategy in &self.strategies {
            let record = self.fetch(*strategy).await?;
            let line = serde_json::to_string(&record)?;
            writeln!(out, "{}", line)?;
            written += 1;

            tracing::info!(
                "{} -> {} developer(s) for _id {}",
                strategy,
                record.dev_team.len(),
                record.id
            );
        }

        out.flush()?;
        Ok(written)
    }

    /// Ping, run every strategy, then disconnect. The source is released
    /// on every path, including a failed ping.
    pub async fn execute<W: Write>(&self, out: &mut W) -> Result<usize> {
        let result = match self.source.ping().await {
            Ok(()) => self.run(out).await,
            Err(e) => Err(e),
        };

        self.source.disconnect().await;
        result
    }
}
