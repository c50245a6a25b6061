//! Update gist use case

use crate::domain::{
    attribution_suffix, compose_content, format_rfc1123, load_time_zone, Quote, DEFAULT_TIME_ZONE,
};
use crate::error::Result;
use crate::infrastructure::{Config, GistStore, QuoteSource, ScriptConverter};
use chrono::{DateTime, Utc};
use tracing::info;

/// What a successful run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub gist_id: String,
    pub file_name: String,
    pub content: String,
    /// The file did not exist in the gist before this run
    pub created_file: bool,
}

/// Service running fetch, convert and update in sequence
pub struct UpdateGistService<Q, C, G> {
    quotes: Q,
    converter: C,
    gists: G,
    time_zone: String,
}

impl<Q, C, G> UpdateGistService<Q, C, G>
where
    Q: QuoteSource,
    C: ScriptConverter,
    G: GistStore,
{
    /// Create a new update service rendering timestamps in [`DEFAULT_TIME_ZONE`]
    pub fn new(quotes: Q, converter: C, gists: G) -> Self {
        UpdateGistService {
            quotes,
            converter,
            gists,
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_time_zone(mut self, time_zone: &str) -> Self {
        self.time_zone = time_zone.to_string();
        self
    }

    /// Fetch a quote and convert it, without touching the gist
    pub fn converted_quote(&self, config: &Config) -> Result<Quote> {
        info!(categories = config.categories.codes().len(), "fetching quote");
        let quote = self.quotes.fetch(&config.categories)?;

        Ok(Quote {
            text: self.converter.convert(&quote.text)?,
            source_work: self.converter.convert(&quote.source_work)?,
            source_author: self.converter.convert(&quote.source_author)?,
        })
    }

    /// Compose file content for a converted quote at `now`
    pub fn render(&self, quote: &Quote, now: DateTime<Utc>) -> Result<String> {
        let zone = load_time_zone(&self.time_zone)?;
        let timestamp = format_rfc1123(now, zone);
        let suffix = attribution_suffix(quote.attribution());

        Ok(compose_content(&quote.text, &suffix, &timestamp))
    }

    /// Content the next update would write, stamped with the current time
    pub fn preview(&self, config: &Config) -> Result<String> {
        let quote = self.converted_quote(config)?;
        self.render(&quote, Utc::now())
    }

    /// Run the whole pipeline, stamping the content with the current time
    pub fn execute(&self, config: &Config) -> Result<UpdateOutcome> {
        self.execute_at(config, Utc::now())
    }

    /// Run the whole pipeline with a fixed clock
    pub fn execute_at(&self, config: &Config, now: DateTime<Utc>) -> Result<UpdateOutcome> {
        // 1-2. Quote in the target script
        let quote = self.converted_quote(config)?;

        // 3. Current gist
        info!(gist = %config.gist_id, "retrieving gist");
        let mut gist = self.gists.get(&config.gist_id)?;

        // 4. Content
        let content = self.render(&quote, now)?;

        // 5. Rewrite the one file
        let existed = gist.set_file_content(&config.file_name, content.clone());
        if !existed {
            info!(
                file = %config.file_name,
                gist = %config.gist_id,
                "file not found in gist, it will be created"
            );
        }

        // 6. Push the whole document back
        self.gists.edit(&config.gist_id, &gist)?;
        info!(gist = %config.gist_id, file = %config.file_name, "gist updated");

        Ok(UpdateOutcome {
            gist_id: config.gist_id.clone(),
            file_name: config.file_name.clone(),
            content,
            created_file: !existed,
        })
    }
}
