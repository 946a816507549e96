use std::sync::Arc;

use crate::analysis::{ContentAnalyzer, GeminiAnalyzer};
use crate::config::AppConfig;
use crate::error::BotResult;
use crate::pipeline::{self, ResultEnvelope};
use crate::provider::{ProviderClient, TeraboxClient};

/// Shared application state, constructed once at process start and read-only
/// afterwards. Passed explicitly to both transports.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub resolver: Arc<dyn ProviderClient>,
    pub analyzer: Option<Arc<dyn ContentAnalyzer>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> BotResult<Self> {
        let resolver: Arc<dyn ProviderClient> = Arc::new(TeraboxClient::new(&config.terabox)?);

        let analyzer: Option<Arc<dyn ContentAnalyzer>> = match &config.gemini {
            Some(gemini) => {
                info!("Content analysis enabled (model {})", gemini.model);
                Some(Arc::new(GeminiAnalyzer::new(gemini)?))
            }
            None => None,
        };

        Ok(Self {
            config,
            resolver,
            analyzer,
        })
    }

    /// Runs one conversion and assembles the envelope. Analysis runs only on
    /// success, only when requested and configured; its failure is logged and
    /// dropped rather than failing the conversion.
    pub async fn convert(&self, raw_url: &str, analyze: bool) -> ResultEnvelope {
        let outcome = pipeline::convert(self.resolver.as_ref(), raw_url).await;

        let analysis = match (&outcome, analyze, &self.analyzer) {
            (Ok(conversion), true, Some(analyzer)) => {
                match analyzer.analyze(conversion.descriptor()).await {
                    Ok(text) => Some(text),
                    Err(e) => {
                        warn!("content analysis failed: {}", e);
                        None
                    }
                }
            }
            _ => None,
        };

        ResultEnvelope::assemble(outcome).with_analysis(analysis)
    }
}
