use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::conversion::{convert_intermediate_to_final, convert_legacy_to_intermediate};
use crate::delimited::DelimitedFormat;
use crate::file_utils::FileManager;
use crate::providers::Provider;
use crate::translation::{TableTranslationStats, TableTranslator, TranslationService};

// @module: Application controller for the conversion pipeline

/// Summary of one completed pipeline run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineReport {
    /// What happened to each translated value
    pub stats: TableTranslationStats,
    /// Wall time of the run
    pub elapsed: Duration,
}

/// Main application controller: workbook → delimited → translated → workbook
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Draw a progress bar while translating
    show_progress: bool,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        Ok(Self {
            config,
            show_progress: false,
        })
    }

    /// Enable or disable the translation progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the pipeline with the provider named in the configuration
    pub async fn run(&self) -> Result<PipelineReport> {
        let service = TranslationService::from_config(&self.config)
            .context("Failed to create the translation provider")?;

        info!(
            "Translating with {} ({} -> {})",
            self.config.translation.provider.display_name(),
            self.config.source_language,
            self.config.target_language
        );

        self.run_with_service(&service).await
    }

    /// Run the pipeline with an explicit translation service
    pub async fn run_with_service<P: Provider>(&self, service: &TranslationService<P>) -> Result<PipelineReport> {
        let start_time = Instant::now();
        let paths = &self.config.paths;
        let format = DelimitedFormat::from_config(&self.config.intermediate);

        if !FileManager::detect_file_type(&paths.input).is_workbook() {
            warn!("Input {:?} does not have a workbook extension, trying anyway", paths.input);
        }

        for path in [&paths.intermediate, &paths.translated, &paths.output] {
            FileManager::ensure_parent_dir(path)?;
        }

        convert_legacy_to_intermediate(
            &paths.input,
            &paths.intermediate,
            &format,
            &self.config.intermediate.missing_token,
        )
        .context("Failed to convert the input workbook")?;

        if self.config.translation.check_connection {
            // A dead provider is not fatal; every value it would have translated ends up empty
            if let Err(e) = service.test_connection().await {
                warn!(
                    "Translation provider did not answer a {} -> {} test request: {}",
                    service.source_language(),
                    service.target_language(),
                    e
                );
            }
        }

        let mut translator = TableTranslator::new(service);
        if self.show_progress {
            translator = translator.with_progress_bar();
        }
        let stats = translator
            .translate_file(&paths.intermediate, &paths.translated, &format)
            .await
            .context("Failed to translate the intermediate table")?;

        convert_intermediate_to_final(&paths.translated, &paths.output, &format, &self.config.output)
            .context("Failed to write the output workbook")?;

        if paths.keep_intermediate {
            debug!("Keeping intermediate files {:?} and {:?}", paths.intermediate, paths.translated);
        } else {
            self.delete_intermediate_files();
        }

        if service.cache.is_enabled() {
            let (hits, misses, hit_rate) = service.cache.stats();
            debug!("Translation cache: {} hits, {} misses ({:.0}% hit rate)", hits, misses, hit_rate * 100.0);
        }

        let elapsed = start_time.elapsed();
        info!(
            "Translation of chinese files {} to {} has been done successfully in {}.",
            paths.input.display(),
            paths.output.display(),
            Self::format_duration(elapsed)
        );

        Ok(PipelineReport { stats, elapsed })
    }

    /// Remove both intermediate files; every failure is ignored
    pub fn delete_intermediate_files(&self) {
        let paths = &self.config.paths;
        let removed_intermediate = FileManager::remove_file_best_effort(&paths.intermediate);
        let removed_translated = FileManager::remove_file_best_effort(&paths.translated);

        if removed_intermediate && removed_translated {
            debug!(
                "Intermediate files {:?} and {:?} deleted successfully.",
                paths.intermediate, paths.translated
            );
        }
    }

    /// Format a duration as `1h 2m 3s`, `2m 3s` or `3.4s`
    pub fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
