//! Command orchestration: contributions, theme application, compilation.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use filicon_common::{FiliconError, ThemeContribution};
use filicon_config::FiliconConfig;
use filicon_style::{
    FileSink, StylesheetCompiler, StylesheetOptions, StylesheetSink, WriterSink,
    DEFAULT_FONT_FORMAT,
};
use filicon_theme::{
    collect_contributions, ContributionSource, DirectoryContributions, FontSource,
    IconClassResolver, IconTheme, StaticContributions, ThemeManager, ThemeReloader,
};
use tracing::{error, info, warn};

use crate::cli::Command;

pub struct App {
    config: FiliconConfig,
    theme_id: String,
    cli_contributions: Vec<ThemeContribution>,
    manager: Arc<ThemeManager>,
    compiler: StylesheetCompiler,
    resolver: IconClassResolver,
}

impl App {
    pub fn new(
        config: FiliconConfig,
        theme_override: Option<String>,
        cli_contributions: Vec<ThemeContribution>,
    ) -> Self {
        let theme_id = theme_override.unwrap_or_else(|| config.theme.id.clone());
        let compiler = StylesheetCompiler::new(stylesheet_options(&config));
        let resolver = IconClassResolver::new(config.stylesheet.primary_class.clone());

        Self {
            config,
            theme_id,
            cli_contributions,
            manager: Arc::new(ThemeManager::new()),
            compiler,
            resolver,
        }
    }

    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    /// Command line first, then the config list, then the themes directory.
    pub async fn contributions(&self) -> Vec<ThemeContribution> {
        let mut sources: Vec<Box<dyn ContributionSource>> = vec![
            Box::new(StaticContributions::new("cli", self.cli_contributions.clone())),
            Box::new(StaticContributions::new("config", self.config.contributions.clone())),
        ];
        if let Some(dir) = &self.config.theme.themes_dir {
            sources.push(Box::new(DirectoryContributions::new(dir.clone())));
        }
        collect_contributions(&sources).await
    }

    /// Apply the selected theme. An unknown id is an error at this level.
    pub async fn apply(
        &self,
        contributions: &[ThemeContribution],
    ) -> Result<Arc<IconTheme>, FiliconError> {
        self.manager
            .apply_theme(&self.theme_id, contributions)
            .await?
            .ok_or_else(|| {
                FiliconError::Other(format!(
                    "no icon theme contribution with id '{}'",
                    self.theme_id
                ))
            })
    }

    pub fn compile(&self, theme: &IconTheme) -> String {
        self.compiler.compile(theme)
    }

    pub fn resolve(&self, file_name: &str, language: Option<&str>) -> Option<String> {
        self.manager
            .resolve_icon_class(&self.resolver, file_name, language)
    }

    /// Where stylesheets go: explicit flag, then config, then stdout.
    pub fn sink(&self, output: Option<PathBuf>) -> Box<dyn StylesheetSink + Send> {
        match output.or_else(|| self.config.stylesheet.output.clone()) {
            Some(path) => Box::new(FileSink::new(path)),
            None => Box::new(WriterSink::new(std::io::stdout())),
        }
    }

    /// Run one command. Only `watch` keeps running after its first result.
    pub async fn run(&self, command: Command) -> Result<(), FiliconError> {
        match command {
            Command::Compile { output } => self.run_compile(output).await,
            Command::Resolve { files, language } => {
                self.run_resolve(&files, language.as_deref()).await
            }
            Command::Watch { output } => self.run_watch(output).await,
            Command::List => self.run_list().await,
        }
    }

    pub async fn run_compile(&self, output: Option<PathBuf>) -> Result<(), FiliconError> {
        let contributions = self.contributions().await;
        let theme = self.apply(&contributions).await?;
        let mut sink = self.sink(output);
        sink.attach(&self.compile(&theme))?;
        Ok(())
    }

    pub async fn run_resolve(
        &self,
        files: &[String],
        language: Option<&str>,
    ) -> Result<(), FiliconError> {
        let contributions = self.contributions().await;
        self.apply(&contributions).await?;
        for file in files {
            let class = self.resolve(file, language);
            println!("{file}\t{}", class.as_deref().unwrap_or("-"));
        }
        Ok(())
    }

    pub async fn run_list(&self) -> Result<(), FiliconError> {
        for c in self.contributions().await {
            let marker = if c.id == self.theme_id { "*" } else { " " };
            println!("{marker} {}\t{}", c.id, c.path.display());
        }
        Ok(())
    }

    /// Compile once, then recompile on every theme change until Ctrl-C.
    pub async fn run_watch(&self, output: Option<PathBuf>) -> Result<(), FiliconError> {
        let contributions = self.contributions().await;
        let sink = Arc::new(Mutex::new(self.sink(output)));

        let subscription = {
            let manager = Arc::downgrade(&self.manager);
            let compiler = self.compiler.clone();
            let sink = Arc::clone(&sink);
            self.manager.subscribe(move || {
                let Some(theme) = manager.upgrade().and_then(|m| m.active_theme()) else {
                    return;
                };
                let css = compiler.compile(&theme);
                let mut sink = sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                if let Err(e) = sink.attach(&css) {
                    error!("failed to deliver icon stylesheet: {e}");
                }
            })
        };

        if let Err(e) = self.apply(&contributions).await {
            subscription.unsubscribe();
            return Err(e);
        }

        let reloader = ThemeReloader::new(
            Arc::clone(&self.manager),
            self.theme_id.clone(),
            contributions,
        );
        let handle = reloader.spawn();
        info!(theme_id = %self.theme_id, "watching icon theme, press Ctrl-C to stop");

        let result = tokio::signal::ctrl_c().await;
        handle.abort();
        subscription.unsubscribe();
        result.map_err(FiliconError::from)
    }
}

/// Build compiler options from the `[stylesheet]` section.
pub fn stylesheet_options(config: &FiliconConfig) -> StylesheetOptions {
    let style = &config.stylesheet;
    let font_source = style.font_path.as_ref().map(|path| {
        let format = style
            .font_format
            .clone()
            .unwrap_or_else(|| DEFAULT_FONT_FORMAT.to_string());
        FontSource::new(path.clone(), format)
    });
    if style.font_format.is_some() && style.font_path.is_none() {
        warn!("stylesheet.font_format has no effect without stylesheet.font_path");
    }

    StylesheetOptions {
        primary_class: style.primary_class.clone(),
        font_family: style.font_family.clone(),
        font_source,
    }
}
