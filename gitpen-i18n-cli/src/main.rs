//! gitpen-i18n: command-line host for the GitPen i18n service
//!
//! Wires configuration, logging, the preference file and the system language
//! into `I18nService` and exposes its operations as subcommands.
//!
//! Diagnostics go to stderr; command output goes to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gitpen_i18n_app::{AppConfig, I18nApp, I18nAppBuilder};
use gitpen_i18n_core::catalog::welcome_document;
use gitpen_i18n_core::error::I18nError;
use gitpen_i18n_core::services::detect_browser_language;
use gitpen_i18n_core::types::{Locale, SUPPORTED_LOCALES};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "gitpen-i18n")]
#[command(version)]
#[command(about = "Locale detection, preference and translation lookup for GitPen")]
#[command(long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/gitpen/i18n.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Host language tag, overrides the system language
    #[arg(long, global = true, value_name = "TAG")]
    lang: Option<String>,

    /// Preference store file, overrides the configured one
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the active locale (saved preference, else detected) and print it
    Init,

    /// Switch to a supported locale and save it
    Set {
        /// Locale code (en, ja, zh-TW, zh-CN)
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Translate a key in the active locale
    T {
        /// Dot-separated key path, e.g. common.cancel
        #[arg(value_name = "KEY")]
        key: String,

        /// Interpolation parameter
        #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Translate in this locale instead of the active one
        #[arg(short, long, value_name = "CODE")]
        locale: Option<String>,
    },

    /// List supported locales as JSON
    Locales,

    /// Print the active locale and its source as JSON
    Info,

    /// Map a language tag to a supported locale
    Detect {
        /// BCP 47 language tag, e.g. zh-Hant-HK
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// Report catalog keys served by the English fallback
    Audit {
        /// List the missing keys
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the welcome document
    Welcome {
        /// Locale code (default: active locale)
        #[arg(short, long, value_name = "CODE")]
        locale: Option<String>,
    },

    /// Remove the saved locale preference
    Reset,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{raw}`")),
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref());
    init_tracing(config.as_ref().map_or("warn", AppConfig::log_level));

    let result = config
        .context("Failed to load config")
        .and_then(|config| run(cli, config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

/// Whether the failure stems from user input rather than a fault.
fn is_expected_failure(err: &anyhow::Error) -> bool {
    err.downcast_ref::<I18nError>()
        .is_some_and(I18nError::is_expected)
}

fn report_failure(err: &anyhow::Error) {
    if is_expected_failure(err) {
        tracing::warn!("{err:#}");
    } else {
        tracing::error!("{err:#}");
    }
}

fn build_app(cli: &Cli, mut config: AppConfig) -> Result<I18nApp> {
    if let Some(store) = &cli.store {
        config.store_path = Some(store.clone());
    }
    if let Some(lang) = &cli.lang {
        config.language = Some(lang.clone());
    }
    tracing::debug!("Preference store: {}", config.store_path().display());

    I18nAppBuilder::from_config(&config)
        .build()
        .context("Failed to build i18n service")
}

fn parse_locale(code: &str) -> Result<Locale> {
    code.parse::<Locale>().with_context(|| {
        let supported: Vec<&str> = SUPPORTED_LOCALES.iter().map(|info| info.code).collect();
        format!("Supported locales: {}", supported.join(", "))
    })
}

fn run(cli: Cli, config: AppConfig) -> Result<()> {
    match &cli.command {
        Commands::Detect { tag } => {
            println!("{}", detect_browser_language(Some(tag)));
            return Ok(());
        }
        Commands::Locales => {
            println!("{}", serde_json::to_string_pretty(&SUPPORTED_LOCALES)?);
            return Ok(());
        }
        _ => {}
    }

    let app = build_app(&cli, config)?;
    let service = &app.service;

    match cli.command {
        Commands::Init => {
            println!("{}", app.run_startup());
        }
        Commands::Set { code } => {
            let locale = parse_locale(&code)?;
            if !service.set_locale(locale.code()) {
                bail!("Failed to switch to {code}");
            }
            println!("{locale}");
        }
        Commands::T {
            key,
            params,
            locale,
        } => {
            let params: Vec<(&str, &str)> = params
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            let text = match locale {
                Some(code) => service.translate(&key, parse_locale(&code)?, &params),
                None => {
                    app.run_startup();
                    service.t_with(&key, &params)
                }
            };
            println!("{text}");
        }
        Commands::Info => {
            let locale = app.run_startup();
            let info = serde_json::json!({
                "locale": locale.info(),
                "hostLanguage": app.host_language(),
                "detected": detect_browser_language(app.host_language().as_deref()),
                "storageKey": service.storage_key(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Audit { verbose } => {
            let catalog = service.catalog();
            let mut violations = 0;
            for locale in Locale::all() {
                let missing = catalog.missing_keys(*locale);
                let extra = catalog.extra_keys(*locale);
                println!(
                    "{locale}: {} keys, {} missing, {} extra",
                    catalog.keys(*locale).len(),
                    missing.len(),
                    extra.len()
                );
                if verbose {
                    for key in &missing {
                        println!("  missing {key}");
                    }
                }
                for key in &extra {
                    println!("  extra   {key}");
                }
                violations += extra.len();
            }
            if violations > 0 {
                bail!("{violations} key(s) are missing from the English catalog");
            }
        }
        Commands::Welcome { locale } => {
            let document = match locale {
                Some(code) => welcome_document(Some(&code)),
                None => {
                    app.run_startup();
                    service.welcome_document()
                }
            };
            print!("{document}");
        }
        Commands::Reset => {
            if !service.clear_saved_locale() {
                bail!("Failed to remove the saved locale preference");
            }
            println!("Saved locale preference removed");
        }
        Commands::Detect { .. } | Commands::Locales => {}
    }

    Ok(())
}
