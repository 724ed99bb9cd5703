// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Profile controller: plugin resolution
//
//  Config:  YAML file + PROFILE_* env overrides
//  Store:   in-memory (seeded from a ConfigMap manifest) / etcd
//  Output:  the plugin set and service-account annotations, as JSON
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use anyhow::Context;
use clap::Parser;
use profile_core::config::{ControllerConfig, StoreMode};
use profile_plugin::plugin::DEFAULT_EDITOR_SERVICE_ACCOUNT;
use profile_plugin::{PluginFactory, ResolvedPlugins, resolve_plugins};
use profile_store::{ConfigLoader, ConfigMapStore, MemoryStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "profile-controller", version, about = "Resolve identity plugins for a profile")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "/etc/profile-controller/config.yaml")]
    config: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// ConfigMap manifest to seed the in-memory store with
    #[arg(long)]
    configmap_file: Option<PathBuf>,

    /// Profile the plugins are resolved for
    #[arg(long, default_value = "default-profile")]
    profile: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Tracing ── (stderr, stdout carries the JSON result)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Profile controller starting");

    // ── Config ──
    let config = if cli.config.exists() {
        info!(path = %cli.config.display(), "Loading config file");
        ControllerConfig::load(&cli.config)?
    } else {
        info!("No config file found, using defaults");
        ControllerConfig::default()
    };

    // ── Store + loader ──
    let loader = match open_store(&config, &cli).await? {
        Some(store) => {
            info!(backend = store.backend(), "Config store ready");
            ConfigLoader::new(store)
        }
        None => ConfigLoader::without_store(),
    }
    .with_source(config.plugins_source.configmap.clone())
    .with_fetch_timeout(config.fetch_timeout());

    // ── Plugin registry ──
    let registry = profile_plugins::builtin_registry();
    info!(plugins = registry.len(), "Plugins registered");
    let factory = PluginFactory::new(Arc::new(registry));

    let resolved = resolve_plugins(&loader, &factory, &config.default_plugins).await?;
    let report = render(&cli.profile, &config, &resolved);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn open_store(
    config: &ControllerConfig,
    cli: &Cli,
) -> anyhow::Result<Option<Arc<dyn ConfigMapStore>>> {
    match config.store.mode {
        StoreMode::Memory => match &cli.configmap_file {
            Some(path) => {
                let store = MemoryStore::from_manifest(path)
                    .with_context(|| format!("seeding store from {}", path.display()))?;
                Ok(Some(Arc::new(store)))
            }
            None => Ok(None),
        },
        StoreMode::Etcd => open_etcd(config).await,
    }
}

#[cfg(feature = "etcd")]
async fn open_etcd(config: &ControllerConfig) -> anyhow::Result<Option<Arc<dyn ConfigMapStore>>> {
    let etcd = config
        .store
        .etcd
        .as_ref()
        .context("store.mode is etcd but no store.etcd block is configured")?;
    let store = profile_store::etcd::EtcdStore::connect(etcd).await?;
    Ok(Some(Arc::new(store)))
}

#[cfg(not(feature = "etcd"))]
async fn open_etcd(_config: &ControllerConfig) -> anyhow::Result<Option<Arc<dyn ConfigMapStore>>> {
    anyhow::bail!("store.mode is etcd but this build lacks the `etcd` feature")
}

fn render(profile: &str, config: &ControllerConfig, resolved: &ResolvedPlugins) -> serde_json::Value {
    let plugins: Vec<_> = resolved
        .plugins
        .iter()
        .map(|p| {
            serde_json::json!({
                "kind": p.kind(),
                "managesCloudIam": p.manages_cloud_iam(),
            })
        })
        .collect();
    let skipped: Vec<_> = resolved.skipped.iter().map(|s| format!("{s:?}")).collect();

    serde_json::json!({
        "profile": profile,
        "source": format!("{:?}", resolved.source),
        "serviceAccount": DEFAULT_EDITOR_SERVICE_ACCOUNT,
        "annotations": resolved.service_account_annotations(),
        "plugins": plugins,
        "skipped": skipped,
        "clusterAdmins": config.cluster_admins(),
    })
}
