use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;

use topogen::config;
use topogen::emit;
use topogen::registry::{TopologyParams, TopologyRegistry};
use topogen::render;

/// Generates switch/host/link topology declarations for network emulators
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Topology type to generate (see --list for known types)
    #[arg(short, long, conflicts_with = "config")]
    topology: Option<String>,

    /// Named generator parameter, repeatable (e.g. -P r=2 -P h=3)
    #[arg(short = 'P', long = "param", value_name = "KEY=VALUE")]
    params: Vec<String>,

    /// Path to a topology configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for random topologies
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for the emitted declaration files
    #[arg(short, long, default_value = "topology_output")]
    output: PathBuf,

    /// Output format for the declaration file
    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// Also emit a Graphviz DOT rendering of the topology
    #[arg(long)]
    dot: bool,

    /// List known topology types and exit
    #[arg(long)]
    list: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let registry = TopologyRegistry::defaults();

    if args.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    // Resolve topology selection from the config file or from flags;
    // flag-provided params and seed take precedence over the file.
    let (name, mut params, mut seed) = match &args.config {
        Some(path) => {
            let config = config::load_config(path)?;
            (config.topology.clone(), config.params(), config.seed)
        }
        None => {
            let name = args
                .topology
                .clone()
                .ok_or_else(|| eyre!("either --topology or --config is required"))?;
            (name, TopologyParams::new(), None)
        }
    };
    if !args.params.is_empty() {
        params = TopologyParams::parse_pairs(&args.params)?;
    }
    if args.seed.is_some() {
        seed = args.seed;
    }

    info!("Generating '{}' topology", name);
    let topology = registry
        .build(&name, &params, seed)
        .wrap_err_with(|| format!("Failed to build topology '{}'", name))?;

    fs::create_dir_all(&args.output).wrap_err_with(|| {
        format!("Failed to create output directory '{}'", args.output.display())
    })?;

    let declarations_path = match args.format {
        Format::Yaml => emit::write_topology_yaml(&topology, &args.output)?,
        Format::Json => emit::write_topology_json(&topology, &args.output)?,
    };

    if args.dot {
        render::write_dot(&topology, &args.output.join("topology.dot"))?;
    }

    info!(
        "Generated topology: {} switches, {} hosts, {} links",
        topology.switch_count(),
        topology.host_count(),
        topology.link_count()
    );
    info!("Declarations ready for the emulator at {:?}", declarations_path);
    Ok(())
}
