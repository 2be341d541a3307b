use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use steppe_camera::CameraPath;
use steppe_render::{DebugTextRenderer, Renderer};
use steppe_scene::Scene;
use steppe_vignette::{Vignette, VignetteConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "steppe-cli", about = "CLI tool for the steppe vignette")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Sample the camera path at evenly spaced scroll offsets
    Path {
        /// Number of samples, endpoints included
        #[arg(short, long, default_value = "11")]
        samples: usize,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
        /// YAML config with a custom camera path
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Describe the frame seen at one scroll offset
    Frame {
        /// Scroll progress in [0, 1]
        #[arg(short, long, default_value = "0")]
        progress: f32,
        /// YAML config overriding the defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Parse and validate a YAML config
    CheckConfig {
        /// Path to the config file
        path: PathBuf,
    },
    /// Print the default config as YAML
    DefaultConfig,
}

#[derive(Serialize)]
struct PathSample<'a> {
    progress: f32,
    phase: &'a str,
    position: [f32; 3],
    look_at: [f32; 3],
}

fn load_config(path: Option<&Path>) -> anyhow::Result<VignetteConfig> {
    match path {
        Some(path) => VignetteConfig::load(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(VignetteConfig::default()),
    }
}

fn print_path(path: &CameraPath, samples: usize, json: bool) -> anyhow::Result<()> {
    let states = path.samples(samples);
    if json {
        let rows: Vec<PathSample<'_>> = states
            .iter()
            .map(|s| PathSample {
                progress: s.scroll_progress,
                phase: &path.phase(s.scroll_progress).name,
                position: s.position.to_array(),
                look_at: s.look_at.to_array(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:>8}  {:<10} {:>8} {:>8}", "progress", "phase", "y", "z");
    for s in &states {
        println!(
            "{:>8.3}  {:<10} {:>8.2} {:>8.2}",
            s.scroll_progress,
            path.phase(s.scroll_progress).name,
            s.position.y,
            s.position.z
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            let config = VignetteConfig::default();
            let scene = Scene::steppe_yurt();
            println!("steppe-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", steppe_render::crate_info());
            println!(
                "camera: {} phases, look-at {}",
                config.camera_path.phases().len(),
                steppe_camera::LOOK_AT_TARGET
            );
            println!(
                "scroll: {} pages, damping {}",
                config.scroll.pages, config.scroll.damping
            );
            println!("scene: {} nodes", scene.nodes().len());
        }
        Commands::Path {
            samples,
            json,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            print_path(&config.camera_path, samples, json)?;
        }
        Commands::Frame { progress, config } => {
            let mut config = load_config(config.as_deref())?;
            // Settle on the requested offset in a single frame.
            config.scroll.damping = 0.0;
            let mut vignette = Vignette::new(&config, 1280, 720)?;
            vignette.scroll_to(progress);
            let frame = vignette.frame(0.0);
            tracing::debug!(frame = frame.frame, phase = frame.phase, "rendered frame");

            let phase = &vignette.path().phases()[frame.phase];
            println!(
                "progress={:.3} phase={}",
                frame.camera.scroll_progress, phase.name
            );
            print!(
                "{}",
                DebugTextRenderer::new().render(vignette.scene(), &vignette.render_view())
            );
        }
        Commands::CheckConfig { path } => {
            let config = load_config(Some(&path))?;
            println!(
                "{}: ok ({} camera phases, {} pages)",
                path.display(),
                config.camera_path.phases().len(),
                config.scroll.pages
            );
        }
        Commands::DefaultConfig => {
            print!("{}", VignetteConfig::default().to_yaml_string()?);
        }
    }

    Ok(())
}
