use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use treelist::app::{DataSource, TreeList};
use treelist::config::Config;
use treelist::model::parse_nodes;
use treelist::view::HeightMode;
use treelist::logging;

const SAMPLE_DATA: &str = include_str!("../demos/sample.json");

#[derive(Parser, Debug)]
#[command(name = "treelist", version, about = "Browse large JSON trees one level at a time")]
struct Cli {
    /// JSON file with an array of nodes; the bundled sample is shown if omitted
    data: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = logging::DEFAULT_LEVEL)]
    log_level: String,

    /// Override the configured row height mode
    #[arg(long, value_enum)]
    height_mode: Option<HeightModeArg>,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum HeightModeArg {
    Fixed,
    Measured,
}

impl From<HeightModeArg> for HeightMode {
    fn from(arg: HeightModeArg) -> Self {
        match arg {
            HeightModeArg::Fixed => HeightMode::Fixed,
            HeightModeArg::Measured => HeightMode::Measured,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    if cli.init_config {
        let path = Config::create_default()?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(mode) = cli.height_mode {
        config.list.height_mode = mode.into();
    }

    let source = match cli.data {
        Some(path) => DataSource::File(path),
        None => DataSource::Bundled(parse_nodes(SAMPLE_DATA)?),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_title("Tree List"),
        ..Default::default()
    };

    tracing::info!(height_mode = ?config.list.height_mode, "starting viewer");
    eframe::run_native(
        "Tree List",
        options,
        Box::new(move |cc| Ok(Box::new(TreeList::new(cc, config, source)))),
    )?;
    Ok(())
}
