use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ganzhi_base::Pillar;
use ganzhi_shensha::{
    ALL_STAR_LABELS, Chart, Classification, Gender, PillarPosition, ShenShaConfig, classify_chart,
    classify_with,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Four-pillar Shen Sha classifier")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Attach symbolic stars to the pillars of a chart
    Classify {
        /// Year pillar (e.g. 甲子 or "jia zi")
        #[arg(long)]
        year: String,
        /// Month pillar
        #[arg(long)]
        month: String,
        /// Day pillar
        #[arg(long)]
        day: String,
        /// Hour pillar (optional)
        #[arg(long)]
        hour: Option<String>,
        /// male | female (enables Yuan Chen)
        #[arg(long)]
        gender: Option<Gender>,
        /// Year Na Yin phase tag (e.g. 海中金, metal, 金)
        #[arg(long)]
        year_phase: Option<String>,
        /// Day Na Yin phase tag
        #[arg(long)]
        day_phase: Option<String>,
        /// Fill missing phase tags from the pillars' own Na Yin
        #[arg(long)]
        derive_nayin: bool,
        /// year | month | day | hour | all
        #[arg(long, default_value = "all")]
        pillar: String,
        /// JSON file with a classification config
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// The two Void branches of a pillar's Xun
    Void {
        /// Pillar (e.g. 甲子)
        pillar: String,
    },
    /// Na Yin phase of a pillar
    Nayin {
        /// Pillar (e.g. 甲子)
        pillar: String,
    },
    /// List every star label
    Labels,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            year,
            month,
            day,
            hour,
            gender,
            year_phase,
            day_phase,
            derive_nayin,
            pillar,
            config,
            json,
        } => {
            let mut chart = Chart::parse(&year, &month, &day, hour.as_deref())
                .and_then(|c| c.with_phase_tags(year_phase.as_deref(), day_phase.as_deref()))
                .unwrap_or_else(|e| fail(&e));
            if let Some(g) = gender {
                chart = chart.with_gender(g);
            }
            if derive_nayin {
                chart = chart.with_derived_phases();
            }
            let position = parse_pillar_selector(&pillar).unwrap_or_else(|e| fail(&e));
            let config = match config {
                Some(path) => load_config(&path).unwrap_or_else(|e| fail(&e)),
                None => ShenShaConfig::default(),
            };
            debug!(?config, ?position, "classifying");

            let rows: Vec<Classification> = match position {
                Some(pos) => {
                    vec![classify_with(&chart, pos, &config).unwrap_or_else(|e| fail(&e))]
                }
                None => classify_chart(&chart, &config),
            };

            if json {
                let out = serde_json::to_string_pretty(&rows).unwrap_or_else(|e| fail(&e));
                println!("{out}");
            } else {
                for row in &rows {
                    println!("{}", format_row(row));
                }
            }
        }

        Commands::Void { pillar } => {
            let p = require_pillar(&pillar);
            let [a, b] = p.void_branches();
            println!("{p} ({}): void {a} {b}", p.xun().name());
        }

        Commands::Nayin { pillar } => {
            let p = require_pillar(&pillar);
            let nayin = p.nayin();
            let element = nayin.element();
            println!(
                "{p}: {} ({} {})",
                nayin.name(),
                element.glyph(),
                element.name()
            );
        }

        Commands::Labels => {
            for label in ALL_STAR_LABELS {
                println!("{:<8} {}", label.chinese(), label.english());
            }
        }
    }
}

fn fail(e: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn require_pillar(s: &str) -> Pillar {
    s.parse().unwrap_or_else(|e| fail(&e))
}

/// `"all"` selects every present pillar.
fn parse_pillar_selector(s: &str) -> Result<Option<PillarPosition>, String> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    s.parse().map(Some)
}

fn load_config(path: &Path) -> Result<ShenShaConfig, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
}

fn format_row(row: &Classification) -> String {
    let labels = if row.labels.is_empty() {
        "-".to_string()
    } else {
        row.labels
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{} {}  {labels}", row.position.chinese(), row.pillar)
}
