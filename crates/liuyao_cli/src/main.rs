use std::path::PathBuf;

use chrono::{Local, NaiveDate, Timelike};
use clap::{Parser, Subcommand};
use liuyao_base::{
    ALL_POSITIONS, ALL_SOLAR_TERMS, Branch, Hexagram, HourSlot, Stem,
    branch_interaction, element_interaction, four_pillars, void_branches, xun_void_branches,
};
use liuyao_config::{
    ConfigOverrides, LiuyaoConfig, OutputFormat, parse_month_rule, parse_void_method,
    parse_year_boundary,
};
use liuyao_reading::Topic;
use liuyao_rs::{ReadingRequest, parse_date, render, slot_for_clock_hour};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "liuyao", about = "Six-line (liuyao) divination from three numbers")]
struct Cli {
    /// Config file (TOML); falls back to $LIUYAO_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Moment {
    /// Query date (YYYY-MM-DD), default today
    #[arg(long)]
    date: Option<String>,
    /// Hour slot 0-11 (0 = 子)
    #[arg(long, conflicts_with = "hour")]
    hour_slot: Option<i64>,
    /// Clock hour 0-23, mapped to its slot
    #[arg(long)]
    hour: Option<i64>,
    /// Year boundary: calendar or spring-commencement
    #[arg(long)]
    year_boundary: Option<String>,
    /// Month rule: calendar-month or five-tigers
    #[arg(long)]
    month_rule: Option<String>,
    /// Void method: branch-table or xun
    #[arg(long)]
    void_method: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full reading from three numbers
    Cast {
        /// Upper trigram number
        #[arg(allow_negative_numbers = true)]
        n1: String,
        /// Lower trigram number
        #[arg(allow_negative_numbers = true)]
        n2: String,
        /// Moving line number
        #[arg(allow_negative_numbers = true)]
        n3: String,
        #[command(flatten)]
        moment: Moment,
        /// Topic, Chinese or English (財運, wealth, ...)
        #[arg(long)]
        topic: Option<String>,
        /// Question text for the prompt
        #[arg(long)]
        question: Option<String>,
        /// Output format: text, json or prompt
        #[arg(long)]
        format: Option<String>,
    },
    /// Four pillars and void pair for a moment
    Pillars {
        #[command(flatten)]
        moment: Moment,
    },
    /// Hexagram from an upper and lower trigram number
    Hexagram {
        #[arg(allow_negative_numbers = true)]
        upper: i64,
        #[arg(allow_negative_numbers = true)]
        lower: i64,
    },
    /// Relation of a changed branch to an original branch
    Interaction {
        /// Original branch (子 .. 亥)
        original: String,
        /// Changed branch
        changed: String,
    },
    /// Void pair for a day branch or a day pillar such as 甲子
    Void {
        /// 子 or 甲子
        day: String,
    },
    /// The 24 solar terms
    Terms,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn load_config(path: Option<&PathBuf>, overrides: &ConfigOverrides) -> LiuyaoConfig {
    liuyao_config::load(path.map(PathBuf::as_path))
        .unwrap_or_else(|e| fail(e))
        .with_overrides(overrides)
}

fn moment_overrides(moment: &Moment) -> ConfigOverrides {
    ConfigOverrides {
        year_boundary: moment
            .year_boundary
            .as_deref()
            .map(|s| parse_year_boundary(s).unwrap_or_else(|e| fail(e))),
        month_rule: moment
            .month_rule
            .as_deref()
            .map(|s| parse_month_rule(s).unwrap_or_else(|e| fail(e))),
        void_method: moment
            .void_method
            .as_deref()
            .map(|s| parse_void_method(s).unwrap_or_else(|e| fail(e))),
        format: None,
    }
}

fn resolve_date(moment: &Moment) -> NaiveDate {
    match &moment.date {
        Some(s) => parse_date(s).unwrap_or_else(|e| fail(e)),
        None => Local::now().date_naive(),
    }
}

fn resolve_slot(moment: &Moment) -> HourSlot {
    let slot = match (moment.hour_slot, moment.hour) {
        (Some(slot), _) => HourSlot::new(slot).map_err(|e| e.to_string()),
        (None, Some(hour)) => slot_for_clock_hour(hour).map_err(|e| e.to_string()),
        (None, None) => {
            HourSlot::from_clock_hour(Local::now().hour()).map_err(|e| e.to_string())
        }
    };
    slot.unwrap_or_else(|e| fail(e))
}

fn require_branch(s: &str) -> Branch {
    Branch::from_name(s.trim()).unwrap_or_else(|| {
        eprintln!("Invalid branch: {s}");
        eprintln!("Valid: 子 丑 寅 卯 辰 巳 午 未 申 酉 戌 亥");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Cast {
            n1,
            n2,
            n3,
            moment,
            topic,
            question,
            format,
        } => {
            let mut overrides = moment_overrides(&moment);
            overrides.format = format
                .as_deref()
                .map(|s| s.parse::<OutputFormat>().unwrap_or_else(|e| fail(e)));
            let config = load_config(cli.config.as_ref(), &overrides);
            debug!(?config, "resolved config");

            let topic = topic
                .as_deref()
                .map(|s| s.parse::<Topic>().unwrap_or_else(|e| fail(e)));
            let date = resolve_date(&moment);
            let slot = resolve_slot(&moment);
            let request = ReadingRequest::parse(
                &n1,
                &n2,
                &n3,
                &date.to_string(),
                &slot.index().to_string(),
            )
            .unwrap_or_else(|e| fail(e))
            .with_topic(topic)
            .with_question(question.as_deref());

            let reading = request.reading(&config.reading);
            match render(&reading, request.question.as_deref(), config.format) {
                Ok(text) => println!("{text}"),
                Err(e) => fail(e),
            }
        }

        Commands::Pillars { moment } => {
            let config = load_config(cli.config.as_ref(), &moment_overrides(&moment));
            let date = resolve_date(&moment);
            let slot = resolve_slot(&moment);
            let p = four_pillars(date, slot, &config.reading.pillar_config());
            println!("Date:       {date} ({}時 {})", slot.branch().name(), slot.window());
            println!("Year:       {}", p.year);
            println!("Month:      {} (month {})", p.month, p.lunar_month + 1);
            println!("Day:        {}", p.day);
            println!("Hour:       {}", p.hour);
            println!("Solar term: {}", p.solar_term.name());
            println!("Void:       {}{}", p.void[0].name(), p.void[1].name());
        }

        Commands::Hexagram { upper, lower } => {
            let hex = Hexagram::from_numbers(upper, lower);
            let text = hex.text();
            let palace = hex.palace();
            let branches = hex.branches();
            match text.king_wen {
                Some(n) => println!("{} (#{n}, {})", text.name, hex.nature_pair()),
                None => println!("{} ({})", text.name, hex.nature_pair()),
            }
            println!(
                "Palace: {} {} ({}), world {}, response {}",
                palace.label(),
                palace.generation.name(),
                palace.element.name(),
                palace.world,
                palace.response
            );
            println!("Judgment: {}", text.judgment);
            for pos in ALL_POSITIONS.iter().rev() {
                let branch = branches[pos.index()];
                println!(
                    "  {} {} {}{}  {}",
                    pos.label(),
                    hex.line(*pos).name(),
                    branch.name(),
                    branch.element().name(),
                    text.line(pos.get())
                );
            }
        }

        Commands::Interaction { original, changed } => {
            let a = require_branch(&original);
            let b = require_branch(&changed);
            let elements = element_interaction(b.element(), a.element());
            let relation = branch_interaction(a, b).map_or("none", |i| i.label());
            println!(
                "{} -> {}: {relation} ({}本爻)",
                a.name(),
                b.name(),
                elements.name()
            );
        }

        Commands::Void { day } => {
            let day = day.trim();
            let mut chars = day.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(b), None, _) => {
                    let pair = void_branches(require_branch(&b.to_string()));
                    println!("{}{}", pair[0].name(), pair[1].name());
                }
                (Some(s), Some(b), None) => {
                    let stem = Stem::from_name(&s.to_string())
                        .unwrap_or_else(|| fail(format!("Invalid stem: {s}")));
                    let branch = require_branch(&b.to_string());
                    let table = void_branches(branch);
                    let xun = xun_void_branches(stem, branch);
                    println!("branch-table: {}{}", table[0].name(), table[1].name());
                    println!("xun:          {}{}", xun[0].name(), xun[1].name());
                }
                _ => fail(format!(
                    "Invalid day: {day} (a branch such as 子 or a pillar such as 甲子)"
                )),
            }
        }

        Commands::Terms => {
            for term in ALL_SOLAR_TERMS {
                println!(
                    "{:>2}  {}  {:02}-{:02}  {}",
                    term.index() + 1,
                    term.name(),
                    term.month(),
                    term.day(),
                    if term.is_jie() { "節" } else { "氣" }
                );
            }
        }
    }
}
