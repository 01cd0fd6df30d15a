use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use luopan_base::Star;
use luopan_chart::{
    AnnualOverlay, BirthInput, ChartError, FourPillarsChart, Gender, Granularity, KeyPosition,
    LocationResult, Period, Plate, SexagenaryClock, StarStatus, annual_star, classify,
    locate_with,
};
use luopan_rs::{
    EngineConfig, HouseQuery, HouseReading, LuopanError, birth_chart_with, luck_with, read_house,
};
use luopan_time::{CivilTime, TimeError};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "luopan", about = "Sexagenary calendar and flying-star CLI")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Engine config (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum GranularityArg {
    Year,
    Month,
    Day,
    Hour,
}

impl From<GranularityArg> for Granularity {
    fn from(g: GranularityArg) -> Self {
        match g {
            GranularityArg::Year => Granularity::Year,
            GranularityArg::Month => Granularity::Month,
            GranularityArg::Day => Granularity::Day,
            GranularityArg::Hour => Granularity::Hour,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Pillar of an instant at one granularity
    Cycle {
        /// Local date-time (YYYY-MM-DDThh:mm[:ss])
        instant: String,
        /// Day and hour roll to the next day from 23:00
        #[arg(long, value_enum, default_value = "day")]
        granularity: GranularityArg,
    },
    /// Four-pillars chart
    Pillars {
        /// Local date-time (YYYY-MM-DDThh:mm[:ss])
        instant: String,
        #[arg(long, value_enum, default_value = "male")]
        gender: GenderArg,
        /// Birth time unknown: omit the hour pillar
        #[arg(long)]
        unknown_time: bool,
        /// Birthplace longitude for solar-time correction
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,
    },
    /// Luck pillars (大运)
    Luck {
        /// Local date-time (YYYY-MM-DDThh:mm[:ss])
        instant: String,
        #[arg(long, value_enum, default_value = "male")]
        gender: GenderArg,
        /// Number of pillars
        #[arg(long, default_value = "8")]
        count: u8,
        /// Birthplace longitude for solar-time correction
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,
    },
    /// Sitting and facing mountains of a facing bearing
    Locate {
        /// Facing bearing in degrees
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
    },
    /// Flying-star plate
    Plate {
        /// Facing bearing in degrees
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
        /// Construction period (1-9)
        #[arg(long)]
        period: u8,
    },
    /// Plate with ratings, patterns and wealth/scholar/hazard positions
    Positions {
        /// Facing bearing in degrees
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
        /// Construction period (1-9)
        #[arg(long)]
        period: u8,
        /// Period to judge against (default: the construction period)
        #[arg(long)]
        current: Option<u8>,
        /// Overlay this solar year's annual stars
        #[arg(long, allow_hyphen_values = true)]
        year: Option<i32>,
    },
    /// Status of a star against a current period star
    Classify {
        /// Star (1-9)
        star: u8,
        /// Current period star (1-9)
        #[arg(long)]
        current: u8,
    },
    /// Period of a year
    Period {
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
    /// Annual stars of a solar year
    Annual {
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] LuopanError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig, CliError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let config = EngineConfig::load(path)?;
    luopan_rs::init(config)?;
    Ok(config)
}

fn star(n: u8) -> Result<Star, ChartError> {
    Star::from_number(n).ok_or(ChartError::InvalidStar(n))
}

fn emit<T: Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

fn birth_input(
    instant: &str,
    gender: GenderArg,
    time_known: bool,
    longitude: Option<f64>,
) -> Result<BirthInput, TimeError> {
    let input = BirthInput::new(instant.parse()?, gender.into(), time_known);
    Ok(match longitude {
        Some(lon) => input.with_longitude(lon),
        None => input,
    })
}

fn chart_text(chart: &FourPillarsChart) -> String {
    let mut lines = Vec::new();
    let rows = ["Year", "Month", "Day", "Hour"].iter().zip(chart.pillars()).zip(&chart.ten_gods);
    for ((label, pillar), gods) in rows {
        match (pillar, gods) {
            (Some(p), Some(g)) => {
                let nayin = p.nayin();
                let hidden: Vec<String> = g
                    .hidden
                    .iter()
                    .map(|(stem, god)| format!("{}{}", stem.name(), god.name()))
                    .collect();
                lines.push(format!(
                    "{label:<6}{p}  {} {}  纳音 {} ({})  {}  藏 {}",
                    p.stem().element().name(),
                    p.branch().element().name(),
                    nayin.name,
                    nayin.element.name(),
                    g.stem.map_or("日主", |god| god.name()),
                    hidden.join(" ")
                ));
            }
            _ => lines.push(format!("{label:<6}--")),
        }
    }
    lines.push(format!(
        "Day master: {} ({})",
        chart.day_master.name(),
        chart.day_master.element().name()
    ));
    let tally: Vec<String> = chart
        .element_tally
        .iter()
        .map(|(e, n)| format!("{}{n}", e.name()))
        .collect();
    lines.push(format!("Elements: {}", tally.join(" ")));
    lines.push(format!(
        "Solar month {} of {} (from {}), chart time {}",
        chart.solar_month.month + 1,
        chart.solar_month.solar_year,
        chart.solar_month.term.name(),
        chart.chart_time
    ));
    lines.join("\n")
}

fn location_text(loc: &LocationResult) -> String {
    let mut out = format!(
        "{}  facing {:.2} deg, sitting {:.2} deg, offset {:+.2} deg",
        loc.label(),
        loc.bearing_deg,
        loc.sitting_bearing_deg(),
        loc.offset_deg
    );
    if loc.ambiguous {
        out.push_str("\nNear a sector boundary: confirm the reading");
    }
    out
}

/// Lo Shu grid: row by row from the south-east, south at the top.
const GRID: [[usize; 3]; 3] = [[3, 8, 1], [2, 4, 6], [7, 0, 5]];

fn plate_text(plate: &Plate) -> String {
    let mut lines = vec![format!(
        "Period {}  {}山{}向",
        plate.period,
        plate.zuo.name(),
        plate.xiang.name()
    )];
    for row in GRID {
        let cells: Vec<String> = row
            .iter()
            .map(|i| {
                let c = &plate.cells[*i];
                format!(
                    "{} {}{}/{}",
                    c.palace.name(),
                    c.mountain_star.number(),
                    c.facing_star.number(),
                    c.period_star.number()
                )
            })
            .collect();
        lines.push(cells.join("  |  "));
    }
    lines.join("\n")
}

fn positions_text(title: &str, positions: &[KeyPosition]) -> String {
    if positions.is_empty() {
        return format!("{title}: none");
    }
    let items: Vec<String> = positions
        .iter()
        .map(|p| format!("{} {} [{}]", p.palace.name(), p.score, p.labels.join(", ")))
        .collect();
    format!("{title}: {}", items.join("; "))
}

fn reading_text(r: &HouseReading) -> String {
    let mut lines = vec![location_text(&r.location), plate_text(&r.plate)];
    let names: Vec<&str> = r.patterns.iter().map(|p| p.name()).collect();
    let patterns = if names.is_empty() {
        "none".to_string()
    } else {
        names.join(" ")
    };
    lines.push(format!("Patterns: {patterns}"));
    lines.push(format!("Judged against period {}", r.current_period));
    for rating in &r.ratings {
        lines.push(format!(
            "  {} {}{} {}{} score {:>3} {}",
            rating.palace.name(),
            rating.mountain_star.number(),
            rating.mountain_status.name(),
            rating.facing_star.number(),
            rating.facing_status.name(),
            rating.score,
            rating.grade.name()
        ));
    }
    lines.push(positions_text("Wealth", &r.positions.wealth));
    lines.push(positions_text("Scholar", &r.positions.scholar));
    lines.push(positions_text("Hazard", &r.positions.hazard));
    if let Some(annual) = &r.annual {
        lines.push(format!(
            "Annual {}: centre star {}",
            annual.solar_year,
            annual.center.number()
        ));
    }
    lines.join("\n")
}

#[derive(Serialize)]
struct CycleOutput {
    instant: CivilTime,
    pillar: luopan_base::Pillar,
}

#[derive(Serialize)]
struct ClassifyOutput {
    star: Star,
    current: Star,
    status: StarStatus,
}

#[derive(Serialize)]
struct PeriodOutput {
    year: i32,
    period: Period,
    first_year: i64,
    last_year: i64,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_ref())?;
    let json = cli.json;

    match cli.command {
        Commands::Cycle {
            instant,
            granularity,
        } => {
            let instant: CivilTime = instant.parse()?;
            let terms = config.terms();
            let pillar = SexagenaryClock::new(terms.as_ref()).cycle(&instant, granularity.into());
            emit(json, &CycleOutput { instant, pillar }, |o| {
                format!("{} (cycle index {})", o.pillar, o.pillar.cycle_index())
            })
        }

        Commands::Pillars {
            instant,
            gender,
            unknown_time,
            longitude,
        } => {
            let input = birth_input(&instant, gender, !unknown_time, longitude)?;
            let chart = birth_chart_with(&input, &config)?;
            emit(json, &chart, chart_text)
        }

        Commands::Luck {
            instant,
            gender,
            count,
            longitude,
        } => {
            let input = birth_input(&instant, gender, true, longitude)?;
            let cycle = luck_with(&input, count, &config)?;
            emit(json, &cycle, |c| {
                let mut lines = vec![format!(
                    "{:?}, first pillar at {} years {} months",
                    c.direction,
                    c.start_age_months() / 12,
                    c.start_age_months() % 12
                )];
                for l in &c.pillars {
                    lines.push(format!(
                        "{:>2}. {}  from age {:.1}",
                        l.order,
                        l.pillar,
                        f64::from(l.start_age_months) / 12.0
                    ));
                }
                lines.join("\n")
            })
        }

        Commands::Locate { bearing } => {
            let location = locate_with(bearing, &config.locator_config())?;
            emit(json, &location, location_text)
        }

        Commands::Plate { bearing, period } => {
            let query = HouseQuery::new(bearing, Period::new(period)?);
            let reading = read_house(&query, &config)?;
            emit(json, &reading.plate, plate_text)
        }

        Commands::Positions {
            bearing,
            period,
            current,
            year,
        } => {
            let period = Period::new(period)?;
            let current = match current {
                Some(n) => Period::new(n)?,
                None => period,
            };
            let query = HouseQuery {
                bearing_deg: bearing,
                period,
                current,
                annual_year: year,
            };
            let reading = read_house(&query, &config)?;
            emit(json, &reading, reading_text)
        }

        Commands::Classify { star: s, current } => {
            let (s, current) = (star(s)?, star(current)?);
            let out = ClassifyOutput {
                star: s,
                current,
                status: classify(s, current),
            };
            emit(json, &out, |o| {
                format!(
                    "{} against {}: {} ({})",
                    o.star.name(),
                    o.current.name(),
                    o.status.name(),
                    o.status.english_name()
                )
            })
        }

        Commands::Period { year } => {
            let period = Period::from_year(year);
            let (first_year, last_year) = period.span_around(year);
            let out = PeriodOutput {
                year,
                period,
                first_year,
                last_year,
            };
            emit(json, &out, |o| {
                format!(
                    "Period {} ({} era), {}-{}",
                    o.period,
                    o.period.era().name(),
                    o.first_year,
                    o.last_year
                )
            })
        }

        Commands::Annual { year } => {
            let overlay = AnnualOverlay::for_year(year);
            debug!(year, center = annual_star(year).number(), "annual overlay");
            emit(json, &overlay, |o| {
                let mut lines = vec![format!("{}: centre star {}", o.solar_year, o.center.name())];
                for row in GRID {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|i| format!("{}", o.stars[*i].number()))
                        .collect();
                    lines.push(cells.join(" "));
                }
                lines.join("\n")
            })
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
