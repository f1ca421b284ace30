use crate::render;
use admissions_desk::config::{AppConfig, OutputFormat};
use admissions_desk::dataset::{self, Dataset};
use admissions_desk::engine::FilterSpec;
use admissions_desk::error::AppError;
use admissions_desk::telemetry;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "admissions-desk",
    about = "Search and summarize students, events and applications from the command line",
    version
)]
struct Cli {
    /// Directory holding students.csv, events.csv and applications.csv
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Headline cards of the home dashboard (default command)
    Dashboard,
    /// Search students by name or email
    Students(StudentArgs),
    /// Search events by name, description or location
    Events(EventArgs),
    /// Search applications by student name, email or program
    Applications(ApplicationArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Case-insensitive text matched against the page's searchable fields
    #[arg(long, short, default_value = "")]
    pub(crate) query: String,
    /// JSON filter spec to start from; the flags override its selections
    #[arg(long)]
    pub(crate) spec: Option<PathBuf>,
}

impl SearchArgs {
    fn base_spec(&self) -> Result<FilterSpec, AppError> {
        let spec = match &self.spec {
            Some(path) => dataset::load_filter_spec(path)?,
            None => FilterSpec::new(),
        };

        if self.query.is_empty() {
            Ok(spec)
        } else {
            Ok(spec.query(self.query.clone()))
        }
    }
}

fn select(spec: FilterSpec, field: &str, value: Option<String>) -> FilterSpec {
    match value {
        Some(value) => spec.field(field, value),
        None => spec,
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct StudentArgs {
    #[command(flatten)]
    pub(crate) search: SearchArgs,
    /// interested, applied, enrolled, declined or all
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// website, referral, open_house, social_media, events or all
    #[arg(long)]
    pub(crate) source: Option<String>,
}

impl StudentArgs {
    fn filter_spec(self) -> Result<FilterSpec, AppError> {
        let spec = self.search.base_spec()?;
        let spec = select(spec, "status", self.status);
        Ok(select(spec, "source", self.source))
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct EventArgs {
    #[command(flatten)]
    pub(crate) search: SearchArgs,
    /// planned, active, completed, cancelled or all
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// open_house, workshop, career_fair, info_session, seminar, webinar or all
    #[arg(long = "type")]
    pub(crate) event_type: Option<String>,
}

impl EventArgs {
    fn filter_spec(self) -> Result<FilterSpec, AppError> {
        let spec = self.search.base_spec()?;
        let spec = select(spec, "status", self.status);
        Ok(select(spec, "event_type", self.event_type))
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ApplicationArgs {
    #[command(flatten)]
    pub(crate) search: SearchArgs,
    /// submitted, under_review, accepted, rejected, waitlisted or all
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Program name exactly as listed, or all
    #[arg(long)]
    pub(crate) program: Option<String>,
    /// high, medium, low or all
    #[arg(long)]
    pub(crate) priority: Option<String>,
}

impl ApplicationArgs {
    fn filter_spec(self) -> Result<FilterSpec, AppError> {
        let spec = self.search.base_spec()?;
        let spec = select(spec, "status", self.status);
        let spec = select(spec, "program", self.program);
        Ok(select(spec, "priority", self.priority))
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(dir) = cli.data_dir {
        config.data.dir = Some(dir);
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }

    telemetry::init(&config.telemetry)?;

    let dataset = match &config.data.dir {
        Some(dir) => Dataset::from_dir(dir)?,
        None => {
            info!(?config.environment, "no data directory configured, using sample dataset");
            Dataset::sample()
        }
    };

    let output = config.output;
    let rendered = match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => render::dashboard(&dataset, output)?,
        Command::Students(args) => {
            render::students(&dataset.students, &args.filter_spec()?, output)?
        }
        Command::Events(args) => render::events(&dataset.events, &args.filter_spec()?, output)?,
        Command::Applications(args) => {
            render::applications(&dataset.applications, &args.filter_spec()?, output)?
        }
    };

    print!("{rendered}");
    Ok(())
}
