use clap::Parser;
use cronpeek::{CronSchedule, PRESETS};
use jiff::Zoned;
use std::process;

#[derive(Parser)]
#[command(name = "cronpeek", about = "Five-field cron expressions: parse, explain, preview", version)]
struct Cli {
    /// Cron expression (e.g., "0 9 * * 1-5")
    expression: Option<String>,

    /// Number of upcoming runs to show
    #[arg(short, long, default_value = "5")]
    n: u32,

    /// Reference instant (ISO 8601 zoned datetime) instead of the current time
    #[arg(long)]
    now: Option<String>,

    /// Validate the expression without computing anything
    #[arg(long)]
    check: bool,

    /// Print only the English description
    #[arg(long)]
    describe: bool,

    /// Print the per-field breakdown
    #[arg(long)]
    fields: bool,

    /// Output the full report as JSON
    #[arg(long)]
    json: bool,

    /// List the built-in preset schedules
    #[arg(long)]
    presets: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.presets {
        for preset in &PRESETS {
            println!(
                "{:<22} {:<15} {}",
                preset.label, preset.expression, preset.description
            );
        }
        process::exit(0);
    }

    let expression = match cli.expression {
        Some(ref expr) => expr.as_str(),
        None => {
            eprintln!("error: no expression provided");
            process::exit(2);
        }
    };

    let schedule = match CronSchedule::parse(expression) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.describe {
        println!("{}", schedule.describe());
        process::exit(0);
    }

    let now = match cli.now {
        Some(ref raw) => match raw.parse::<Zoned>() {
            Ok(z) => z,
            Err(e) => {
                eprintln!("error: invalid --now datetime: {e}");
                process::exit(1);
            }
        },
        None => Zoned::now(),
    };

    let mut n = cli.n;
    if n > 1000 {
        eprintln!("warning: capped at 1000 runs");
        n = 1000;
    }

    let report = schedule.report(&now, n as usize);

    if cli.json {
        let next_runs: Vec<String> = report.next_runs.iter().map(|z| z.to_string()).collect();
        let payload = serde_json::json!({
            "fields": report.fields,
            "description": report.description,
            "nextRuns": next_runs,
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
        process::exit(0);
    }

    if cli.fields {
        for field in &report.fields {
            println!("{:<14} {:<12} {}", field.name, field.value, field.description);
        }
        process::exit(0);
    }

    println!("{}", report.description);
    if report.next_runs.is_empty() {
        eprintln!("no upcoming runs within a year");
        process::exit(0);
    }
    for run in &report.next_runs {
        println!("{run}");
    }
}
