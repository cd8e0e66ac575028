use std::path::Path;
use std::process::ExitCode;

use serde_json::json;

use blink_analysis::input::read_signal_file;
use blink_analysis::logging::{init_tracing, log_level_from_env};
use blink_analysis::sanitize::sanitize_signal;
use blink_analysis::synthetic::{self, DEFAULT_FRAMES};
use blink_analysis::{analyze_batch, AnalysisReport, DetectionConfig, LabeledSignal};

const USAGE: &str = "usage: blink-analyze [--json [--chart]] [--sanitize] <file>...\n       blink-analyze [--json [--chart]] --demo [frames] [seed]";

#[derive(Debug, Default)]
struct Options {
    json: bool,
    chart: bool,
    sanitize: bool,
    demo: Option<(usize, u64)>,
    files: Vec<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--chart" => options.chart = true,
            "--sanitize" => options.sanitize = true,
            "--demo" => {
                let frames = match args.next_if(|a| !a.starts_with("--")) {
                    Some(v) => v.parse().map_err(|_| format!("invalid frame count: {v}"))?,
                    None => DEFAULT_FRAMES,
                };
                let seed = match args.next_if(|a| !a.starts_with("--")) {
                    Some(v) => v.parse().map_err(|_| format!("invalid seed: {v}"))?,
                    None => 0,
                };
                options.demo = Some((frames, seed));
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            other if other.starts_with("--") => return Err(format!("unknown option: {other}\n{USAGE}")),
            _ => options.files.push(arg),
        }
    }

    if options.chart && !options.json {
        return Err(format!("--chart requires --json\n{USAGE}"));
    }

    if options.demo.is_none() && options.files.is_empty() {
        return Err(USAGE.to_string());
    }

    Ok(options)
}

fn load_inputs(options: &Options) -> (Vec<LabeledSignal>, usize) {
    let mut inputs = Vec::new();
    let mut failures = 0;

    if let Some((frames, seed)) = options.demo {
        inputs.push(LabeledSignal::new(
            format!("synthetic-{seed}"),
            synthetic::generate(frames, seed),
        ));
    }

    for file in &options.files {
        match read_signal_file(file) {
            Ok(mut samples) => {
                if options.sanitize {
                    sanitize_signal(&mut samples);
                }
                let label = Path::new(file)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.clone());
                inputs.push(LabeledSignal::new(label, samples));
            }
            Err(err) => {
                tracing::error!(file = %file, error = %err, "failed to read signal");
                failures += 1;
            }
        }
    }

    (inputs, failures)
}

fn print_text(report: &AnalysisReport) {
    println!("== {} ({} frames)", report.label, report.frame_count);
    println!("{}", report.summary);
    for event in &report.events {
        println!(
            "  frame {:>6}  area {:.4}  {}",
            event.frame_index,
            event.min_value,
            event.kind.as_str()
        );
    }
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let _log_guard = init_tracing(&log_level_from_env());

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    let config = DetectionConfig::from_env();
    tracing::info!(?config, "blink-analyze starting");

    let (inputs, mut failures) = load_inputs(&options);
    let mut reports = Vec::with_capacity(inputs.len());
    let mut charts = Vec::new();
    for (input, result) in inputs.iter().zip(analyze_batch(&inputs, &config)) {
        match result {
            Ok(report) => {
                if options.chart {
                    charts.push(json!({
                        "label": report.label,
                        "chart": report.chart(&input.samples),
                    }));
                }
                reports.push(report);
            }
            Err(err) => {
                eprintln!("{}: {err}", input.label);
                failures += 1;
            }
        }
    }

    if options.json {
        let output = if options.chart {
            json!({ "reports": reports, "charts": charts })
        } else {
            json!(reports)
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize reports: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for report in &reports {
            print_text(report);
        }
    }

    tracing::info!(analyzed = reports.len(), failures, "blink-analyze finished");

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
