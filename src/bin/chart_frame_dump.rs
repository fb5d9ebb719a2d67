use std::fs;
use std::path::PathBuf;

use expense_charts::api::{
    LineChart, LineChartConfig, LineChartSnapshot, PieChart, PieChartConfig, PieChartSnapshot,
};
use expense_charts::core::{JsonRecordSource, RecordSource, Viewport, daily_series};
use expense_charts::render::{LINE_SERIES_PALETTE, NullRenderer};
use expense_charts::telemetry::init_default_tracing;
use serde::Serialize;

const DEFAULT_PAYLOAD_PATH: &str = "tests/fixtures/expense_payload.json";
const DEFAULT_VIEWPORT: Viewport = Viewport::new(1080, 1080);

#[derive(Debug)]
struct CliArgs {
    payload_path: PathBuf,
    viewport: Viewport,
    output: Option<PathBuf>,
    with_snapshots: bool,
}

#[derive(Debug, Serialize)]
struct FrameCounts {
    arcs: usize,
    lines: usize,
    paths: usize,
    circles: usize,
    texts: usize,
}

impl From<&NullRenderer> for FrameCounts {
    fn from(renderer: &NullRenderer) -> Self {
        Self {
            arcs: renderer.last_arc_count,
            lines: renderer.last_line_count,
            paths: renderer.last_path_count,
            circles: renderer.last_circle_count,
            texts: renderer.last_text_count,
        }
    }
}

#[derive(Debug, Serialize)]
struct DumpReport {
    payload: String,
    viewport: Viewport,
    record_count: usize,
    total_amount: f64,
    line_categories: Vec<String>,
    pie_frame: FrameCounts,
    line_frame: FrameCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pie_snapshot: Option<PieChartSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_snapshot: Option<LineChartSnapshot>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let file = fs::File::open(&args.payload_path)
        .map_err(|err| format!("failed to read `{}`: {err}", args.payload_path.display()))?;
    let source = JsonRecordSource::from_reader(file).map_err(|err| err.to_string())?;
    let records = source.records().map_err(|err| err.to_string())?;

    let mut pie = PieChart::new(NullRenderer::default(), PieChartConfig::new(args.viewport))
        .map_err(|err| err.to_string())?;
    pie.set_payloads(records.clone());
    pie.set_center_text(format!("{:.2}", pie.total_amount()), "total");
    pie.render().map_err(|err| err.to_string())?;

    // The line chart follows the first categories in payload order.
    let categories: Vec<(&str, _)> = pie
        .wedges()
        .iter()
        .zip(LINE_SERIES_PALETTE)
        .map(|(wedge, color)| (wedge.category.as_str(), color))
        .collect();
    let series = daily_series(&records, &categories);
    let line_categories = categories
        .iter()
        .map(|(category, _)| (*category).to_owned())
        .collect();

    let mut line = LineChart::new(NullRenderer::default(), LineChartConfig::new(args.viewport))
        .map_err(|err| err.to_string())?;
    line.set_data(series);
    line.render().map_err(|err| err.to_string())?;

    let report = DumpReport {
        payload: args.payload_path.display().to_string(),
        viewport: args.viewport,
        record_count: records.len(),
        total_amount: pie.total_amount(),
        line_categories,
        pie_frame: FrameCounts::from(pie.renderer()),
        line_frame: FrameCounts::from(line.renderer()),
        pie_snapshot: args.with_snapshots.then(|| pie.snapshot()),
        line_snapshot: args.with_snapshots.then(|| line.snapshot()),
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("failed to serialize report: {err}"))?;

    match args.output {
        Some(path) => fs::write(&path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut payload_path = PathBuf::from(DEFAULT_PAYLOAD_PATH);
    let mut viewport = DEFAULT_VIEWPORT;
    let mut output: Option<PathBuf> = None;
    let mut with_snapshots = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--payload" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --payload".to_owned())?;
                payload_path = PathBuf::from(value);
            }
            "--viewport" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --viewport".to_owned())?;
                viewport = parse_viewport(&value)?;
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--snapshots" => with_snapshots = true,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin chart_frame_dump -- [--payload <path>] [--viewport <width>x<height>] [--output <path>] [--snapshots]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        payload_path,
        viewport,
        output,
        with_snapshots,
    })
}

fn parse_viewport(value: &str) -> Result<Viewport, String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| format!("viewport must look like `1080x720`, got `{value}`"))?;
    let width = width
        .parse::<u32>()
        .map_err(|err| format!("invalid viewport width `{width}`: {err}"))?;
    let height = height
        .parse::<u32>()
        .map_err(|err| format!("invalid viewport height `{height}`: {err}"))?;
    Viewport::new(width, height)
        .ensure_valid()
        .map_err(|err| err.to_string())
}
