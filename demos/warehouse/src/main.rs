//! warehouse — one current-practice picker against four optimized pickers.
//!
//! Builds a 30-rack layout, resolves the zig-zag "current practice" route and
//! four zone routes from the optimization model, synthesizes a synchronized
//! animation and exports it.  Also prints the ROI comparison for every
//! loadform scenario.
//!
//! ```text
//! cargo run -p warehouse [-- config.json]
//! ```
//!
//! The optional JSON config may set any of:
//!
//! ```json
//! { "animation": { "steps_between": 10, "dwell_time": 3, "frame_duration_ms": 100 },
//!   "roi":       { "hourly_wage": 25.0, "orders_per_day": 600, "working_days_per_year": 300 } }
//! ```

mod layout;

use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use wh_anim::synthesize_with;
use wh_core::{AgentId, AnimationConfig, LocationId, MarkerSymbol};
use wh_layout::{resolve_routes, RouteDefinition};
use wh_metrics::{best_by_savings, compare_all, load_scenarios_reader, RoiParams, ScenarioRoi};
use wh_output::{AnimationExporter, CsvWriter, JsonWriter};

use layout::build_layout;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/warehouse";

const CURRENT_PRACTICE: [u32; 30] = [
    1, 11, 21, 6, 16, 26, 2, 12, 22, 7, 17, 27, 3, 13, 23,
    8, 18, 28, 4, 14, 24, 9, 19, 29, 5, 15, 25, 10, 20, 30,
];

// ── Scenario CSV ──────────────────────────────────────────────────────────────

// Per-order distance (m) and time (h), optimized vs current practice.
const SCENARIOS_CSV: &str = "\
scenario,distance_optimized,distance_current,time_optimized,time_current\n\
Loadform 1,412.5,655.0,0.210,0.335\n\
Loadform 2,388.0,702.4,0.198,0.351\n\
Loadform 3,455.2,690.8,0.231,0.342\n\
Loadform 4,402.9,731.5,0.205,0.368\n\
Loadform 5,376.4,748.2,0.189,0.379\n\
Loadform 6,430.1,688.6,0.219,0.344\n\
";

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    animation: AnimationConfig,
    roi:       RoiParams,
}

fn load_config() -> Result<DemoConfig> {
    match std::env::args().nth(1) {
        None => Ok(DemoConfig::default()),
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
            let config = serde_json::from_reader(file)
                .with_context(|| format!("parsing config {path}"))?;
            info!(path = %path, "loaded config");
            Ok(config)
        }
    }
}

// ── Routes ────────────────────────────────────────────────────────────────────

fn stops(ids: &[u32]) -> Vec<LocationId> {
    ids.iter().copied().map(LocationId).collect()
}

fn build_routes() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition::new("Current Practice", "#e74c3c", MarkerSymbol::Cross, stops(&CURRENT_PRACTICE)),
        RouteDefinition::new("Optimized 1", "#2ecc71", MarkerSymbol::Circle, stops(&[1, 2, 3, 4, 5, 10, 9, 8])),
        RouteDefinition::new("Optimized 2", "#3498db", MarkerSymbol::Circle, stops(&[6, 7, 11, 12, 13, 14, 15])),
        RouteDefinition::new("Optimized 3", "#f39c12", MarkerSymbol::Circle, stops(&[16, 17, 18, 19, 20, 25, 24])),
        RouteDefinition::new("Optimized 4", "#9b59b6", MarkerSymbol::Circle, stops(&[21, 22, 23, 26, 27, 28, 29, 30])),
    ]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_config()?;
    config.animation.validate()?;
    config.roi.validate()?;

    println!("=== warehouse — route animation ===");
    println!(
        "steps_between: {}  |  dwell_time: {}  |  frame: {} ms",
        config.animation.steps_between, config.animation.dwell_time, config.animation.frame_duration_ms
    );
    println!();

    // 1. Layout.
    let table = build_layout()?;
    let racks = table.racks().count();
    println!("Layout: {} locations ({racks} racks + depot)", table.len());
    if let Some(b) = table.bounds() {
        println!("  X range: {:.0} to {:.0}", b.min.x, b.max.x);
        println!("  Y range: {:.0} to {:.0}", b.min.y, b.max.y);
        let centre = b.min.lerp(b.max, 0.5);
        if let Some(hub) = table.nearest(centre) {
            println!("  Nearest to centre {centre}: {} at {}", hub.name, hub.pos);
        }
    }
    println!();

    // 2. ROI across scenarios.
    let scenarios = load_scenarios_reader(Cursor::new(SCENARIOS_CSV))?;
    let selected = scenarios.default_selection();
    let roi_rows = compare_all(&scenarios, &config.roi)?;
    print_roi_table(&roi_rows);
    if let Some(best) = best_by_savings(&roi_rows) {
        println!("Best scenario: {} (${:.2} per year)", best.scenario, best.annual_cost_savings);
    }
    println!("Selected scenario: {}", selected.name);
    println!();

    // 3. Resolve and animate.
    let routes = build_routes();
    let paths = resolve_routes(&table, &routes)?;

    let t0 = Instant::now();
    let animation = synthesize_with(&paths, &config.animation)?;
    let elapsed = t0.elapsed();

    println!(
        "Animation: {} workers, {} frames ({:.1} s playback), built in {:.3} ms",
        animation.agent_count(),
        animation.max_frames(),
        config.animation.playback_ms(animation.max_frames()) as f64 / 1000.0,
        elapsed.as_secs_f64() * 1000.0,
    );
    println!();

    // 4. Per-worker finish table.
    println!("{:<18} {:>6} {:>10} {:>8} {:>10}", "Worker", "Stops", "Distance", "Frames", "Finished");
    println!("{}", "-".repeat(56));
    for (i, (route, path)) in routes.iter().zip(&paths).enumerate() {
        let agent = AgentId(i as u32);
        let finished = animation
            .finish_step(agent)
            .map_or_else(|| "last".to_owned(), |s| format!("@{s}"));
        let raw = animation.sequence(agent).map_or(0, |s| s.raw_len());
        println!(
            "{:<18} {:>6} {:>10.1} {:>8} {:>10}",
            route.name,
            route.stop_count(),
            path.total_distance(),
            raw,
            finished,
        );
    }
    println!();

    // 5. Export.
    let out = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(out)?;

    let mut csv = AnimationExporter::new(CsvWriter::new(out)?);
    let summary = csv.export(&routes, &paths, &animation)?;
    println!("  agents.csv        : {} rows", summary.agents);
    println!("  agent_frames.csv  : {} rows", summary.frame_rows);

    let mut json = AnimationExporter::new(JsonWriter::new(out)?);
    json.export(&routes, &paths, &animation)?;
    println!("  animation.json    : written");

    Ok(())
}

fn print_roi_table(rows: &[ScenarioRoi]) {
    println!(
        "{:<12} {:>10} {:>10} {:>14} {:>14}",
        "Scenario", "Dist %", "Time %", "Savings ($)", "Hours saved"
    );
    println!("{}", "-".repeat(64));
    for r in rows {
        println!(
            "{:<12} {:>10} {:>10} {:>14.2} {:>14.2}",
            r.scenario,
            pct(r.distance_reduction_pct),
            pct(r.time_reduction_pct),
            r.annual_cost_savings,
            r.annual_time_saved_hours,
        );
    }
    println!();
}

fn pct(v: Option<f64>) -> String {
    v.map_or_else(|| "n/a".to_owned(), |p| format!("{p:.2}%"))
}
