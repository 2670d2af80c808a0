use edge_bleed::classify::classify_with_threshold;
use edge_bleed::config::load_config;
use edge_bleed::diagnostics::BleedReport;
use edge_bleed::image::io::{load_rgba_image, save_rgba_image, write_json_file};
use edge_bleed::EdgeBleeder;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let source = load_rgba_image(&config.input)?;
    let (width, height) = config.target_size(&source);
    let mask = config.mask.load(width, height)?;

    let bleeder = EdgeBleeder::new(config.params.clone());
    let report = bleeder
        .process_with_diagnostics(&source, &mask, width, height)
        .map_err(|e| format!("Bleed failed for {}: {e}", config.input.display()))?;

    save_rgba_image(&report.image, &config.output.image)?;
    print_summary(&report);
    println!("Saved bled texture to {}", config.output.image.display());

    if let Some(path) = &config.output.classification_image {
        let classes = classify_with_threshold(&mask, bleeder.params().mask_threshold)
            .map_err(|e| format!("Classification failed: {e}"))?;
        save_rgba_image(&classes.debug_image(), path)?;
        println!("Saved classification view to {}", path.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: bleed_texture <config.json>".to_string()
}

fn print_summary(report: &BleedReport) {
    let trace = &report.trace;
    let [w, h] = trace.input.target_size;
    println!("Bleed {}x{} (view: {:?})", w, h, trace.debug_view);
    let resampled = |flag: bool| if flag { "resampled" } else { "native" };
    let [sw, sh] = trace.input.source_size;
    let [mw, mh] = trace.input.mask_size;
    println!(
        "  source {}x{} ({}), mask {}x{} ({})",
        sw,
        sh,
        resampled(trace.input.source_resampled()),
        mw,
        mh,
        resampled(trace.input.mask_resampled())
    );
    println!(
        "  pixels: opaque={} boundary={} loose={}",
        trace.classification.opaque, trace.classification.boundary, trace.classification.loose
    );
    if let Some(stats) = &trace.propagation {
        println!(
            "  propagation: rounds={} resolved={}",
            stats.rounds, stats.resolved_total
        );
    }
    for stage in &trace.timings.stages {
        println!("  {:<10} {:>9.3} ms", stage.label, stage.elapsed_ms);
    }
    println!("  {:<10} {:>9.3} ms", "total", trace.timings.total_ms);
}
