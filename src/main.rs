use edge_bleed::image::{ImageRgba, Rgba};
use edge_bleed::mask::{ShellMaskProvider, UvMesh, UvRasterizer};
use edge_bleed::EdgeBleeder;
use nalgebra::Vector2;

fn main() {
    // Demo stub: one UV island in the middle of a synthetic gradient texture.
    let (w, h) = (256usize, 256usize);
    let mut source = ImageRgba::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let c = Rgba::new(x as f32 / w as f32, y as f32 / h as f32, 0.5, 1.0);
            source.set(x, y, c);
        }
    }

    let island = UvMesh {
        uvs: vec![
            Vector2::new(0.3, 0.3),
            Vector2::new(0.7, 0.3),
            Vector2::new(0.5, 0.75),
        ],
        triangles: vec![[0, 1, 2]],
    };
    let mask = match UvRasterizer::default().render_mask(&island, w, h) {
        Ok(mask) => mask,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    match EdgeBleeder::default().process_with_diagnostics(&source, &mask, w, h) {
        Ok(report) => {
            let trace = &report.trace;
            let rounds = trace.propagation.as_ref().map_or(0, |p| p.rounds);
            println!(
                "opaque={} rounds={} total_ms={:.3}",
                trace.classification.opaque, rounds, trace.timings.total_ms
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
