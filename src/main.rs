use clap::Parser;
use image::{ImageBuffer, Luma};
use linemarch::render::{render, thickness_grid, RenderParams};
use linemarch::strokes::Polyline;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error;
use std::fmt::Write as _;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Drawing extent in device units (the plotter maximum is 125)
    #[arg(short, long, default_value_t = 125)]
    size: u32,

    /// Grid cell size in device units
    #[arg(short = 'c', long, default_value_t = 3.0)]
    scale: f64,

    #[arg(short, long, default_value_t = 70.0)]
    fov: f64,

    /// Seed for the scene parameters; omit for a fresh drawing each run
    #[arg(long)]
    seed: Option<u64>,

    /// Draw each grid cell's bounding square
    #[arg(long, default_value_t = false)]
    outline: bool,

    #[arg(short, long, default_value = "out.svg")]
    out: String,

    /// Also write the line list as JSON
    #[arg(long)]
    json: Option<String>,

    /// Also write a grayscale preview of the thickness field
    #[arg(long)]
    preview: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let params = RenderParams {
        outline: args.outline,
        ..RenderParams::sample(&mut rng, args.size, args.size, args.fov, args.scale)
    };
    println!(
        "Tracing {}x{} cells (eye {:.2},{:.2},{:.2}, radius {:.2})",
        params.grid().0,
        params.grid().1,
        params.eye.x,
        params.eye.y,
        params.eye.z,
        params.sphere_radius
    );

    let start = Instant::now();
    let lines = render(&params);
    println!(
        "Traced {} strokes in {} s",
        lines.len(),
        start.elapsed().as_secs_f32()
    );

    write_svg(&args.out, &lines, args.size).unwrap();
    println!("Wrote {}", args.out);

    if let Some(path) = &args.json {
        write_json(path, &lines).unwrap();
        println!("Wrote {}", path);
    }
    if let Some(path) = &args.preview {
        write_preview(path, &params).unwrap();
        println!("Wrote {}", path);
    }
}

/// One `<path>` per polyline, the shape the viewer tooling expects.
fn write_svg(path: &str, lines: &[Polyline], size: u32) -> Result<(), Box<dyn error::Error>> {
    let mut doc = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        size, size
    );
    for line in lines {
        let mut d = String::new();
        for (i, pt) in line.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            write!(d, "{}{} {} ", cmd, pt.x, pt.y)?;
        }
        writeln!(
            doc,
            "  <path d=\"{}\" stroke=\"black\" stroke-width=\"0.4\" fill=\"none\"/>",
            d.trim_end()
        )?;
    }
    doc.push_str("</svg>\n");
    std::fs::write(path, doc)?;
    Ok(())
}

fn write_json(path: &str, lines: &[Polyline]) -> Result<(), Box<dyn error::Error>> {
    let plain: Vec<Vec<(f64, f64)>> = lines
        .iter()
        .map(|line| line.iter().map(|p| (p.x, p.y)).collect())
        .collect();
    std::fs::write(path, serde_json::to_string(&plain)?)?;
    Ok(())
}

/// Darker where more ink would land.
fn write_preview(path: &str, params: &RenderParams) -> Result<(), Box<dyn error::Error>> {
    let (cols, rows, field) = thickness_grid(params);
    let img: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_fn(cols, rows, |x, y| {
        let t = field[(y * cols + x) as usize].clamp(0.0, 16.0);
        Luma([(255.0 - t / 16.0 * 255.0) as u8])
    });
    img.save(path)?;
    Ok(())
}
