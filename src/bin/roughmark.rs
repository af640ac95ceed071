use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "roughmark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write an animated SVG of every annotation in the scene.
    Svg(SvgArgs),
    /// Rasterize the scene at one instant of the reveal as a PNG.
    Frame(FrameArgs),
    /// Print the computed paths and timings as JSON.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Time on the animation clock, in milliseconds. Defaults to the fully drawn state.
    #[arg(long)]
    at_ms: Option<f64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(serde::Serialize)]
struct PlannedPath<'a> {
    annotation: usize,
    d: &'a str,
    length: f64,
    stroke: &'a str,
    stroke_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    timing: Option<roughmark::AnimationPlan>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

type RenderedScene = (roughmark::SvgSurface, Vec<roughmark::PreparedAnnotation>);

fn render_scene(in_path: &Path) -> anyhow::Result<RenderedScene> {
    let scene = roughmark::Scene::from_path(in_path)
        .with_context(|| format!("load scene '{}'", in_path.display()))?;
    let mut surface = roughmark::SvgSurface::new(scene.width, scene.height);
    let rendered = roughmark::AnnotationGroup::from_scene(&scene)
        .render(&mut surface, &roughmark::RoughSketcher::new())?;
    let prepared = rendered.into_iter().map(|r| r.prepared).collect();
    Ok((surface, prepared))
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let (surface, _) = render_scene(&args.in_path)?;
    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, surface.to_svg_string())
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (surface, _) = render_scene(&args.in_path)?;
    let at_ms = args.at_ms.unwrap_or_else(|| surface.end_ms());
    let svg = surface.snapshot_at(at_ms);

    let tree =
        usvg::Tree::from_str(&svg, &usvg::Options::default()).context("parse snapshot svg")?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("allocate {}x{} pixmap", size.width(), size.height()))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mut rgba = pixmap.data().to_vec();
    unpremultiply_rgba8_in_place(&mut rgba);

    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &rgba,
        size.width(),
        size.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {} at {}ms", args.out.display(), at_ms);
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let (_, prepared) = render_scene(&args.in_path)?;
    let mut planned = Vec::new();
    for (annotation, p) in prepared.iter().enumerate() {
        for (path, style) in p.paths.iter().zip(&p.styles) {
            planned.push(PlannedPath {
                annotation,
                d: &path.d,
                length: path.length,
                stroke: &style.stroke,
                stroke_width: style.stroke_width,
                timing: style.dash.as_ref().map(|d| d.plan),
            });
        }
    }
    println!("{}", serde_json::to_string_pretty(&planned)?);
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
