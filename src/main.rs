//! roomplan CLI: render and validate room measurement documents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, bail};

use roomplan::cabinets::CabinetLayer;
use roomplan::render::{ascii, svg};
use roomplan::{OverflowPolicy, PlanDocument, ScaleContext, SvgOptions, SvgView};

#[derive(Parser)]
#[command(name = "roomplan", version, about = "Floor plans from measured walls")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the plan as an ASCII character grid
    Ascii {
        /// JSON measurement document
        document: PathBuf,
        #[command(flatten)]
        scale: ScaleArgs,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the symbol legend after the grid
        #[arg(long)]
        legend: bool,
    },
    /// Render the plan as SVG
    Svg {
        /// JSON measurement document
        document: PathBuf,
        #[command(flatten)]
        scale: ScaleArgs,
        /// Furniture overlay to draw
        #[arg(long, value_enum, default_value_t = ViewArg::Plan)]
        view: ViewArg,
        /// Plan title drawn in the top margin
        #[arg(long)]
        title: Option<String>,
        /// Omit dimension labels and tick marks
        #[arg(long)]
        no_dimensions: bool,
        /// Omit the compass rose
        #[arg(long)]
        no_compass: bool,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check the measurements against their declared totals
    Validate {
        /// JSON measurement document
        document: PathBuf,
        #[command(flatten)]
        scale: ScaleArgs,
    },
    /// Report sequential cabinet placement for one layer
    Cabinets {
        /// JSON measurement document
        document: PathBuf,
        /// Which layer to plan
        #[arg(long, value_enum, default_value_t = LayerArg::Base)]
        layer: LayerArg,
    },
}

#[derive(Args)]
struct ScaleArgs {
    /// Output units per inch
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// Zoom multiplier applied on top of the scale
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,
    /// Fit the room into a COLSxROWS canvas instead of using --scale
    #[arg(long, value_name = "COLSxROWS")]
    fit: Option<String>,
    /// Fail when a segment would scale below one cell instead of clamping
    #[arg(long)]
    strict: bool,
}

impl ScaleArgs {
    fn context(&self, room: &roomplan::RoomLayout) -> miette::Result<ScaleContext> {
        let ctx = match &self.fit {
            Some(spec) => {
                let (cols, rows) = parse_fit(spec)?;
                ScaleContext::fit(room, cols, rows, self.zoom)?
            }
            None => ScaleContext::new(self.scale, self.zoom)?,
        };
        Ok(if self.strict {
            ctx.with_policy(OverflowPolicy::Strict)
        } else {
            ctx
        })
    }
}

fn parse_fit(spec: &str) -> miette::Result<(usize, usize)> {
    let parsed = spec
        .split_once('x')
        .and_then(|(c, r)| Some((c.parse::<usize>().ok()?, r.parse::<usize>().ok()?)));
    match parsed {
        Some(dims) => Ok(dims),
        None => bail!("--fit expects COLSxROWS, e.g. 80x24, got {spec:?}"),
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Plan,
    Base,
    Wall,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayerArg {
    Base,
    Wall,
}

impl From<LayerArg> for CabinetLayer {
    fn from(layer: LayerArg) -> Self {
        match layer {
            LayerArg::Base => CabinetLayer::Base,
            LayerArg::Wall => CabinetLayer::Wall,
        }
    }
}

/// Build the full output string first, then write it in one call, so a
/// failed render never leaves a truncated file behind.
fn emit(out: Option<&PathBuf>, content: &str) -> miette::Result<()> {
    match out {
        Some(path) => std::fs::write(path, content).into_diagnostic(),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

fn main() -> miette::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Command::Ascii {
            document,
            scale,
            out,
            legend,
        } => {
            let doc = PlanDocument::from_path(&document)?;
            let room = doc.room_layout()?;
            let ctx = scale.context(&room)?;
            let art = ascii::render(&room, &ctx)?;
            let mut content = art.to_string();
            if legend {
                content.push('\n');
                for line in ascii::legend() {
                    content.push_str(line);
                    content.push('\n');
                }
            }
            emit(out.as_ref(), &content)?;
        }
        Command::Svg {
            document,
            scale,
            view,
            title,
            no_dimensions,
            no_compass,
            out,
        } => {
            let doc = PlanDocument::from_path(&document)?;
            let room = doc.room_layout()?;
            let ctx = scale.context(&room)?;
            let options = SvgOptions {
                title,
                show_dimensions: !no_dimensions,
                show_compass: !no_compass,
                ..SvgOptions::default()
            };
            let content = match view {
                ViewArg::Plan => svg::render(&room, &ctx, &options),
                ViewArg::Base => {
                    let plan = roomplan::cabinet_plan(&doc, CabinetLayer::Base)?;
                    svg::render_view(&room, &ctx, &options, SvgView::Base, &plan)
                }
                ViewArg::Wall => {
                    let plan = roomplan::cabinet_plan(&doc, CabinetLayer::Wall)?;
                    svg::render_view(&room, &ctx, &options, SvgView::Wall, &plan)
                }
            };
            emit(out.as_ref(), &content)?;
        }
        Command::Validate { document, scale } => {
            let doc = PlanDocument::from_path(&document)?;
            let room = doc.room_layout()?;
            let ctx = scale.context(&room)?;
            let report = roomplan::validate_document(&doc, &ctx)?;
            println!("{report}");
            if !report.is_ok() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Cabinets { document, layer } => {
            let doc = PlanDocument::from_path(&document)?;
            let plan = roomplan::cabinet_plan(&doc, layer.into())?;
            print!("{plan}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
