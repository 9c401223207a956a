use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "glyphseq", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode keyframe interchange text into a document JSON.
    Decode(DecodeArgs),
    /// Encode a document JSON as keyframe interchange text.
    Encode(EncodeArgs),
    /// Reconstruct a glyph sequence from keyframe interchange text.
    Reconstruct(ReconstructArgs),
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Input keyframe text file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output keyframe text path (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ReconstructArgs {
    /// Input keyframe text file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Glyph catalog JSON (array of glyph metadata entries). When omitted,
    /// unresolved placement records are emitted instead of full glyphs.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output JSON path (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Decode(args) => cmd_decode(args),
        Command::Encode(args) => cmd_encode(args),
        Command::Reconstruct(args) => cmd_reconstruct(args),
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}

fn write_output(out: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let text = read_text(&args.in_path)?;
    let doc = glyphseq::decode_keyframes(&text)?;
    let json = serde_json::to_string_pretty(&doc).context("serialize document JSON")?;
    write_output(args.out.as_deref(), &json)
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open document '{}'", args.in_path.display()))?;
    let doc: glyphseq::KeyframeDocument =
        serde_json::from_reader(BufReader::new(f)).context("parse document JSON")?;
    write_output(args.out.as_deref(), &glyphseq::encode_keyframes(&doc))
}

fn cmd_reconstruct(args: ReconstructArgs) -> anyhow::Result<()> {
    let text = read_text(&args.in_path)?;
    let doc = glyphseq::decode_keyframes(&text)?;
    let placements = glyphseq::reconstruct_placements(&doc)?;

    let json = match &args.catalog {
        Some(catalog_path) => {
            let f = File::open(catalog_path)
                .with_context(|| format!("open catalog '{}'", catalog_path.display()))?;
            let catalog = glyphseq::GlyphCatalog::from_json_reader(BufReader::new(f))?;
            let glyphs = glyphseq::resolve_placements(&placements, &catalog)?;
            serde_json::to_string_pretty(&glyphs).context("serialize glyph JSON")?
        }
        None => serde_json::to_string_pretty(&placements).context("serialize placement JSON")?,
    };

    write_output(args.out.as_deref(), &json)
}
