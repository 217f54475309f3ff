use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::Pattern;
use slitherwire_tools::{
    decode_packet_json, encode_state_json, format_decode_pretty, inspect_packet, InspectReport,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wire::WireLayout;

#[derive(Parser)]
#[command(
    name = "slitherwire-tools",
    version,
    about = "slitherwire packet inspection and fixture tools"
)]
struct Cli {
    /// Log decoder activity at debug level (overrides RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Maximum accepted packet size in bytes.
    #[arg(long, global = true)]
    max_packet_bytes: Option<usize>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check headers and summarize packet contents.
    Inspect {
        /// Path to a packet file or a directory of packets.
        packet_path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected packets.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected packets (after sorting).
        #[arg(long)]
        limit: Option<usize>,
        /// Record layout to decode with.
        #[arg(long, value_enum, default_value_t = LayoutArg::Aligned)]
        layout: LayoutArg,
    },
    /// Decode a packet into JSON or debug text.
    Decode {
        /// Path to the packet bytes.
        packet_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
        /// Stop pretty output after this many bytes.
        #[arg(long)]
        cap: Option<usize>,
        /// Record layout to decode with.
        #[arg(long, value_enum, default_value_t = LayoutArg::Aligned)]
        layout: LayoutArg,
    },
    /// Build a packet from a JSON game state.
    Encode {
        /// Path to the JSON state.
        state_file: PathBuf,
        /// Where to write the packet bytes.
        #[arg(long)]
        out: PathBuf,
        /// Record layout to encode with.
        #[arg(long, value_enum, default_value_t = LayoutArg::Aligned)]
        layout: LayoutArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    Aligned,
    Packed,
}

impl From<LayoutArg> for WireLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Aligned => Self::Aligned,
            LayoutArg::Packed => Self::Packed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut wire_limits = wire::Limits::default();
    if let Some(max) = cli.max_packet_bytes {
        wire_limits.max_packet_bytes = max;
    }
    let limits = codec::CodecLimits::default();

    match cli.command {
        Command::Inspect {
            packet_path,
            glob,
            sort,
            limit,
            layout,
        } => {
            let layout = WireLayout::from(layout);
            if packet_path.is_dir() {
                let entries = collect_packet_entries(&packet_path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                debug!(count = entries.len(), dir = %packet_path.display(), "inspecting packets");
                for entry in entries {
                    let bytes = fs::read(&entry.path)
                        .with_context(|| format!("read packet {}", entry.path.display()))?;
                    let report = inspect_packet(&bytes, layout, &wire_limits, &limits);
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    print_inspect_report(&report);
                }
            } else {
                let bytes = fs::read(&packet_path)
                    .with_context(|| format!("read packet {}", packet_path.display()))?;
                let report = inspect_packet(&bytes, layout, &wire_limits, &limits);
                print_inspect_report(&report);
            }
        }
        Command::Decode {
            packet_file,
            format,
            cap,
            layout,
        } => {
            let bytes = fs::read(&packet_file)
                .with_context(|| format!("read packet {}", packet_file.display()))?;
            let output = decode_packet_json(&bytes, layout.into(), &wire_limits, &limits)?;
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&output).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    print!("{}", format_decode_pretty(&output, cap));
                }
            }
        }
        Command::Encode {
            state_file,
            out,
            layout,
        } => {
            let json = fs::read_to_string(&state_file)
                .with_context(|| format!("read state {}", state_file.display()))?;
            let bytes = encode_state_json(&json, layout.into(), &limits)?;
            fs::write(&out, &bytes).with_context(|| format!("write packet {}", out.display()))?;
            println!("wrote {} bytes to {}", bytes.len(), out.display());
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

struct PacketEntry {
    path: PathBuf,
    size: u64,
}

fn collect_packet_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<PacketEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(PacketEntry { path, size });
    }
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<PacketEntry>,
    sort: Option<InspectSort>,
) -> Vec<PacketEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => entries.sort_by(|a, b| a.path.cmp(&b.path)),
    }
    entries
}

fn print_inspect_report(report: &InspectReport) {
    println!(
        "header: {} length: {} bytes layout: {}",
        if report.header_ok { "GAMEDATA" } else { "mismatch" },
        report.byte_len,
        report.layout.name()
    );
    if let Some(players) = report.declared_players {
        println!("declared players: {players}");
    }
    match &report.outcome {
        Ok(summary) => {
            println!(
                "decoded: {} players, {} segments, {} foods",
                summary.players.len(),
                summary.segments,
                summary.foods
            );
            for player in &summary.players {
                println!("  {}: {} segments", player.id, player.segments);
            }
        }
        Err(err) => println!("decode error: {err}"),
    }
}
