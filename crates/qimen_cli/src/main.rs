use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use qimen_base::{
    Board, BoardRequest, BoardStyle, Branch, DecadeHead, DunType, GridCell, Palace, Stem, Symbol,
    compute_board_with, grid_cells,
};
use qimen_config::QimenConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qimen", about = "QiMen Dunjia board calculator")]
struct Cli {
    /// Config file (defaults to $QIMEN_CONFIG when set)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a board and list it palace by palace
    Board {
        #[command(flatten)]
        hour: HourArgs,
        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute a board and draw it as the 3x3 Luoshu grid
    Grid {
        #[command(flatten)]
        hour: HourArgs,
        /// Print the grid cells as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decade head, hidden stem and void branches of an hour
    Decade {
        /// Hour stem (glyph or pinyin, e.g. 乙 or yi)
        #[arg(long)]
        stem: Stem,
        /// Hour branch (glyph or pinyin, e.g. 亥 or hai)
        #[arg(long)]
        branch: Branch,
    },
}

#[derive(Args)]
struct HourArgs {
    /// Board style: rotary (zhuan) or flying (fei)
    #[arg(long)]
    style: Option<BoardStyle>,
    /// Dun polarity: yang or yin
    #[arg(long)]
    dun: Option<DunType>,
    /// Method number (ju), 1-9
    #[arg(long)]
    method: Option<u8>,
    /// Hour stem (glyph or pinyin, e.g. 乙 or yi)
    #[arg(long)]
    stem: Stem,
    /// Hour branch (glyph or pinyin, e.g. 亥 or hai)
    #[arg(long)]
    branch: Branch,
}

impl HourArgs {
    /// Request from the flags, falling back to the config's `[board]` section.
    fn request(&self, config: &QimenConfig) -> Result<BoardRequest> {
        let defaults = config.board;
        let req = BoardRequest::new(
            self.style.unwrap_or(defaults.style),
            self.dun.unwrap_or(defaults.dun),
            self.method.unwrap_or(defaults.method),
            self.stem,
            self.branch,
        )?;
        Ok(req)
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<QimenConfig> {
    match path {
        Some(p) => QimenConfig::from_file(p)
            .with_context(|| format!("loading config {}", p.display())),
        None => QimenConfig::load().context("loading config from $QIMEN_CONFIG"),
    }
}

fn compute(hour: &HourArgs, config: &QimenConfig) -> Result<Board> {
    let req = hour.request(config)?;
    let table = config.deity_table()?;
    Ok(compute_board_with(&req, &table))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Board { hour, json } => {
            let config = load_config(cli.config.as_deref())?;
            let board = compute(&hour, &config)?;
            if json {
                println!("{}", board_json(&board)?);
            } else {
                print_summary(&board);
                println!();
                print_palaces(&board);
            }
        }

        Commands::Grid { hour, json } => {
            let config = load_config(cli.config.as_deref())?;
            let board = compute(&hour, &config)?;
            let cells = grid_cells(&board);
            if json {
                println!("{}", grid_json(&cells)?);
            } else {
                print_summary(&board);
                println!();
                print_grid(&cells);
            }
        }

        Commands::Decade { stem, branch } => {
            let head = strict_decade(stem, branch)?;
            println!("Hour:        {}{}", stem.glyph(), branch.glyph());
            println!("Decade head: {} ({})", head.glyph(), head.name());
            println!("Hidden stem: {}", head.hidden_stem().glyph());
            println!("Void:        {}", head.void().glyphs());
        }
    }

    Ok(())
}

/// Decade head of a real hour; mismatched pairs are an error here.
fn strict_decade(stem: Stem, branch: Branch) -> Result<DecadeHead> {
    let Some(head) = DecadeHead::lookup(stem, branch) else {
        bail!(
            "{}{} is not a sexagenary pair; stem and branch must share parity",
            stem.glyph(),
            branch.glyph()
        );
    };
    Ok(head)
}

fn board_json(board: &Board) -> Result<String> {
    Ok(serde_json::to_string_pretty(board)?)
}

fn grid_json(cells: &[GridCell; 9]) -> Result<String> {
    Ok(serde_json::to_string_pretty(cells)?)
}

fn print_summary(board: &Board) {
    let m = &board.meta;
    println!(
        "{} board, {} dun, method {}, hour {}{}",
        m.style,
        m.dun,
        m.method,
        m.time_stem.glyph(),
        m.time_branch.glyph()
    );
    println!(
        "Decade head {} (hidden {}), void {}",
        m.decade_head.glyph(),
        m.decade_head.hidden_stem().glyph(),
        m.void.glyphs()
    );
    println!(
        "Duty star {} -> palace {}, duty gate {} -> palace {} (home palace {} {})",
        m.duty_star.glyph(),
        m.time_stem_palace.number(),
        m.duty_gate.glyph(),
        m.duty_gate_target.number(),
        m.duty_palace.number(),
        m.duty_palace.trigram()
    );
}

fn print_palaces(board: &Board) {
    let l = &board.layers;
    println!(
        "{}{}{}{}Heaven/Earth",
        pad("Palace", 10),
        pad("Deity", 8),
        pad("Star", 8),
        pad("Gate", 6)
    );
    for (palace, earth) in l.earth.iter() {
        println!(
            "{}{}{}{}{}/{}",
            pad(&palace_label(palace), 10),
            pad(or_dash(l.deities.get(palace)), 8),
            pad(or_dash(l.stars.get(palace)), 8),
            pad(or_dash(l.gates.get(palace)), 6),
            or_dash(l.heaven.get(palace)),
            or_dash(earth)
        );
    }
}

const CELL_WIDTH: usize = 14;

fn print_grid(cells: &[GridCell; 9]) {
    let border = format!("+{}", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(3));
    println!("{border}");
    for row in cells.chunks(3) {
        let lines: [Vec<String>; 4] = [
            row.iter().map(|c| palace_label(c.palace)).collect(),
            row.iter().map(|c| or_dash(c.deity).to_string()).collect(),
            row.iter()
                .map(|c| format!("{} {}", or_dash(c.star), or_dash(c.gate)))
                .collect(),
            row.iter()
                .map(|c| format!("{}/{}", or_dash(c.heaven), or_dash(c.earth)))
                .collect(),
        ];
        for line in &lines {
            let padded: Vec<String> = line.iter().map(|s| pad(s, CELL_WIDTH - 1)).collect();
            println!("| {}|", padded.join("| "));
        }
        println!("{border}");
    }
}

fn palace_label(palace: Palace) -> String {
    format!("{} {}", palace.number(), palace.trigram())
}

fn or_dash<T: Symbol>(value: Option<T>) -> &'static str {
    value.map_or("-", Symbol::glyph)
}

/// Pad to `width` terminal columns, counting CJK characters as two columns.
fn pad(s: &str, width: usize) -> String {
    let used: usize = s
        .chars()
        .map(|c| if (c as u32) >= 0x2E80 { 2 } else { 1 })
        .sum();
    format!("{s}{}", " ".repeat(width.saturating_sub(used)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_counts_cjk_as_two_columns() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("天蓬", 6), "天蓬  ");
        assert_eq!(pad("天蓬", 2), "天蓬");
    }

    #[test]
    fn flags_override_config_defaults() {
        let cli = Cli::try_parse_from([
            "qimen", "board", "--style", "fei", "--method", "9", "--stem", "丙", "--branch", "zi",
        ])
        .unwrap();
        let Commands::Board { hour, json } = cli.command else {
            panic!("expected board subcommand");
        };
        assert!(!json);
        let req = hour.request(&QimenConfig::default()).unwrap();
        assert_eq!(req.style, BoardStyle::Flying);
        assert_eq!(req.dun, DunType::Yang);
        assert_eq!(req.method, 9);
        assert_eq!(req.time_stem, Stem::Bing);
        assert_eq!(req.time_branch, Branch::Zi);
    }

    #[test]
    fn method_out_of_range_is_rejected() {
        let cli = Cli::try_parse_from([
            "qimen", "grid", "--method", "0", "--stem", "yi", "--branch", "hai",
        ])
        .unwrap();
        let Commands::Grid { hour, .. } = cli.command else {
            panic!("expected grid subcommand");
        };
        assert!(hour.request(&QimenConfig::default()).is_err());
    }

    #[test]
    fn decade_rejects_mismatched_pair() {
        let cli =
            Cli::try_parse_from(["qimen", "decade", "--stem", "甲", "--branch", "chou"]).unwrap();
        let Commands::Decade { stem, branch } = cli.command else {
            panic!("expected decade subcommand");
        };
        let err = strict_decade(stem, branch).unwrap_err();
        assert!(err.to_string().contains("甲丑"));
    }

    #[test]
    fn decade_accepts_real_hour() {
        let head = strict_decade(Stem::Yi, Branch::Hai).unwrap();
        assert_eq!(head, DecadeHead::JiaXu);
        assert_eq!(head.void().glyphs(), "申酉");
    }

    #[test]
    fn board_json_flag_renders_export_shape() {
        let cli = Cli::try_parse_from([
            "qimen", "board", "--json", "--stem", "yi", "--branch", "hai",
        ])
        .unwrap();
        let Commands::Board { hour, json } = cli.command else {
            panic!("expected board subcommand");
        };
        assert!(json);
        let board = compute(&hour, &QimenConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&board_json(&board).unwrap()).unwrap();
        assert_eq!(value["meta"]["decade_head"], "甲戌");
        assert_eq!(value["meta"]["duty_gate_target"], 3);
        assert_eq!(value["heaven"]["9"], "己");
    }

    #[test]
    fn grid_json_lists_nine_cells() {
        let cli = Cli::try_parse_from([
            "qimen", "grid", "--json", "--style", "flying", "--dun", "yin", "--method", "9",
            "--stem", "丙", "--branch", "子",
        ])
        .unwrap();
        let Commands::Grid { hour, json } = cli.command else {
            panic!("expected grid subcommand");
        };
        assert!(json);
        let cells = grid_cells(&compute(&hour, &QimenConfig::default()).unwrap());
        let value: serde_json::Value = serde_json::from_str(&grid_json(&cells).unwrap()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(9));
        assert_eq!(value[4]["star"], "天芮");
    }

    #[test]
    fn unknown_stem_fails_to_parse() {
        assert!(Cli::try_parse_from(["qimen", "decade", "--stem", "x", "--branch", "zi"]).is_err());
    }
}
