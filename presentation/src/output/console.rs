//! Console output for the reading board, spread and dialogs

use colored::Colorize;
use reverie_application::{Notice, NoticeLevel, ReadingSession};
use reverie_domain::{CardCatalog, DECK_SIZE, SPREAD_SIZE, Spread};

/// Board cells per row
const BOARD_COLUMNS: usize = 7;
/// Width of a spread grid cell
const GRID_CELL_WIDTH: usize = 18;

/// Formats reading state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Preparation status, the 44 face-down positions and the pick counter
    pub fn board(session: &ReadingSession) -> String {
        let mut output = String::new();
        let gates = session.deck().gates();

        output.push_str(&format!(
            "{} {}  {}  {}\n\n",
            "Deck:".cyan().bold(),
            Self::gate("shuffled", gates.shuffled),
            Self::gate("split", gates.split),
            Self::gate("assembled", gates.assembled),
        ));

        let deck = session.deck().deck();
        let selection = session.selection();
        for row_start in (0..DECK_SIZE).step_by(BOARD_COLUMNS) {
            let row_end = (row_start + BOARD_COLUMNS).min(DECK_SIZE);
            let cells: Vec<String> = (row_start..row_end)
                .map(|position| {
                    let label = format!("{:>2}", position + 1).dimmed();
                    let picked = selection
                        .is_position_selected(position)
                        .then(|| deck.card_at(position))
                        .flatten();
                    match picked {
                        Some(card) => {
                            let face = format!("{:<4}", format!("#{}", card));
                            format!("{} {}", label, face.green().bold())
                        }
                        None => format!("{} {:<4}", label, "??"),
                    }
                })
                .collect();
            output.push_str(&format!("  {}\n", cells.join(" ")));
        }

        output.push_str(&format!(
            "\n{} {}/{}\n",
            "Cards Selected:".cyan().bold(),
            selection.count(),
            SPREAD_SIZE
        ));
        output
    }

    fn gate(name: &str, closed: bool) -> String {
        if closed {
            format!("{} {}", "v".green(), name)
        } else {
            format!("{} {}", "-".dimmed(), name.dimmed())
        }
    }

    /// The finished spread laid out 3×3 with card names
    pub fn spread_grid(spread: &Spread, catalog: &CardCatalog) -> String {
        let border = format!(
            "+{}+\n",
            vec!["-".repeat(GRID_CELL_WIDTH); 3].join("+")
        );
        let mut output = Self::section_header("Your Spread");
        output.push('\n');
        output.push_str(&border);
        for row in spread.rows() {
            let ids: Vec<String> = row
                .iter()
                .map(|card| format!(" {:<width$}", format!("#{}", card), width = GRID_CELL_WIDTH - 1))
                .collect();
            let names: Vec<String> = row
                .iter()
                .map(|card| {
                    let name = Self::fit(&catalog.name_of(*card), GRID_CELL_WIDTH - 2);
                    format!(" {:<width$}", name, width = GRID_CELL_WIDTH - 1)
                        .yellow()
                        .to_string()
                })
                .collect();
            output.push_str(&format!("|{}|\n", ids.join("|")));
            output.push_str(&format!("|{}|\n", names.join("|")));
            output.push_str(&border);
        }
        output
    }

    fn fit(text: &str, width: usize) -> String {
        if text.chars().count() <= width {
            text.to_string()
        } else {
            let cut: String = text.chars().take(width.saturating_sub(1)).collect();
            format!("{}~", cut)
        }
    }

    /// A notice on a single line, colored by level
    pub fn notice(notice: &Notice) -> String {
        let title = format!("{}:", notice.title);
        let title = match notice.level {
            NoticeLevel::Info => title.cyan().bold(),
            NoticeLevel::Warning => title.yellow().bold(),
            NoticeLevel::Error => title.red().bold(),
        };
        format!("{} {}", title, notice.message)
    }

    /// A framed, titled block of text
    pub fn dialog(title: &str, text: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(title));
        output.push('\n');
        for line in text.lines() {
            output.push_str(&format!("  {}\n", line));
        }
        output.push_str(&Self::footer());
        output
    }

    pub fn welcome() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│        Reverie - Nine Card Spread           │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  shuffle, 1            - Shuffle the deck\n");
        output.push_str("  split, 2              - Split the deck into three piles\n");
        output.push_str("  assemble, regroup, 3  - Put the piles back together\n");
        output.push_str("  pick <n>, p <n>       - Draw the card at board position n\n");
        output.push_str("  interpret, 4          - Interpret the nine cards\n");
        output.push_str("  cards                 - Show the card interpretation again\n");
        output.push_str("  oracle, ai            - Show the AI interpretation again\n");
        output.push_str("  board, b              - Show the board\n");
        output.push_str("  help, h, ?            - Show this help\n");
        output.push_str("  quit, exit, q         - Leave\n");
        output
    }

    fn header(title: &str) -> String {
        let line = "═".repeat(50);
        format!("\n{}\n{:^50}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }

    fn footer() -> String {
        format!("{}\n", "═".repeat(50).cyan())
    }
}
