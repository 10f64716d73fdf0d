// Headless mode - line-oriented play without a TUI
//
// Loads a board, prints the grid as a text table and then reads one command
// per line. Loads run inline, so a restart finishes before the next command
// is read. Logs go to stderr; stdout carries only the board and replies.
//
// Commands:
//   <cat>-<clue>            activate a cell (e.g. "2-3")
//   reveal <cat> <clue>     same, spelled out
//   show                    print the grid
//   restart                 load a new board
//   help                    list commands
//   quit                    exit

use crate::api::TriviaClient;
use crate::board::CellPos;
use crate::game::interaction::STALE_CELL_MESSAGE;
use crate::game::{Activation, GameController, GameState, LoadCompletion, LoadPlan};
use crate::render::GridView;
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Column width for the printed table
const COLUMN_WIDTH: usize = 18;

const HELP: &str = "commands: <cat>-<clue> | reveal <cat> <clue> | show | restart | help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Activate(CellPos),
    Show,
    Restart,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err("empty command".to_string());
        };

        let command = match first.to_lowercase().as_str() {
            "show" => Command::Show,
            "restart" | "new" => Command::Restart,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "reveal" => {
                let (Some(category), Some(clue)) = (words.next(), words.next()) else {
                    return Err("usage: reveal <cat> <clue>".to_string());
                };
                let pos = format!("{}-{}", category, clue).parse::<CellPos>()?;
                Command::Activate(pos)
            }
            other => Command::Activate(other.parse::<CellPos>()?),
        };

        if words.next().is_some() {
            return Err(format!("unexpected arguments after {:?}", first));
        }
        Ok(command)
    }
}

/// Play on `input`/`output` until `quit` or end of input
pub async fn run_headless<R, W>(
    client: &TriviaClient,
    plan: LoadPlan,
    placeholder: &str,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut controller = GameController::new(placeholder);
    let mut grid = GridView::default();

    load(&mut controller, client, plan, &mut grid, output).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Show) => print_grid(&controller, &grid, output)?,
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(Command::Restart) => load(&mut controller, client, plan, &mut grid, output).await?,
            Ok(Command::Activate(pos)) => {
                if controller.state() != &GameState::Ready {
                    writeln!(output, "no board loaded (try restart)")?;
                    continue;
                }
                let outcome = controller.activate(pos, &mut grid);
                report_activation(outcome, pos, &grid, output)?;
                if outcome == Activation::Answer
                    && controller.board().is_some_and(|b| b.is_finished())
                {
                    writeln!(output, "board cleared! type restart for a new one")?;
                }
            }
            Err(e) => writeln!(output, "error: {}", e)?,
        }
        output.flush()?;
    }

    Ok(())
}

async fn load<W: Write>(
    controller: &mut GameController,
    client: &TriviaClient,
    plan: LoadPlan,
    grid: &mut GridView,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "loading board...")?;
    match controller.start_or_restart(client, plan, grid).await {
        LoadCompletion::Applied => print_grid(controller, grid, output)?,
        LoadCompletion::Failed(e) => {
            writeln!(output, "could not load a board: {}", e)?;
            writeln!(output, "type restart to try again")?;
        }
        LoadCompletion::Stale => {}
    }
    output.flush()?;
    Ok(())
}

fn print_grid<W: Write>(
    controller: &GameController,
    grid: &GridView,
    output: &mut W,
) -> Result<()> {
    write!(output, "{}", grid.to_text_table(COLUMN_WIDTH))?;
    if let Some(board) = controller.board() {
        writeln!(
            output,
            "revealed {}/{}",
            board.revealed(),
            board.total_clues()
        )?;
    }
    Ok(())
}

fn report_activation<W: Write>(
    outcome: Activation,
    pos: CellPos,
    grid: &GridView,
    output: &mut W,
) -> Result<()> {
    let text = grid.cell(pos).unwrap_or_default();
    match outcome {
        Activation::Question => writeln!(output, "[{}] Q: {}", pos, text)?,
        Activation::Answer => writeln!(output, "[{}] A: {}", pos, text)?,
        Activation::Ignored => writeln!(output, "[{}] already answered: {}", pos, text)?,
        Activation::Stale => writeln!(output, "[{}] {}", pos, STALE_CELL_MESSAGE)?,
    }
    Ok(())
}
