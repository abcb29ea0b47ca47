//! Plain-text rendering of tables, score sheets and history for the CLI.

use std::io::{self, Write};

use scorekeeper::domain::snapshot::{PhaseSnapshot, SeatResult};
use scorekeeper::domain::{Resolution, ScoreSheet, SoloGrade, TableSnapshot};
use scorekeeper::SavedGameSummary;
use time::macros::format_description;

/// CLI keyword for a solo grade, as accepted by `act <id> grade <grade>`.
pub fn grade_keyword(grade: SoloGrade) -> &'static str {
    match grade {
        SoloGrade::Win61To90 => "win61",
        SoloGrade::Win91Plus => "win91",
        SoloGrade::WinAllTricks => "win-all",
        SoloGrade::Lose31To60 => "lose60",
        SoloGrade::Lose30OrLess => "lose30",
        SoloGrade::LoseNoTricks => "lose-all",
    }
}

fn choice_hint(choice: &Resolution, names: &[String]) -> String {
    match *choice {
        Resolution::NoPlay { loser } => {
            let name = names.get(usize::from(loser)).map_or("?", String::as_str);
            format!("lost {loser}  ({name} zaudē)")
        }
        Resolution::SmallGame { won: true } => "small-won  (Uzvar)".to_string(),
        Resolution::SmallGame { won: false } => "small-lost  (Zaudē)".to_string(),
        Resolution::SoloGame { grade } => {
            format!("grade {}  ({})", grade_keyword(grade), grade.label())
        }
    }
}

pub fn table<W: Write>(out: &mut W, snap: &TableSnapshot) -> io::Result<()> {
    writeln!(out, "Round {}", snap.round_no)?;
    for seat in &snap.seats {
        let mut tags = Vec::new();
        if seat.is_dealer {
            tags.push("dealer".to_string());
        }
        if let Some(pos) = seat.hand_position {
            tags.push(format!("{pos}. roka"));
        }
        if seat.is_declarer {
            tags.push("declarer".to_string());
        }
        let marker = if seat.to_act { ">" } else { " " };
        writeln!(
            out,
            "{marker} [{}] {:<16} {:>6}  {}",
            seat.seat,
            seat.name,
            seat.total,
            tags.join(", ")
        )?;
    }

    let names: Vec<String> = snap.seats.iter().map(|s| s.name.clone()).collect();
    match &snap.phase {
        PhaseSnapshot::Setup => writeln!(out, "Setup incomplete")?,
        PhaseSnapshot::Bidding { to_act, passes } => {
            let name = names.get(usize::from(*to_act)).map_or("?", String::as_str);
            writeln!(
                out,
                "Bidding: {name} to act ({} pass(es) so far). Options: pass, small, zole, big",
                passes.len()
            )?;
        }
        PhaseSnapshot::Declared { game_type, choices } => {
            writeln!(out, "Declared: {}", game_type.label())?;
            for choice in choices {
                writeln!(out, "  {}", choice_hint(choice, &names))?;
            }
        }
    }
    Ok(())
}

pub fn score_sheet<W: Write>(out: &mut W, sheet: &ScoreSheet) -> io::Result<()> {
    write!(out, "{:>3}  {:<10}", "#", "Game")?;
    for name in &sheet.players {
        write!(out, " {name:>14}")?;
    }
    writeln!(out)?;

    for row in &sheet.rows {
        write!(out, "{:>3}  {:<10}", row.round_no, row.label)?;
        for cell in &row.cells {
            let mark = match cell.result {
                SeatResult::Won => "+",
                SeatResult::Lost => "-",
                SeatResult::Neutral => " ",
            };
            write!(out, " {:>6} ({:>4}){mark}", cell.total, cell.delta)?;
        }
        writeln!(out)?;
    }

    write!(out, "{:>3}  {:<10}", "", "Total")?;
    for total in &sheet.totals {
        write!(out, " {total:>14}")?;
    }
    writeln!(out)
}

pub fn history<W: Write>(out: &mut W, games: &[SavedGameSummary]) -> io::Result<()> {
    if games.is_empty() {
        return writeln!(out, "No saved games");
    }
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    for game in games {
        let date = game
            .date
            .format(&format)
            .unwrap_or_else(|_| "unknown".to_string());
        let standings: Vec<String> = game
            .players
            .iter()
            .zip(&game.totals)
            .map(|(name, total)| format!("{name} {total}"))
            .collect();
        writeln!(
            out,
            "{}  {date}  rounds: {:>3}  {}",
            game.id,
            game.rounds_played,
            standings.join(", ")
        )?;
    }
    Ok(())
}
