/// Output formatting: terminal table, JSON, and TSV export.
use serde::Serialize;
use sweepstake_core::{format_tsv, Draw, Pick};

#[derive(Serialize)]
struct JsonOutput<'a> {
    race: &'a str,
    round: u32,
    picks: &'a [Pick],
}

/// Render the draw as a padded terminal table.
fn render_table(draw: &Draw) -> String {
    let player_width = draw
        .picks
        .iter()
        .map(|p| p.participant.len())
        .max()
        .unwrap_or(6)
        .max(6); // at least "Player"
    let pick_width = draw
        .picks
        .iter()
        .flat_map(|p| [p.first.family_name.len(), p.second.family_name.len()])
        .max()
        .unwrap_or(6)
        .max(6); // at least "Pick 1"

    let mut out = String::new();
    out.push_str(&format!("{} (round {})\n\n", draw.race.name, draw.race.round));
    out.push_str(&format!(
        "{:<player_width$} | {:<pick_width$} | {:<pick_width$}\n",
        "Player", "Pick 1", "Pick 2",
    ));
    out.push_str(&format!(
        "{}-|-{}-|-{}\n",
        "-".repeat(player_width),
        "-".repeat(pick_width),
        "-".repeat(pick_width),
    ));
    for p in &draw.picks {
        out.push_str(&format!(
            "{:<player_width$} | {:<pick_width$} | {:<pick_width$}\n",
            p.participant, p.first.family_name, p.second.family_name,
        ));
    }
    out
}

/// The two pick columns as a tab/newline table, ready for a spreadsheet
/// paste. Only family names are exported, matching the rendered table.
fn render_tsv(draw: &Draw) -> String {
    let first: Vec<String> = draw.picks.iter().map(|p| p.first.family_name.clone()).collect();
    let second: Vec<String> = draw.picks.iter().map(|p| p.second.family_name.clone()).collect();
    format_tsv(&first, &second)
}

pub fn print_table(draw: &Draw) {
    print!("{}", render_table(draw));
}

pub fn print_tsv(draw: &Draw) {
    println!("{}", render_tsv(draw));
}

pub fn print_json(draw: &Draw) {
    let output = JsonOutput {
        race: &draw.race.name,
        round: draw.race.round,
        picks: &draw.picks,
    };
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
