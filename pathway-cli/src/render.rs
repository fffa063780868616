//! Rendering of recommendation results.
//!
//! Pure presentation over a stored [`RecommendationResponse`]: ranked order
//! is taken as-is, scores are banded and percent-formatted.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use pathway_models::{MatchBand, RecommendationResponse};

/// Print a response: ranked table, then per-career skill detail.
pub fn print_response(response: &RecommendationResponse) {
    println!("{}", response_table(response));

    for (rank, career) in response.recommendations.iter().enumerate() {
        println!("\n{}. {} - {}", rank + 1, career.title, career.description);
        if !career.matched_skills.is_empty() {
            println!("   Matched skills: {}", career.matched_skills.join(", "));
        }
        if !career.missing_skills.is_empty() {
            println!("   Skills to develop: {}", career.missing_skills.join(", "));
        }
        if !career.education.is_empty() {
            println!("   Education: {}", career.education);
        }
    }

    println!(
        "\nAnalyzed {} careers against your profile.",
        response.total_careers_analyzed
    );
}

/// Build the ranked results table.
pub fn response_table(response: &RecommendationResponse) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Career", "Category", "Match", "Fit", "Salary"]);

    for (rank, career) in response.recommendations.iter().enumerate() {
        let band = career.match_band();
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&career.title),
            Cell::new(&career.category),
            Cell::new(format!("{}%", career.match_percent())).fg(band_color(band)),
            Cell::new(band.label()).fg(band_color(band)),
            Cell::new(&career.salary_range),
        ]);
    }

    table
}

fn band_color(band: MatchBand) -> Color {
    match band {
        MatchBand::Excellent => Color::Green,
        MatchBand::Good => Color::Yellow,
        MatchBand::Fair => Color::DarkYellow,
        MatchBand::Low => Color::Red,
    }
}
