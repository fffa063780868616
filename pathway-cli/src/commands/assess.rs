//! Interactive career assessment.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;
use dialoguer::{Confirm, MultiSelect, Select, theme::ColorfulTheme};
use tracing::debug;

use pathway_core::{
    ApiConfig, AssessmentController, HttpBackend, ResultStore, SessionFileStore, SubmitOutcome,
};

use crate::options;
use crate::render;

/// Assessment arguments.
///
/// With no flags the command prompts interactively; flags pre-fill the
/// draft and skip the prompts entirely for scripted use.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Select a skill (repeatable)
    #[arg(long = "skill", value_name = "NAME")]
    pub skills: Vec<String>,

    /// Select an interest (repeatable)
    #[arg(long = "interest", value_name = "NAME")]
    pub interests: Vec<String>,

    /// Select a preferred career category (repeatable)
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Experience level
    #[arg(long, value_name = "LEVEL")]
    pub experience: Option<String>,
}

impl AssessArgs {
    fn is_interactive(&self) -> bool {
        self.skills.is_empty()
            && self.interests.is_empty()
            && self.categories.is_empty()
            && self.experience.is_none()
    }
}

/// Run the assessment flow.
pub async fn run(args: AssessArgs) -> Result<()> {
    let backend = Arc::new(HttpBackend::new(ApiConfig::from_env()));
    let store = Arc::new(SessionFileStore::new());
    let controller = AssessmentController::new(backend, store.clone());

    let interactive = args.is_interactive();
    for skill in &args.skills {
        controller.toggle_skill(skill);
    }
    for interest in &args.interests {
        controller.toggle_interest(interest);
    }
    for category in &args.categories {
        controller.toggle_category(category);
    }
    if let Some(level) = &args.experience {
        controller.set_experience_level(level);
    }

    if interactive {
        prompt_selections(&controller)?;
    }

    loop {
        debug!(draft = ?controller.draft(), "submitting assessment");
        match controller.submit().await {
            SubmitOutcome::Submitted => {
                if let Some(response) = store.latest() {
                    render::print_response(&response);
                }
                return Ok(());
            }
            SubmitOutcome::Invalid { message } => {
                if !interactive {
                    bail!(message);
                }
                eprintln!("{message}");
                prompt_selections(&controller)?;
            }
            SubmitOutcome::Failed { message } => {
                if !interactive {
                    bail!(message);
                }
                eprintln!("{message}");
                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt("Try submitting again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(());
                }
            }
            // Nothing else submits concurrently in this command.
            SubmitOutcome::AlreadyPending => return Ok(()),
        }
    }
}

/// Walk the user through the four selection prompts, applying changes as
/// toggles against the current draft.
fn prompt_selections(controller: &AssessmentController) -> Result<()> {
    let theme = ColorfulTheme::default();
    let draft = controller.draft();

    let chosen = MultiSelect::with_theme(&theme)
        .with_prompt("Skills you have (space to toggle, enter to confirm)")
        .items(options::SKILLS)
        .defaults(&membership(options::SKILLS, &draft.skills))
        .interact()?;
    sync_selection(options::SKILLS, &draft.skills, &chosen, |name| {
        controller.toggle_skill(name)
    });

    let chosen = MultiSelect::with_theme(&theme)
        .with_prompt("Areas you are interested in")
        .items(options::INTERESTS)
        .defaults(&membership(options::INTERESTS, &draft.interests))
        .interact()?;
    sync_selection(options::INTERESTS, &draft.interests, &chosen, |name| {
        controller.toggle_interest(name)
    });

    let default_level = options::EXPERIENCE_LEVELS
        .iter()
        .position(|l| *l == draft.experience_level)
        .unwrap_or(0);
    let level = Select::with_theme(&theme)
        .with_prompt("Your experience level")
        .items(options::EXPERIENCE_LEVELS)
        .default(default_level)
        .interact()?;
    controller.set_experience_level(options::EXPERIENCE_LEVELS[level]);

    let chosen = MultiSelect::with_theme(&theme)
        .with_prompt("Preferred career categories (optional)")
        .items(options::CATEGORIES)
        .defaults(&membership(options::CATEGORIES, &draft.preferred_categories))
        .interact()?;
    sync_selection(
        options::CATEGORIES,
        &draft.preferred_categories,
        &chosen,
        |name| controller.toggle_category(name),
    );

    Ok(())
}

/// Which options are currently selected, index-aligned with `options`.
fn membership(options: &[&str], current: &[String]) -> Vec<bool> {
    options
        .iter()
        .map(|option| current.iter().any(|s| s == option))
        .collect()
}

/// Toggle every option whose membership changed between the previous draft
/// and the prompt result.
fn sync_selection(
    options: &[&str],
    current: &[String],
    chosen: &[usize],
    mut toggle: impl FnMut(&str),
) {
    for (idx, option) in options.iter().enumerate() {
        let selected_now = chosen.contains(&idx);
        let selected_before = current.iter().any(|s| s == *option);
        if selected_now != selected_before {
            toggle(option);
        }
    }
}
