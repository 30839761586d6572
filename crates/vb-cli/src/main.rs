mod compose;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use vb_core::{
    ALL_CATEGORIES, BoardFeedback, Question, SelectionError, SelectionSet, SizeClass, Survey,
    SurveyState, Toggled, by_category, category_counts, discount_percent, layout_for,
    millis_to_iso8601, product_catalog, survey_questions,
};
use vb_store::SessionStore;

#[derive(Parser)]
#[command(name = "vb", about = "Vision-board survey, collage and shop CLI")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the survey questions and their options
    Questions,

    /// Toggle one image selection for a question
    Toggle {
        /// Question id (e.g. "fitness")
        question: String,
        /// Option label (e.g. "Morning stretch")
        label: String,
    },

    /// Show selection progress across all questions
    Status,

    /// Finalize the survey and compose the vision board
    Board,

    /// Project the board through the collage slot table
    Layout {
        /// Container width in pixels
        #[arg(long, default_value_t = 1024)]
        width: u32,
    },

    /// Browse products filtered against the catalog
    Shop {
        /// Category id, or "all"
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },

    /// Record whether the board landed
    Feedback { verdict: Verdict },

    /// Write the current board as JSON
    Export {
        /// Output file path
        path: PathBuf,
    },

    /// Clear the whole session
    Reset,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Verdict {
    Liked,
    Disliked,
}

fn open_store() -> Result<SessionStore> {
    SessionStore::open_default().context("failed to open session store")
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Questions => cmd_questions(),
        Commands::Toggle { question, label } => cmd_toggle(question, label),
        Commands::Status => cmd_status(),
        Commands::Board => cmd_board().await,
        Commands::Layout { width } => cmd_layout(*width),
        Commands::Shop { category } => cmd_shop(category),
        Commands::Feedback { verdict } => cmd_feedback(*verdict),
        Commands::Export { path } => cmd_export(path),
        Commands::Reset => cmd_reset(),
    }
}

fn find_question(questions: &[Question], id: &str) -> Result<Question> {
    questions
        .iter()
        .find(|q| q.id == id)
        .cloned()
        .with_context(|| {
            let known: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
            format!("unknown question '{id}' (questions: {})", known.join(", "))
        })
}

/// Stored selections, or a fresh empty set when none exist or the blob
/// was unreadable.
fn restore_selections(store: &SessionStore) -> Result<SelectionSet> {
    Ok(store
        .load_selections()
        .context("failed to read session")?
        .unwrap_or_default())
}

fn cmd_questions() -> Result<()> {
    for q in survey_questions() {
        println!("{} — {} (choose up to {})", q.id, q.title, q.max_selections);
        for opt in &q.options {
            println!("    {:24} [{}]", opt.label, opt.tags.join(", "));
        }
    }
    Ok(())
}

fn cmd_toggle(question_id: &str, label: &str) -> Result<()> {
    let store = open_store()?;
    let questions = survey_questions();
    let question = find_question(&questions, question_id)?;

    let mut selections = restore_selections(&store)?;
    match selections.toggle_label(&question, label) {
        Ok(Toggled::Added) => {
            store
                .save_selections(&selections)
                .context("failed to persist selections")?;
            println!(
                "selected '{label}' for {question_id} ({}/{})",
                selections.count_for(question_id),
                question.max_selections
            );
        }
        Ok(Toggled::Removed) => {
            store
                .save_selections(&selections)
                .context("failed to persist selections")?;
            println!(
                "removed '{label}' from {question_id} ({}/{})",
                selections.count_for(question_id),
                question.max_selections
            );
        }
        // A cap hit is a warning, not a failure — nothing changed.
        Err(err @ SelectionError::LimitExceeded { .. }) => println!("warning: {err}"),
        Err(err @ SelectionError::UnknownOption { .. }) => return Err(err.into()),
    }
    Ok(())
}

fn cmd_status() -> Result<()> {
    let store = open_store()?;
    let selections = restore_selections(&store)?;
    let questions = survey_questions();

    for q in &questions {
        println!("{:10} {}/{}", q.id, selections.count_for(&q.id), q.max_selections);
    }
    println!("total:     {}", selections.total_selected());
    println!(
        "preview:   {}",
        if selections.is_empty() {
            "not yet available"
        } else {
            "available"
        }
    );
    Ok(())
}

async fn cmd_board() -> Result<()> {
    let store = open_store()?;
    let selections = restore_selections(&store)?;
    if selections.is_empty() {
        bail!("no selections yet — use `vb toggle <question> <label>` first");
    }

    // Replay the survey over the stored selections; the first question
    // blocking advance() is reported to the user.
    let mut survey = Survey::with_selections(survey_questions(), selections);
    while survey.state() != SurveyState::Complete {
        survey
            .advance()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("survey is not complete")?;
    }

    println!("composing your board...");
    let mut rng = SmallRng::from_os_rng();
    let board = compose::compose_board(survey.questions(), survey.selections(), &mut rng)
        .await
        .context("board composition failed")?;

    store.save_board(&board).context("failed to persist board")?;

    println!("board ready — created {}", millis_to_iso8601(board.created_at));
    println!("{} images:", board.images.len());
    for image in &board.images {
        println!("    {image}");
    }
    let tags: Vec<&str> = board.style_tags.iter().map(String::as_str).collect();
    println!("style tags: {}", tags.join(", "));
    Ok(())
}

fn cmd_layout(width: u32) -> Result<()> {
    let store = open_store()?;
    let Some(board) = store.load_board().context("failed to read session")? else {
        bail!("no board yet — run `vb board` first");
    };

    let size_class = SizeClass::for_width(width);
    let placed = layout_for(&board, size_class);
    println!("{width}px → {size_class:?}, {} of {} images placed", placed.len(), board.images.len());
    println!("{:>5} {:>5} {:>5} {:>6} {:>5} {:>2}  image", "top", "left", "w", "h", "rot", "z");
    for (image, slot) in &placed {
        println!(
            "{:>4}% {:>4}% {:>4}% {:>5}% {:>4}° {:>2}  {image}",
            slot.top, slot.left, slot.width, slot.height, slot.rotation_deg, slot.stack_order
        );
    }
    Ok(())
}

fn cmd_shop(category: &str) -> Result<()> {
    let store = open_store()?;
    let products = product_catalog();

    // Style tags are displayed alongside results but do not narrow them.
    if let Some(board) = store.load_board().context("failed to read session")? {
        let tags: Vec<&str> = board.style_tags.iter().map(String::as_str).collect();
        println!("your vision board style: {}", tags.join(", "));
    }

    let counts = category_counts(&products);
    let mut row = format!("{ALL_CATEGORIES} ({})", products.len());
    for (id, n) in &counts {
        row.push_str(&format!("  {id} ({n})"));
    }
    println!("categories: {row}");

    let filtered = by_category(&products, category);
    if filtered.is_empty() {
        println!("no products in '{category}'");
        return Ok(());
    }

    println!("{} products:", filtered.len());
    for p in filtered {
        let discount = match discount_percent(p) {
            Some(pct) => format!(" (save {pct}%)"),
            None => String::new(),
        };
        println!(
            "    {} — ${:.2}{} — {} — {:.1}★ ({} reviews)",
            p.title, p.price, discount, p.merchant, p.rating, p.review_count
        );
    }
    Ok(())
}

fn cmd_feedback(verdict: Verdict) -> Result<()> {
    let store = open_store()?;
    if store.load_board().context("failed to read session")?.is_none() {
        bail!("no board to rate — run `vb board` first");
    }

    let liked = matches!(verdict, Verdict::Liked);
    store
        .save_feedback(&BoardFeedback::new(liked))
        .context("failed to persist feedback")?;
    println!(
        "feedback saved: {}",
        if liked { "liked" } else { "disliked" }
    );
    Ok(())
}

fn cmd_export(path: &std::path::Path) -> Result<()> {
    let store = open_store()?;
    let Some(board) = store.load_board().context("failed to read session")? else {
        bail!("no board yet — run `vb board` first");
    };

    let json = serde_json::to_string_pretty(&board).context("failed to serialize board")?;
    std::fs::write(path, &json).with_context(|| format!("failed to write {}", path.display()))?;

    println!("exported board to {}", path.display());
    Ok(())
}

fn cmd_reset() -> Result<()> {
    let store = open_store()?;
    store.clear_session().context("failed to clear session")?;
    println!("session cleared");
    Ok(())
}
