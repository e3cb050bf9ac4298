use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{PolarityBand, RecommendationCriteria, RecommendationEngine, ScoredCandidate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sentiment::LexiconScorer;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

/// MoodReel - mood-aware movie recommendations
#[derive(Parser)]
#[command(name = "moodreel")]
#[command(about = "Recommend movies by genre, rating and how you feel", long_about = None)]
struct Cli {
    /// Path to the IMDb top-1000 CSV file
    #[arg(short, long, env = "MOODREEL_CATALOG", default_value = "imdb_top_1000.csv")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every genre in the catalog
    Genres,

    /// Get movie recommendations
    Recommend {
        /// Genre to look for (case-insensitive substring, e.g. "sci")
        #[arg(long)]
        genre: Option<String>,

        /// How you are feeling, in your own words
        #[arg(long)]
        mood: Option<String>,

        /// Minimum IMDb rating
        #[arg(long)]
        rating: Option<String>,

        /// Number of recommendations to return
        #[arg(long)]
        top_n: Option<String>,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Name to greet in the results header
        #[arg(long, default_value = "User")]
        name: String,
    },

    /// Show how similar two movies' descriptions are
    Similarity {
        /// First movie title
        #[arg(long)]
        first: String,

        /// Second movie title
        #[arg(long)]
        second: String,
    },

    /// Answer a few questions and get recommendations
    Interactive,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading catalog from {}...", cli.catalog.display());
    let start = Instant::now();
    let scorer = LexiconScorer::builtin().context("Failed to load sentiment lexicon")?;
    let engine = RecommendationEngine::load(&cli.catalog, scorer)?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        engine.catalog().len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Genres => handle_genres(&engine),
        Commands::Recommend {
            genre,
            mood,
            rating,
            top_n,
            seed,
            name,
        } => {
            let criteria = RecommendationCriteria::from_raw(
                genre.as_deref(),
                mood.as_deref(),
                rating.as_deref(),
                top_n.as_deref(),
            );
            handle_recommend(&engine, &criteria, seed, &name);
        }
        Commands::Similarity { first, second } => handle_similarity(&engine, &first, &second)?,
        Commands::Interactive => handle_interactive(&engine)?,
    }

    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(engine: &RecommendationEngine<LexiconScorer>) {
    println!("{}", "Available Genres:".bold().cyan());
    println!("{}", engine.list_genres().join(", "));
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &RecommendationEngine<LexiconScorer>,
    criteria: &RecommendationCriteria,
    seed: Option<u64>,
    name: &str,
) {
    let recommendations = match seed {
        Some(seed) => engine.recommend_with_rng(criteria, &mut StdRng::seed_from_u64(seed)),
        None => engine.recommend(criteria),
    };

    if recommendations.is_empty() {
        println!("{}", "No suitable recommendations found.".red());
    } else {
        print_recommendations(&recommendations, name);
    }
}

/// Handle the 'similarity' command
fn handle_similarity(
    engine: &RecommendationEngine<LexiconScorer>,
    first: &str,
    second: &str,
) -> Result<()> {
    let catalog = engine.catalog();
    for title in [first, second] {
        if catalog.position_of(title).is_none() {
            return Err(anyhow!("Movie '{}' not found in catalog", title));
        }
    }

    let score = engine
        .similarity_between(first, second)
        .ok_or_else(|| anyhow!("No similarity score for '{}' and '{}'", first, second))?;

    println!(
        "{} ~ {}: {}",
        first.bold(),
        second.bold(),
        format!("{:.3}", score).green()
    );
    Ok(())
}

/// Handle the 'interactive' command
fn handle_interactive(engine: &RecommendationEngine<LexiconScorer>) -> Result<()> {
    println!("{}", "🎬 Welcome to MoodReel 🎬".magenta().bold());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let name = prompt(&mut input, "Enter your name: ")?;
    let name = if name.is_empty() { "User".to_string() } else { name };

    println!("\n{}", "Available Genres:".cyan());
    println!("{}", engine.list_genres().join(", "));

    let genre = prompt(&mut input, "\nPreferred genre (optional): ")?;
    let mood = prompt(&mut input, "How are you feeling today? (optional): ")?;
    let rating = prompt(&mut input, "Minimum IMDb rating (optional): ")?;
    let top_n = prompt(&mut input, "Number of recommendations: ")?;

    println!("{}", "Analyzing mood and finding movies...".yellow());

    let criteria = RecommendationCriteria::from_raw(
        Some(genre.as_str()),
        Some(mood.as_str()),
        Some(rating.as_str()),
        Some(top_n.as_str()),
    );
    handle_recommend(engine, &criteria, None, &name);
    Ok(())
}

/// Print a question and read one trimmed answer; end of input is an empty answer
fn prompt(input: &mut impl BufRead, question: &str) -> Result<String> {
    print!("{}", question.green());
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[ScoredCandidate], name: &str) {
    println!(
        "{}",
        format!("\n🍿 Movie Recommendations for {}:\n", name).bold().yellow()
    );

    for (index, rec) in recommendations.iter().enumerate() {
        let band = rec.band();
        let label = match band {
            PolarityBand::Positive => format!("{} 😊", band).green(),
            PolarityBand::Neutral => format!("{} 😐", band).normal(),
            PolarityBand::Negative => format!("{} 😞", band).red(),
        };
        println!(
            "{}. 🎥 {} (Polarity: {:.2}, {})",
            (index + 1).to_string().cyan(),
            rec.title,
            rec.polarity,
            label
        );
    }
}
