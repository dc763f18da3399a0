//! Vibecheck CLI
//!
//! Usage:
//!   vibecheck --text "post body"              # Score the given sample
//!   vibecheck -t "one" -t "two"               # Score several samples
//!   vibecheck --handle alice.bsky.social      # Score a user's recent posts
//!   vibecheck --interactive                   # Type posts line by line
//!   vibecheck --listen                        # Run the mention bot
//!   vibecheck --text "post" --json            # JSON report

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use vibecheck::core::{
    emoji_for, BskyClient, ReplyComposer, RngPicker, ToneAnalyzer, ToneTable, VibeBot,
    DEFAULT_SERVICE,
};
use vibecheck::types::{TextScore, VibeReport};
use vibecheck::{DEFAULT_POST_LIMIT, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "vibecheck",
    version = VERSION,
    about = "Score the emotional tone of social posts and compose a reply",
    long_about = "Vibecheck scores the aggregate emotional tone of a set of posts\n\
                  and composes a templated reply for it.\n\n\
                  Modes:\n  \
                  --text         Score the given sample(s)\n  \
                  --handle       Score a user's recent posts (public AppView)\n  \
                  --interactive  Type posts line by line, watch the running vibe\n  \
                  --listen       Run the mention bot (needs BSKY_IDENTIFIER and\n                 \
                  BSKY_APP_PASSWORD)"
)]
struct Args {
    /// Text sample to score (repeat for several posts)
    #[arg(short, long)]
    text: Vec<String>,

    /// Score a user's recent posts from the public AppView
    #[arg(long)]
    handle: Option<String>,

    /// Interactive mode - read post bodies from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run the mention bot
    #[arg(short, long)]
    listen: bool,

    /// PDS service URL for the bot
    #[arg(long, default_value = DEFAULT_SERVICE)]
    service: String,

    /// Maximum posts fetched per analysis
    #[arg(long, default_value_t = DEFAULT_POST_LIMIT)]
    limit: usize,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show matched-word breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.listen {
        run_listen(&args).await;
    } else if let Some(ref handle) = args.handle {
        run_handle(handle, &args).await;
    } else if !args.text.is_empty() {
        run_texts(&args.text, "you", &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Score a set of samples and print the report plus a reply preview
fn run_texts(texts: &[String], handle: &str, args: &Args) {
    let analyzer = ToneAnalyzer::new();
    let table = ToneTable::default();
    let composer = ReplyComposer::new();

    let score = analyzer.aggregate(texts);
    let tone = table.classify(score);
    let report = VibeReport::new(score, tone, emoji_for(score).to_string(), texts.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return;
    }

    if args.verbose {
        let scores: Vec<TextScore> = texts.iter().map(|t| analyzer.analyze(t)).collect();
        print_verbose(&scores, &report, args.no_color);
    } else if args.no_color {
        println!("{}", report.to_parseable_string());
    } else {
        println!("{}", report.to_terminal_string());
    }

    let mut picker = RngPicker::new();
    let reply = composer.compose(handle, score, tone, texts.len(), &mut picker);
    println!();
    println!("{}", reply);
}

/// Score a user's recent posts via the public AppView
async fn run_handle(handle: &str, args: &Args) {
    let client = BskyClient::public();
    match client.fetch_recent_posts(handle, args.limit).await {
        Ok(texts) => {
            if texts.is_empty() {
                println!("No posts found for @{}", handle);
                return;
            }
            run_texts(&texts, handle, args);
        }
        Err(error) => {
            eprintln!("Fetch error: {}", error);
            std::process::exit(1);
        }
    }
}

/// Interactive mode - accumulate posts from stdin, show the running vibe
fn run_interactive(args: &Args) {
    let analyzer = ToneAnalyzer::new();
    let table = ToneTable::default();

    print_header("Interactive Mode", args.no_color);
    println!("Type a post body and press Enter to add it to the pile. Type 'quit' to exit.");
    println!("The report reflects the mean vibe of everything entered so far.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut texts: Vec<String> = Vec::new();

    loop {
        let score = analyzer.aggregate(&texts);
        let tone = table.classify(score);
        let prompt = if args.no_color {
            format!("[{}] > ", tone)
        } else {
            format!(
                "{}{} [{}]{} > ",
                tone.color_code(),
                emoji_for(score),
                tone,
                vibecheck::types::Tone::color_reset()
            )
        };
        print!("{}", prompt);
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Posts: {}", texts.len());
            break;
        }
        if line.is_empty() {
            continue;
        }

        texts.push(line.to_string());
        let score = analyzer.aggregate(&texts);
        let tone = table.classify(score);
        let report = VibeReport::new(score, tone, emoji_for(score).to_string(), texts.len());

        if args.json {
            println!("{}", serde_json::to_string(&report).unwrap());
        } else if args.verbose {
            let scores: Vec<TextScore> = texts.iter().map(|t| analyzer.analyze(t)).collect();
            print_verbose(&scores, &report, args.no_color);
        } else if args.no_color {
            println!("{}", report.to_parseable_string());
        } else {
            println!("{}", report.to_terminal_string());
        }
    }
}

/// Run the mention bot
async fn run_listen(args: &Args) {
    let identifier = std::env::var("BSKY_IDENTIFIER").ok();
    let password = std::env::var("BSKY_APP_PASSWORD").ok();
    let (identifier, password) = match (identifier, password) {
        (Some(i), Some(p)) => (i, p),
        _ => {
            eprintln!("Missing credentials: set BSKY_IDENTIFIER and BSKY_APP_PASSWORD");
            std::process::exit(1);
        }
    };

    print_header("Mention Bot", args.no_color);

    let mut client = BskyClient::new(&args.service);
    if let Err(error) = client.login(&identifier, &password).await {
        eprintln!("Login error: {}", error);
        std::process::exit(1);
    }
    println!(
        "Signed in as @{} - waiting for mentions.",
        client.handle().unwrap_or("?")
    );

    let mut bot = VibeBot::new(client).with_post_limit(args.limit);
    if let Err(error) = bot.run().await {
        eprintln!("Bot error: {}", error);
        std::process::exit(1);
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  vibecheck v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("{}", "========================================".bold());
        println!("{}", format!("  vibecheck v{} - {}", VERSION, mode).bold());
        println!("{}", "========================================".bold());
    }
    println!();
}

/// Print verbose breakdown: one line per sample, then the report
fn print_verbose(scores: &[TextScore], report: &VibeReport, no_color: bool) {
    let color = if no_color { "" } else { report.tone.color_code() };
    let reset = if no_color {
        ""
    } else {
        vibecheck::types::Tone::color_reset()
    };

    println!("{}┌──────────────────────────────────────────{}", color, reset);
    for (index, score) in scores.iter().enumerate() {
        let words: Vec<String> = score
            .hits
            .iter()
            .map(|hit| format!("{}({:+})", hit.word, hit.weight))
            .collect();
        println!(
            "{}│ #{:<3} comparative={:+.4} tokens={:<3} {}{}",
            color,
            index + 1,
            score.comparative,
            score.tokens,
            words.join(" "),
            reset
        );
    }
    println!("{}├──────────────────────────────────────────{}", color, reset);
    println!(
        "{}│ {} score={:+.4} | tone={} | posts={}{}",
        color, report.emoji, report.score, report.tone, report.post_count, reset
    );
    println!("{}└──────────────────────────────────────────{}", color, reset);
}
