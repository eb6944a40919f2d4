// src/main.rs
// CLI front end: collect the hand parameters, send them off, render the reply

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use poker_coach::config::CoachConfig;
use poker_coach::gemini::GeminiClient;
use poker_coach::hand::{HandInput, Position};
use poker_coach::model_select::select_model;
use poker_coach::{prompt, screenshot, validator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "poker-coach",
    about = "GTO poker coach backed by the hosted Generative Language API"
)]
struct CliArgs {
    /// Hero position: UTG/MP/CO/BTN/SB/BB
    #[arg(long, default_value = "UTG")]
    hero: Position,

    /// Villain position: UTG/MP/CO/BTN/SB/BB
    #[arg(long, default_value = "UTG")]
    villain: Position,

    /// Hero hole cards, e.g. "AhKd"
    #[arg(long, default_value = "")]
    hand: String,

    /// Flop cards, e.g. "2h 7s Qd" (leave empty preflop)
    #[arg(long, default_value = "")]
    flop: String,

    /// Turn card, e.g. "As"
    #[arg(long, default_value = "")]
    turn: String,

    /// River card, e.g. "5c"
    #[arg(long, default_value = "")]
    river: String,

    /// Effective stack, free text, e.g. "100 BB"
    #[arg(long, default_value = "100 BB")]
    stack: String,

    /// Current pot including the villain's bet
    #[arg(long, default_value = "0")]
    pot: f64,

    /// Amount the hero must call (0 for a check/bet spot)
    #[arg(long, default_value = "0")]
    to_call: f64,

    /// Action history and notes, e.g. "Hero open 2.5bb, Villain 3bet to 9bb"
    #[arg(long, default_value = "")]
    notes: String,

    /// Optional screenshot to attach (jpg/png)
    #[arg(long)]
    image: Option<PathBuf>,

    /// Skip model selection and use this model identifier
    #[arg(long)]
    model: Option<String>,

    /// Print the available model catalog and the selection, then exit
    #[arg(long)]
    list_models: bool,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = CliArgs::parse();
    init_logger(args.verbose);

    let config = CoachConfig::from_env().context("API key configuration")?;
    let client = GeminiClient::new(config);

    if args.list_models {
        let names = client.list_model_names().await?;
        for name in &names {
            println!("{}", name);
        }
        println!();
        println!("selected: {}", select_model(&names));
        return Ok(());
    }

    let input = HandInput {
        hero_position: args.hero,
        villain_position: args.villain,
        hero_hand: args.hand,
        flop: args.flop,
        turn: args.turn,
        river: args.river,
        effective_stack: args.stack,
        current_pot: args.pot,
        to_call: args.to_call,
        action_history: args.notes,
    };

    let report = validator::validate_hand_input(&input);
    if !report.is_valid {
        for issue in &report.issues {
            tracing::error!("{}", issue);
        }
        anyhow::bail!("invalid hand input: {}", report.issues.join(", "));
    }

    let screenshot_png = match &args.image {
        Some(path) => Some(screenshot::load_screenshot(path).context("loading screenshot")?),
        None => None,
    };

    let model = match args.model {
        Some(model) => model,
        None => client.resolve_model().await,
    };
    tracing::info!("using model {}", model);
    println!("♠️ Gemini Poker Coach");
    println!("Model: {} | Mode: Vision & Manual Input", model);
    println!();

    let prompt_text = prompt::build_analysis_prompt(&input);
    match client
        .analyze(&model, &prompt_text, screenshot_png.as_deref())
        .await
    {
        Ok(reply) => {
            println!("📝 Coach Feedback");
            println!("{}", reply.text);

            if !reply.tool_calls.is_empty() {
                println!();
                println!("🔧 Calculation Log");
                for call in &reply.tool_calls {
                    println!("tool: {}", call.name);
                    println!("{}", serde_json::to_string_pretty(&call.args)?);
                }
            }
            Ok(())
        }
        Err(e) => {
            // Quota, safety block, network - surfaced once, never retried
            tracing::error!("analysis request failed: {}", e);
            eprintln!("❌ The analysis request failed. Please try again. ({})", e);
            std::process::exit(1);
        }
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("poker_coach=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("poker_coach=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}
