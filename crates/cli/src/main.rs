use clap::{Parser, Subcommand};
use medibot_core::{
    analyze_with, catalog,
    config::{request_timeout_from_env_value, CoreConfig},
    search_near, ChatAssistant, IpLocator, Language, Markup, NonEmptyText,
    OpenAiAssistant, Speaker,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "medibot")]
#[command(about = "MediBot health information assistant CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the offline symptom check on a description
    Analyze {
        /// Free-text symptom description
        #[arg(required = true)]
        text: Vec<String>,
        /// Output markup: plain, markdown or html
        #[arg(long, default_value = "plain")]
        markup: Markup,
        /// Read the advisory aloud
        #[arg(long)]
        speak: bool,
        /// Text-to-speech voice name
        #[arg(long)]
        voice: Option<String>,
    },
    /// Ask the hosted assistant, alongside the offline symptom check
    Chat {
        /// Question or symptom description
        #[arg(required = true)]
        text: Vec<String>,
        /// Language for the reply
        #[arg(long, default_value = "English")]
        language: String,
        /// Read the reply aloud
        #[arg(long)]
        speak: bool,
        /// Text-to-speech voice name
        #[arg(long)]
        voice: Option<String>,
    },
    /// List the offline condition catalog
    Conditions,
    /// Find hospitals near a place, or near your detected location
    Hospitals {
        /// City, area or pincode
        location: Option<String>,
        /// Detect the location from your public IP address
        #[arg(long, conflicts_with = "location")]
        auto: bool,
    },
}

fn speaker(voice: Option<String>) -> Speaker {
    Speaker::new(
        std::env::var("MEDIBOT_TTS_PROGRAM").ok(),
        voice.or_else(|| std::env::var("MEDIBOT_TTS_VOICE").ok()),
    )
}

fn speak_or_warn(speaker: &Speaker, text: &str) {
    if let Err(e) = speaker.speak(text) {
        tracing::warn!("Could not read the text aloud: {}", e);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medibot=warn".parse()?)
                .add_directive("medibot_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            text,
            markup,
            speak,
            voice,
        }) => {
            let text = text.join(" ");
            let advisory = analyze_with(&text, markup);
            if advisory.is_empty() {
                println!("No offline information for that description.");
            } else {
                println!("{}", advisory);
                if speak {
                    speak_or_warn(&speaker(voice), &analyze_with(&text, Markup::Plain));
                }
            }
        }
        Some(Commands::Chat {
            text,
            language,
            speak,
            voice,
        }) => {
            let message = NonEmptyText::new(text.join(" "))?;
            let language = Language::new(Some(language.as_str()));

            let cfg = CoreConfig::new(
                &std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                std::env::var("MEDIBOT_MODEL").ok(),
                std::env::var("OPENAI_BASE_URL").ok(),
                request_timeout_from_env_value(
                    std::env::var("MEDIBOT_REQUEST_TIMEOUT_SECS").ok(),
                )?,
            )?;
            let assistant = OpenAiAssistant::new(cfg)?;

            let offline = analyze_with(message.as_str(), Markup::Plain);
            if !offline.is_empty() {
                println!("{}\n", offline);
            }

            match assistant.reply(&message, &language).await {
                Ok(reply) => {
                    println!("{}", reply);
                    if speak {
                        speak_or_warn(&speaker(voice), &reply);
                    }
                }
                Err(e) => anyhow::bail!("chat assistant failed: {}", e),
            }
        }
        Some(Commands::Conditions) => {
            for record in catalog() {
                println!("{}", record.name);
                println!("  keywords: {}", record.keywords.join(", "));
            }
        }
        Some(Commands::Hospitals { location, auto }) => {
            let search = if auto {
                match IpLocator::new()?.search_nearby().await {
                    Ok(search) => search,
                    Err(e) => anyhow::bail!(
                        "automatic location failed ({}). Please enter your city or pincode manually.",
                        e
                    ),
                }
            } else {
                match location {
                    Some(location) => search_near(&location)?,
                    None => anyhow::bail!("give a city or pincode, or pass --auto"),
                }
            };
            println!("Hospitals near {}: {}", search.location, search.url);
        }
        None => {
            println!("Use 'medibot --help' for commands");
        }
    }

    Ok(())
}
