//! wordtally: word and punctuation frequency statistics for documents

use clap::Parser;
use log::{debug, error, info};
use std::path::PathBuf;
use std::process;
use wordtally::cli::{self, Cli, Commands, ConfigAction};
use wordtally::input::{DocumentFormat, InputManager};
use wordtally::output::ReportGenerator;
use wordtally::processing::{StopWords, TextAnalyzer};
use wordtally::{analyze_document, Config, Result, WordTallyError};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("{} ({})", e, e.kind());
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            output,
            save,
            top,
            no_stop_words,
            stop_words,
            no_color,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format)
                    .map_err(WordTallyError::InvalidInput)?,
                None => config.output.format,
            };

            let path = match file {
                Some(path) => path,
                None => {
                    let stdin = std::io::stdin();
                    let mut stdout = std::io::stdout();
                    cli::prompt_for_path(&mut stdin.lock(), &mut stdout)?
                }
            };

            let stop_words = if no_stop_words {
                StopWords::empty()
            } else if let Some(stop_words_path) = stop_words {
                StopWords::from_file(&stop_words_path)?
            } else {
                config.stop_words()
            };
            debug!("Using {} stop-words", stop_words.len());

            let analyzer = TextAnalyzer::new(stop_words).with_punctuation(&config.analysis.punctuation);
            let input_manager = InputManager::new()
                .with_fallback_encoding(&config.input.fallback_encoding)?;

            info!("Analyzing {}", path.display());
            let report = analyze_document(&path, &input_manager, &analyzer).await?;

            // Colors only make sense on the terminal, never in a saved file
            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                top.unwrap_or(config.output.top),
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(save_path) => {
                    generator.save_report(&rendered, &save_path)?;
                    println!("✅ Report saved to {}", save_path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Formats => {
            println!("Supported document formats:");
            for ext in DocumentFormat::SUPPORTED_EXTENSIONS {
                if let Some(format) = DocumentFormat::from_extension(ext) {
                    println!("  .{:<5} {}", format.extension(), format);
                }
            }
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Stop-words: {}", config.analysis.stop_words.len());
                    println!("Punctuation: {}", config.analysis.punctuation);
                    println!("Fallback encoding: {}", config.input.fallback_encoding);
                    println!("Output format: {:?}", config.output.format);
                    println!("Colored output: {}", config.output.color_output);
                    println!("Top repeated words: {}", display_top(config.output.top));
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    let default_config = Config::default();
                    default_config.save_to(&config_path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }
            }
        }
    }

    Ok(())
}

fn display_top(top: usize) -> String {
    if top == 0 {
        "all".to_string()
    } else {
        top.to_string()
    }
}
