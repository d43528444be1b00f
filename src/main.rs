//! CLI entry point for `outboxShell`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use outboxshell::config::Config;
use outboxshell::i18n;
use outboxshell::model::blob::FileBlob;
use outboxshell::model::composition::{Composition, SubmissionOutcome};
use outboxshell::submit::{HttpTransport, SubmissionPipeline, SubmitStart};

#[derive(Parser)]
#[command(name = "outboxshell", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend endpoint URL (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Language (en, es). Defaults to system locale.
    #[arg(long, global = true, value_name = "LANG")]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive composer
    Compose,
    /// Compose and send an email without opening the TUI
    Send {
        /// Subject line
        #[arg(short, long)]
        subject: String,

        /// Comma-separated recipient list
        #[arg(short, long)]
        recipients: String,

        /// HTML body given inline
        #[arg(long, conflicts_with = "body_file")]
        body: Option<String>,

        /// File containing the HTML body
        #[arg(long, value_name = "FILE")]
        body_file: Option<PathBuf>,

        /// Attach a file (repeatable)
        #[arg(short, long = "attach", value_name = "PATH")]
        attach: Vec<PathBuf>,

        /// Description for the Nth attachment (repeatable)
        #[arg(short, long = "description", value_name = "TEXT")]
        description: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

/// Detect language early from --lang arg or system env, before clap processes --help.
fn detect_lang_early() -> i18n::Lang {
    // Check --lang flag in raw args
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--lang" {
            if let Some(code) = args.get(i + 1) {
                if let Some(lang) = i18n::Lang::from_code(code) {
                    return lang;
                }
            }
        }
        if let Some(code) = args[i].strip_prefix("--lang=") {
            if let Some(lang) = i18n::Lang::from_code(code) {
                return lang;
            }
        }
    }
    i18n::detect_system_lang()
}

/// Build a localized clap Command using i18n strings.
fn build_localized_command() -> clap::Command {
    let mut cmd = Cli::command();
    cmd = cmd
        .about(i18n::app_about())
        .long_about(i18n::app_long_about())
        .after_help(i18n::app_after_help())
        .mut_arg("endpoint", |a| a.help(i18n::help_endpoint()))
        .mut_arg("verbose", |a| a.help(i18n::help_verbose()))
        .mut_arg("lang", |a| a.help(i18n::help_lang()));

    // Localize subcommands
    let subcommands: Vec<clap::Command> = cmd
        .get_subcommands()
        .map(|sub| {
            let mut s = sub.clone();
            match s.get_name() {
                "compose" => {
                    s = s.about(i18n::help_cmd_compose());
                }
                "send" => {
                    s = s
                        .about(i18n::help_cmd_send())
                        .mut_arg("subject", |a| a.help(i18n::help_subject()))
                        .mut_arg("recipients", |a| a.help(i18n::help_recipients()))
                        .mut_arg("body", |a| a.help(i18n::help_body()))
                        .mut_arg("body_file", |a| a.help(i18n::help_body_file()))
                        .mut_arg("attach", |a| a.help(i18n::help_attach()))
                        .mut_arg("description", |a| a.help(i18n::help_description()))
                        .mut_arg("json", |a| a.help(i18n::help_output_json()));
                }
                "completions" => {
                    s = s.about(i18n::help_cmd_completions());
                }
                "manpage" => {
                    s = s.about(i18n::help_cmd_manpage());
                }
                _ => {}
            }
            s
        })
        .collect();

    // Replace subcommands (clear and re-add)
    for sub in subcommands {
        cmd = cmd.mut_subcommand(sub.get_name(), |_| sub.clone());
    }

    cmd
}

fn main() -> anyhow::Result<()> {
    // Detect language BEFORE clap parsing so --help is localized
    let lang = detect_lang_early();
    i18n::set_lang(lang);

    // Build localized command and parse
    let cmd = build_localized_command();
    let matches = cmd.get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    // Load configuration
    let config = outboxshell::config::load_config();

    // Configure logging: stderr + optional log file
    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    let endpoint = cli
        .endpoint
        .unwrap_or_else(|| config.backend.endpoint.clone());

    match cli.command {
        None | Some(Commands::Compose) => outboxshell::tui::run_tui(&config, &endpoint),
        Some(Commands::Send {
            subject,
            recipients,
            body,
            body_file,
            attach,
            description,
            json,
        }) => cmd_send(
            &config,
            &endpoint,
            SendArgs {
                subject,
                recipients,
                body,
                body_file,
                attach,
                description,
                json,
            },
        ),
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Manpage) => cmd_manpage(),
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // Try to set up file logging
    let log_dir = outboxshell::config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "outboxshell.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "outboxshell", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}

/// Arguments of the headless `send` command.
struct SendArgs {
    subject: String,
    recipients: String,
    body: Option<String>,
    body_file: Option<PathBuf>,
    attach: Vec<PathBuf>,
    description: Vec<String>,
    json: bool,
}

/// Compose and send in one shot, through the same pipeline the TUI uses.
fn cmd_send(config: &Config, endpoint: &str, args: SendArgs) -> anyhow::Result<()> {
    if args.description.len() > args.attach.len() {
        anyhow::bail!(i18n::err_too_many_descriptions());
    }

    let body_html = match (&args.body, &args.body_file) {
        (Some(body), _) => body.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("{}: {}: {e}", i18n::err_file_not_found(), path.display()))?,
        (None, None) => String::new(),
    };

    let mut composition = Composition::new(outboxshell::config::preview_dir(config));
    composition.subject = args.subject;
    composition.recipients = args.recipients;
    composition.body_html = body_html;

    let mut blobs = Vec::with_capacity(args.attach.len());
    for path in &args.attach {
        blobs.push(FileBlob::from_path(path)?);
    }
    composition.attachments.append(blobs);
    for (index, text) in args.description.iter().enumerate() {
        composition.attachments.set_description(index, text.clone());
    }

    let transport = HttpTransport::new(
        endpoint,
        Duration::from_secs(config.backend.timeout_secs),
    )?;
    let mut pipeline = SubmissionPipeline::new(Arc::new(transport));

    match pipeline.submit(&mut composition) {
        SubmitStart::Started => {}
        SubmitStart::MissingSubject => anyhow::bail!(i18n::hint_missing_subject()),
        SubmitStart::MissingRecipients => anyhow::bail!(i18n::hint_missing_recipients()),
        SubmitStart::AlreadyInFlight => anyhow::bail!(i18n::hint_already_in_flight()),
    }

    let spinner = if args.json {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("valid template"),
        );
        pb.set_message(i18n::msg_sending().to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    };

    let outcome = pipeline
        .wait(&mut composition)
        .unwrap_or_else(|| SubmissionOutcome::Failure(i18n::err_worker_gone().to_string()));

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match outcome {
        SubmissionOutcome::Success => {
            if args.json {
                println!(
                    "{}",
                    serde_json::json!({ "ok": true, "message": i18n::status_sent() })
                );
            } else {
                println!("{}", i18n::status_sent());
            }
            Ok(())
        }
        SubmissionOutcome::Failure(reason) => {
            if args.json {
                println!("{}", serde_json::json!({ "ok": false, "error": reason }));
            } else {
                eprintln!("{}: {reason}", i18n::status_error());
            }
            std::process::exit(1);
        }
    }
}
