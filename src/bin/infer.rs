//! Command line tool for sampling reviews and analyzing them with hosted models

use anyhow::anyhow;
use pico_args::Arguments;
use review_inference::{
    cli::{Command, COMMANDS},
    config::Config,
    datasets::CorpusSource,
    inference::{Analyzer, Client, HttpTransport},
    pipelines::{Pipeline, Task},
    session::Session,
    utils::{files, renderer::Terminal},
};

const HELP: &str = "\
Usage: infer [PIPELINE] [OPTIONS]

Arguments:
  PIPELINE             The pipeline to use ('text-classification' or 'text-generation')

Options:
  -h, --help           Print help
  -c, --config         A YAML configuration file
  -f, --file           Corpus path or URL (defaults to 'reviews_test.tsv')
  -t, --token          Hugging Face API token, never stored or logged
  -n, --count          Number of random reviews to analyze (defaults to 1)
  --nouns              Also estimate noun density (text-generation only)
  -i, --interactive    Read commands from stdin
";

// No Debug derive, the token must not end up in logs
struct Args {
    pipeline: Option<String>,
    config: Option<String>,
    file: Option<String>,
    token: Option<String>,
    count: usize,
    nouns: bool,
    interactive: bool,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let args = Args {
            config: pargs.opt_value_from_str(["-c", "--config"])?,
            file: pargs.opt_value_from_str(["-f", "--file"])?,
            token: pargs.opt_value_from_str(["-t", "--token"])?,
            count: pargs.opt_value_from_str(["-n", "--count"])?.unwrap_or(1),
            nouns: pargs.contains("--nouns"),
            interactive: pargs.contains(["-i", "--interactive"]),
            pipeline: pargs.opt_free_from_str()?,
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            return Err(anyhow!("Unexpected arguments: {:?}", remaining));
        }

        Ok(Some(args))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    let mut config = match &args.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };

    if let Some(pipeline) = &args.pipeline {
        config.pipeline = Pipeline::try_from(pipeline.as_str())?;
    }

    if let Some(file) = &args.file {
        config.corpus = file.clone();
    }

    let analyzer = Analyzer::from_config(Client::new(HttpTransport::new()), &config)?;

    if args.nouns && !analyzer.pipeline().supports(Task::NounDensity) {
        return Err(anyhow!(
            "--nouns requires the text-generation pipeline, not {}",
            analyzer.pipeline()
        ));
    }
    let source = CorpusSource::from(config.corpus.as_str());

    let mut session = Session::open(&source, analyzer, Terminal::stdout()).await;

    let token = args.token.as_deref();

    if args.interactive {
        return run_interactive(&mut session, token).await;
    }

    for _ in 0..args.count {
        session.analyze_random(Task::Sentiment, token).await;

        if args.nouns && session.view().current_review.is_some() {
            session.analyze(Task::NounDensity, token).await;
        }
    }

    Ok(())
}

async fn run_interactive(session: &mut Session, token: Option<&str>) -> anyhow::Result<()> {
    print!("{}", COMMANDS);

    let mut lines = files::stdin_lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::try_from(line.as_str()) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };

        match command {
            Command::Sample => {
                // Failures are already shown in the view
                let _ = session.sample();
            }
            Command::Analyze(task) => {
                session.analyze(task, token).await;
            }
            Command::Help => print!("{}", COMMANDS),
            Command::Quit => break,
        }
    }

    Ok(())
}
