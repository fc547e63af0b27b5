use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use padaccheda_cheda::Analyzer;
use padaccheda_kosha::{Analysis, Kosha, Tag, TagSet};
use padaccheda_lipi::{Pada, Scheme, detect_scheme};

#[derive(Parser)]
#[command(name = "padaccheda", about = "Sanskrit lexical analyzer")]
struct Cli {
    /// Text to analyze, in any supported scheme
    #[arg(default_value = "aDi")]
    data: String,

    /// Input scheme (devanagari, iast, hk, slp1); auto-detected when omitted
    #[arg(long)]
    input_encoding: Option<String>,

    /// Keep only readings with this lemma
    #[arg(long)]
    base: Option<String>,

    /// Keep only readings carrying all of these tag codes
    #[arg(long, num_args = 1..)]
    tag_set: Vec<String>,

    /// Enumerate sandhi splits instead of analysing the form
    #[arg(long)]
    split: bool,

    /// Leave splits in discovery order
    #[arg(long)]
    no_sort: bool,

    /// Show traditional grammatical terms next to tag codes
    #[arg(long)]
    explain: bool,

    /// Trace the splitter on stderr
    #[arg(long)]
    debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let scheme = match &cli.input_encoding {
        Some(name) => match name.parse::<Scheme>() {
            Ok(scheme) => scheme,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::from(2);
            }
        },
        None => detect_scheme(&cli.data),
    };

    let pada = match Pada::new(&cli.data, scheme) {
        Ok(pada) => pada,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let kosha = match Kosha::new() {
        Ok(kosha) => kosha,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };
    let mut analyzer = match Analyzer::with_classical(kosha) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };

    if cli.split {
        run_split(&cli, &mut analyzer, &pada)
    } else {
        run_tags(&cli, &mut analyzer, &pada)
    }
}

fn run_split(cli: &Cli, analyzer: &mut Analyzer<Kosha>, pada: &Pada) -> ExitCode {
    let splits = analyzer.splits(pada, !cli.no_sort);
    match cli.format {
        OutputFormat::Text => {
            println!("input: {} (slp1: {})", pada.raw(), pada.slp1());
            if splits.is_empty() {
                println!("no splits");
            }
            for seq in &splits {
                println!("{}", seq.join(" "));
            }
        }
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "input": pada.raw(),
                "slp1": pada.slp1(),
                "splits": splits,
            });
            println!("{payload}");
        }
    }
    ExitCode::SUCCESS
}

fn run_tags(cli: &Cli, analyzer: &mut Analyzer<Kosha>, pada: &Pada) -> ExitCode {
    let lemma = match &cli.base {
        Some(base) => match Pada::detect(base) {
            Ok(lemma) => Some(lemma),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::from(2);
            }
        },
        None => None,
    };
    let tags: Option<TagSet> = if cli.tag_set.is_empty() {
        None
    } else {
        Some(cli.tag_set.iter().map(|code| Tag::new(code.clone())).collect())
    };

    let readings = if lemma.is_some() || tags.is_some() {
        analyzer.word_matches(pada, lemma.as_ref(), tags.as_ref())
    } else {
        analyzer.tags_of(pada)
    };

    match cli.format {
        OutputFormat::Text => {
            println!("input: {} (slp1: {})", pada.raw(), pada.slp1());
            match &readings {
                None => println!("no analyses"),
                Some(readings) => {
                    for reading in readings {
                        let codes: Vec<String> = reading
                            .tags
                            .iter()
                            .map(|tag| render_tag(tag.as_str(), cli.explain))
                            .collect();
                        println!("{} [{}]", reading.lemma, codes.join(", "));
                    }
                }
            }
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = readings
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(reading_json)
                .collect();
            let payload = serde_json::json!({
                "input": pada.raw(),
                "slp1": pada.slp1(),
                "analyses": rows,
            });
            println!("{payload}");
        }
    }
    ExitCode::SUCCESS
}

fn render_tag(code: &str, explain: bool) -> String {
    if explain {
        if let Some((term, _)) = padaccheda_kosha::tags::term_for(code) {
            return format!("{code} ({term})");
        }
    }
    code.to_string()
}

fn reading_json(reading: &Analysis) -> serde_json::Value {
    let tags: Vec<&str> = reading.tags.iter().map(|tag| tag.as_str()).collect();
    serde_json::json!({
        "lemma": reading.lemma,
        "tags": tags,
    })
}
