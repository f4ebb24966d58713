//! CLI that reads raw wiki markup from stdin and prints the summary
//! response as JSON to stdout.
//!
//! Usage: wikisum <topic> [--model bundle.json] [--no-html] < page.wiki

use std::env;
use std::error::Error;
use std::io::{self, Read};

use wikisum::source::normalize_topic;
use wikisum::{KeepAll, LinearModel, Options, Predictor, SummaryResponse, Summarizer};

fn main() -> Result<(), Box<dyn Error>> {
    let mut topic = None;
    let mut model_path: Option<String> = None;
    let mut render_html = true;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--model" => {
                model_path = Some(args.next().ok_or("--model needs a file path")?);
            }
            "--no-html" => render_html = false,
            _ if topic.is_none() => topic = Some(arg),
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }
    let topic = topic.ok_or("usage: wikisum <topic> [--model bundle.json] [--no-html]")?;

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;

    let predictor: Box<dyn Predictor> = match model_path {
        Some(path) => Box::new(LinearModel::from_path(&path)?),
        None => Box::new(KeepAll),
    };
    let summarizer = Summarizer::with_options(
        predictor,
        Options {
            render_html,
            ..Options::default()
        },
    );

    let wiki_topic = normalize_topic(&topic);
    let summary = summarizer.summarize_raw(&raw, &wiki_topic)?;
    let response = SummaryResponse {
        summary,
        wiki_topic,
    };

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
