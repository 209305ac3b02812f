use anyhow::Context;
use clap::Parser;
use listless::{render_digest, CandidateSource, Page, SuggestWidget, WidgetConfig};

/// Run the autosuggest widget against an HTML file and print the results.
#[derive(Parser, Debug)]
#[command(name = "listless", version, about = "Headless autosuggest widget runner")]
struct Args {
    /// HTML file containing the input element and results container
    #[arg(long)]
    html: std::path::PathBuf,

    /// Selector of the input element to attach to
    #[arg(long, default_value = "input")]
    input: String,

    /// Query value to feed the widget
    #[arg(long)]
    query: String,

    /// Inline candidate source string (otherwise read from the element's
    /// data attribute)
    #[arg(long)]
    list: Option<String>,

    /// Separator between candidate records
    #[arg(long, default_value = "###")]
    object_separator: String,

    /// Separator between the fields of one record
    #[arg(long, default_value = "|")]
    param_separator: String,

    /// Fallback results container selector
    #[arg(long, default_value = "#myList")]
    target: String,

    /// Print the sha256 digest of the rendered container instead of its HTML
    #[arg(long)]
    digest: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let page = Page::from_file(&args.html)?;
    let config = WidgetConfig {
        object_separator: args.object_separator,
        param_separator: args.param_separator,
        target_selector: args.target,
        ..Default::default()
    };
    let source = match args.list {
        Some(raw) => CandidateSource::Delimited(raw),
        None => CandidateSource::ElementData,
    };

    let mut widget = SuggestWidget::attach(&page, &args.input, source, config)
        .with_context(|| format!("failed to attach to '{}'", args.input))?;

    let hits = widget.keystroke(&args.query);
    println!("{}", serde_json::to_string_pretty(&hits)?);

    if args.digest {
        println!("{}", render_digest(widget.container_html()));
    } else {
        println!("{}", widget.container_html());
    }

    Ok(())
}
