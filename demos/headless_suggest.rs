//! Minimal headless example demonstrating the widget API

use listless::{CandidateSource, Page, SuggestWidget, WidgetConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Listless Widget Engine - Minimal Example\n");

    // Server-rendered markup: the candidate list rides along in a data
    // attribute, and the div after the input receives the suggestions.
    let html = r#"<html><head><title>Shop Search</title></head><body>
        <input id="search" type="search"
               data-module="autocomplete"
               data-list="Red Shoes|Comfortable red shoes|1###Blue Hat|Stylish item|2###Green Sock|Woolly and warm|3">
        <div id="suggestions"></div>
    </body></html>"#;

    let page = Page::parse(html);
    println!("Loaded page: {}", page.title());

    let mut widget = SuggestWidget::attach(
        &page,
        "#search",
        CandidateSource::ElementData,
        WidgetConfig::default(),
    )?;
    println!("Render target: {:?}\n", widget.target());

    widget.on_render(|words| {
        println!("  (render callback saw {} words)", words.len());
    });

    // Simulate the host delivering keystroke notifications as a user types
    for typed in ["r", "re", "red", "red shoes", "Stylish red"] {
        let hits = widget.keystroke(typed);
        println!("typed {:?} -> {} hit(s)", typed, hits.len());
        for hit in &hits {
            println!("  {} (terms: {:?})", hit.title, hit.matched_terms);
        }
        println!("  container: {}\n", widget.container_html());
    }

    println!("Done.");
    Ok(())
}
