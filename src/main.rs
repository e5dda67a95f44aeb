//! Terminal chrome for the SymptomScope core.
//!
//! Plays the role the browser page plays for the original checker: wires user
//! commands to the dispatcher, owns the blocking alerts, and prints the
//! view-models the core produces. All rendering decisions live in the
//! library; this file only turns them into lines of text.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use symptomscope::catalog::{CatalogView, DiseaseCatalog};
use symptomscope::view::{AnalysisView, DiseasePanel, RelatedView, SelectionView};
use symptomscope::{config, view, BackendClient, CheckerError, Dispatcher, SelectionStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);

    let api = match BackendClient::from_env() {
        Ok(api) => api,
        Err(err) => {
            eprintln!("Could not initialize backend client: {err}");
            std::process::exit(1);
        }
    };

    println!("{} — backend at {}", config::APP_NAME, api.base_url());

    let dispatcher = Dispatcher::new(&api);
    let mut selection = SelectionStore::new();
    selection.set_observer(Box::new(|members| {
        print_selection(&view::selection_view(members));
    }));

    // Page-load equivalents: dropdown and catalog, both failure-tolerant.
    let dropdown = dispatcher.load_symptoms();
    println!(
        "{} symptoms available (type `symptoms` to list them)",
        dropdown.options.len()
    );
    let mut diseases = DiseaseCatalog::load(&api);

    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "quit" | "exit" => break,
            "symptoms" => {
                println!("  [{}]", dropdown.prompt);
                for option in &dropdown.options {
                    println!("  {option}");
                }
            }
            "related" => match dispatcher.find_related(arg) {
                Ok(view) => print_related(&view),
                Err(err) => alert(&err, "fetch related symptoms"),
            },
            "analyze" => match dispatcher.analyze_text(arg) {
                Ok(view) => print_analysis(&view),
                Err(err) => alert(&err, "analyze symptoms"),
            },
            "toggle" => {
                if arg.is_empty() {
                    println!("usage: toggle <symptom>");
                } else {
                    selection.toggle(arg);
                }
            }
            "remove" => {
                if arg.is_empty() {
                    println!("usage: remove <symptom>");
                } else {
                    selection.remove(arg);
                }
            }
            "clear" => selection.clear(),
            "selected" => {
                let members: Vec<String> = selection.members().map(str::to_string).collect();
                print_selection(&view::selection_view(&members));
            }
            "analyze-selected" => match dispatcher.analyze_selected(&selection) {
                Ok(panel) => print_disease_panel(&panel),
                Err(err) => alert(&err, "analyze selected symptoms"),
            },
            "diseases" => print_catalog(&diseases.filtered(arg)),
            "expand" => {
                diseases.toggle_expanded(arg);
                print_catalog(&diseases.filtered(""));
            }
            "ping" => match dispatcher.ping() {
                Ok(message) => println!("backend says: {message}"),
                Err(err) => alert(&err, "reach the backend"),
            },
            other => println!("unknown command `{other}` (try `help`)"),
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  symptoms                   list the dropdown options");
    println!("  related <symptom>          find co-occurring and similar symptoms");
    println!("  analyze <free text>        extract symptoms and score diseases");
    println!("  toggle/remove <symptom>    edit the selection");
    println!("  selected | clear           show or empty the selection");
    println!("  analyze-selected           score diseases for the selection");
    println!("  diseases [search]          browse the diseases catalog");
    println!("  expand <disease>           toggle a catalog card open/closed");
    println!("  ping | help | quit");
}

/// Blocking alert, terminal style: one message, user re-triggers manually.
fn alert(err: &CheckerError, action: &str) {
    tracing::warn!(%err, action, "operation failed");
    println!("[!] {}", err.alert_message(action));
}

fn print_badges(badges: &[view::Badge], indent: &str) {
    for badge in badges {
        match &badge.tooltip {
            Some(tooltip) => println!("{indent}[{}] ({tooltip})", badge.symptom),
            None => println!("{indent}[{}]", badge.symptom),
        }
    }
}

fn print_related(result: &RelatedView) {
    match result {
        RelatedView::Nothing { placeholder } => println!("  {placeholder}"),
        RelatedView::Sections {
            cooccurring,
            semantic,
        } => {
            println!("  co-occurring:");
            match cooccurring.placeholder {
                Some(text) => println!("    {text}"),
                None => print_badges(&cooccurring.badges, "    "),
            }
            println!("  semantically similar:");
            match semantic.placeholder {
                Some(text) => println!("    {text}"),
                None => print_badges(&semantic.badges, "    "),
            }
        }
    }
}

fn print_analysis(result: &AnalysisView) {
    if !result.container_visible {
        if let Some(text) = result.extracted.placeholder {
            println!("  {text}");
        }
        return;
    }
    println!("  extracted symptoms:");
    print_badges(&result.extracted.badges, "    ");
    print_disease_panel(&result.diseases);
}

fn print_disease_panel(panel: &DiseasePanel) {
    match panel {
        DiseasePanel::Placeholder(text) => println!("  {text}"),
        DiseasePanel::Bars(bars) => {
            println!("  possible conditions:");
            for bar in bars {
                let filled = (bar.width_pct / 5.0).round() as usize;
                println!(
                    "    {:<30} {:>5} {}{}",
                    bar.disease,
                    bar.display_score,
                    "█".repeat(filled),
                    "░".repeat(20usize.saturating_sub(filled)),
                );
            }
        }
    }
}

fn print_selection(selected: &SelectionView) {
    match selected.placeholder {
        Some(text) => println!("  {text}"),
        None => {
            println!("  selected:");
            print_badges(&selected.badges, "    ");
        }
    }
}

fn print_catalog(catalog: &CatalogView<'_>) {
    match catalog {
        CatalogView::Unavailable { placeholder } => println!("  {placeholder}"),
        CatalogView::List { cards, no_results } => {
            for card in cards.iter().filter(|c| c.visible) {
                if card.expanded {
                    println!("  ▾ {}", card.name);
                    println!("      {}", card.description);
                } else {
                    println!("  ▸ {}", card.name);
                }
            }
            if let Some(text) = no_results {
                println!("  {text}");
            }
        }
    }
}
