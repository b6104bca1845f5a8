// src/cli.rs
//
// Non-interactive front-end: one invocation = one session. Filters come
// from flags, `--compare` names are selected in the order given.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use tracing::info;

use crate::catalog::Field;
use crate::compare::Comparison;
use crate::config::consts::{ALL_LABEL, DEFAULT_CATALOG, DEFAULT_IMAGE_DIR, MSG_NO_COMPARISON, MSG_NO_MATCHES};
use crate::config::options::{AppOptions, ExportOptions, Variant};
use crate::csv::Delim;
use crate::export;
use crate::session::{Action, Choice, Session};

fn parse_delim(s: &str) -> Result<Delim, String> {
    Delim::parse(s).ok_or_else(|| format!("unknown delimiter/format: {s} (csv, tsv, ;)"))
}

#[derive(Parser, Debug, Clone)]
#[command(name = "cli", version, about = "Filter and compare products of a skincare catalog")]
pub struct Args {
    /// Catalog file (CSV/TSV with a header row)
    #[arg(short, long, default_value = DEFAULT_CATALOG)]
    pub catalog: PathBuf,

    /// Directory holding product pictures
    #[arg(long, default_value = DEFAULT_IMAGE_DIR)]
    pub images: PathBuf,

    /// Field separator of the catalog; guessed from the extension if omitted
    #[arg(long, value_parser = parse_delim)]
    pub delimiter: Option<Delim>,

    /// Core columns only: no cruelty-free filter or column
    #[arg(long)]
    pub basic: bool,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub skin_type: Option<String>,

    #[arg(long)]
    pub application: Option<String>,

    #[arg(long)]
    pub cruelty_free: Option<String>,

    /// Lower price bound (inclusive)
    #[arg(long)]
    pub min: Option<f64>,

    /// Upper price bound (inclusive)
    #[arg(long)]
    pub max: Option<f64>,

    /// Select a product for comparison (repeatable)
    #[arg(long = "compare", value_name = "NAME")]
    pub compare: Vec<String>,

    /// Output format
    #[arg(long, value_parser = parse_delim, default_value = "csv")]
    pub format: Delim,

    /// Omit header lines
    #[arg(long)]
    pub no_headers: bool,

    /// Write the filtered listing to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the selector values of each filter and exit
    #[arg(long)]
    pub list_choices: bool,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        AppOptions {
            catalog: self.catalog.clone(),
            image_dir: self.images.clone(),
            delimiter: self.delimiter,
            variant: if self.basic { Variant::Basic } else { Variant::Extended },
            export: ExportOptions { format: self.format, include_headers: !self.no_headers },
        }
    }

    /// The flags as session actions, in control order. Flag values are
    /// matched against the session's catalog values first.
    pub fn actions(&self, session: &Session) -> Vec<Action> {
        let choice = |v: &Option<String>, field: Field| -> Choice {
            match v.as_deref() {
                Some(label) => Choice::resolve(label, &session.choices(field)),
                None => Choice::All,
            }
        };

        let mut actions = vec![
            Action::SelectBrand(choice(&self.brand, Field::Brand)),
            Action::SelectSkinType(choice(&self.skin_type, Field::SkinType)),
            Action::SelectApplication(choice(&self.application, Field::Application)),
            Action::SelectCrueltyFree(choice(&self.cruelty_free, Field::CrueltyFree)),
        ];
        // A missing bound is open, never taken from the data
        if self.min.is_some() || self.max.is_some() {
            let min = self.min.unwrap_or(0.0);
            let max = self.max.unwrap_or(f64::INFINITY);
            actions.push(Action::SetPriceRange { min, max });
        }
        actions.extend(self.compare.iter().cloned().map(Action::SelectForComparison));
        actions
    }
}

pub fn run(args: Args) -> color_eyre::Result<()> {
    let options = args.options();
    let mut session = Session::open(options)?;

    if args.list_choices {
        print_choices(&session);
        return Ok(());
    }

    for action in args.actions(&session) {
        if let Some(msg) = session.dispatch(action).text() {
            eprintln!("{msg}");
        }
    }

    let export_opts = &session.options().export;
    let variant = session.options().variant;

    let visible = session.visible();
    info!(visible = visible.len(), total = session.catalog().len(), "filter applied");
    if visible.is_empty() {
        println!("{MSG_NO_MATCHES}");
    } else {
        let listing = export::products_to_string(visible.iter(), variant, export_opts);
        match &args.out {
            Some(path) => {
                let written = export::write_file(path, &listing)
                    .map_err(|e| eyre!("cannot write {}: {e}", path.display()))?;
                println!("Wrote {} ({} rows)", written.display(), visible.len());
            }
            None => print!("{listing}"),
        }
    }

    if !args.compare.is_empty() {
        println!("---");
        match session.comparison() {
            Comparison::Empty => println!("{MSG_NO_COMPARISON}"),
            Comparison::Table(t) => print!("{}", export::comparison_to_string(&t, export_opts)),
        }
    }
    Ok(())
}

fn print_choices(session: &Session) {
    let mut fields = vec![Field::Brand, Field::SkinType, Field::Application];
    if session.options().variant.exposes_cruelty_free() {
        fields.push(Field::CrueltyFree);
    }
    for field in fields {
        let values = session.choices(field);
        println!("{}: {}, {}", field.label(), ALL_LABEL, values.join(", "));
    }
    match session.catalog().max_price() {
        Some(max) => println!("{}: 0 - {max}", Field::Price.label()),
        None => println!("{}: -", Field::Price.label()),
    }
}
