//! Protocol catalog CLI commands
//!
//! Terminal renditions of the list view, the detail view and the slug
//! enumeration used for static generation.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::{debug, info};

use protocols_core::catalog::{
    all_protocol_slugs, protocol_by_slug, tier_counts, CatalogStore, ListItem, Protocol,
    ResourceTier, SortDirection, SortKey, ViewState, ROUTE_PREFIX,
};

use crate::cli_config::CliConfig;

#[derive(Subcommand, Debug)]
pub enum ProtocolCommand {
    /// List protocols for a resource tier, ranked
    List {
        /// Resource tier (max, average, limited)
        #[clap(long)]
        tier: Option<ResourceTier>,

        /// Rank by importance, cost or ease
        #[clap(long)]
        sort: Option<SortKey>,

        /// Override the ranking direction (asc, desc)
        #[clap(long)]
        direction: Option<SortDirection>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show every detail of one protocol
    Show {
        /// Protocol slug (e.g., fmt, ketogenic-diet)
        slug: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print every protocol slug, one per line
    Slugs,

    /// Validate a catalog file before publishing
    Validate {
        /// Catalog YAML (defaults to the active catalog)
        path: Option<PathBuf>,
    },
}

/// Settings shared by every command
pub struct CommandContext {
    pub config: CliConfig,
    pub catalog_override: Option<PathBuf>,
}

impl CommandContext {
    /// Resolve the active catalog: `--catalog`, then config, then embedded
    fn catalog(&self) -> Result<Cow<'static, CatalogStore>> {
        let path = self
            .catalog_override
            .as_ref()
            .or(self.config.catalog_path.as_ref());

        match path {
            Some(path) => load_catalog(path).map(Cow::Owned),
            None => {
                debug!("Using embedded protocol catalog");
                Ok(Cow::Borrowed(CatalogStore::builtin()))
            }
        }
    }

    fn route_prefix(&self) -> &str {
        self.config.route_prefix.as_deref().unwrap_or(ROUTE_PREFIX)
    }
}

fn load_catalog(path: &Path) -> Result<CatalogStore> {
    info!("Loading catalog from {}", path.display());
    CatalogStore::from_file(path)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))
}

impl ProtocolCommand {
    pub fn execute(self, context: &CommandContext) -> Result<ExitCode> {
        match self {
            ProtocolCommand::List {
                tier,
                sort,
                direction,
                json,
            } => execute_list(context, tier, sort, direction, json),
            ProtocolCommand::Show { slug, json } => execute_show(context, &slug, json),
            ProtocolCommand::Slugs => execute_slugs(context),
            ProtocolCommand::Validate { path } => execute_validate(context, path.as_deref()),
        }
    }
}

/// Table row for the ranked list
#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Protocol")]
    name: String,
    #[tabled(rename = "Imp")]
    importance: u8,
    #[tabled(rename = "Cost")]
    cost: u8,
    #[tabled(rename = "Ease")]
    ease: u8,
    #[tabled(rename = "Link")]
    route: String,
}

fn execute_list(
    context: &CommandContext,
    tier: Option<ResourceTier>,
    sort: Option<SortKey>,
    direction: Option<SortDirection>,
    json_output: bool,
) -> Result<ExitCode> {
    let store = context.catalog()?;

    let mut state = ViewState::new(
        tier.unwrap_or(context.config.default_tier),
        sort.unwrap_or(context.config.default_sort),
    );
    if let Some(direction) = direction.or(context.config.default_direction) {
        state.set_direction(direction);
    }

    let items = state.render_list_with_prefix(&store, context.route_prefix());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", render_list(&store, &state, &items));
    }

    Ok(ExitCode::SUCCESS)
}

/// Heading, tier summary and ranked table for a list view
pub fn render_list(store: &CatalogStore, state: &ViewState, items: &[ListItem<'_>]) -> String {
    let mut out = String::new();

    if !store.title().is_empty() {
        let _ = writeln!(out, "{}\n", store.title());
    }
    for paragraph in store.introduction() {
        let _ = writeln!(out, "{paragraph}\n");
    }

    let tiers: Vec<String> = tier_counts(store)
        .into_iter()
        .map(|(tier, count)| {
            if tier == state.tier {
                format!("[{} ({count})]", tier.label())
            } else {
                format!("{} ({count})", tier.label())
            }
        })
        .collect();
    let _ = writeln!(out, "Resources: {}", tiers.join("  "));

    let order = state.sort_order();
    let _ = writeln!(
        out,
        "Ranked by: {} ({})\n",
        order.key.label(),
        direction_label(order.effective_direction())
    );

    if items.is_empty() {
        let _ = writeln!(out, "No protocols listed for this resource level.");
        return out;
    }

    let rows: Vec<ListRow> = items
        .iter()
        .map(|item| ListRow {
            rank: item.rank,
            name: item.name.to_string(),
            importance: item.importance,
            cost: item.cost,
            ease: item.ease,
            route: item.route.clone(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();
    let _ = writeln!(out, "{table}");

    out
}

fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Descending => "high to low",
        SortDirection::Ascending => "low to high",
    }
}

fn execute_show(context: &CommandContext, slug: &str, json_output: bool) -> Result<ExitCode> {
    let store = context.catalog()?;

    let Some(protocol) = protocol_by_slug(&store, slug) else {
        debug!(slug, "Protocol not found");
        eprint!("{}", render_not_found(slug));
        return Ok(ExitCode::FAILURE);
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(protocol)?);
    } else {
        print!("{}", render_detail(protocol));
    }

    Ok(ExitCode::SUCCESS)
}

/// Full detail view of one protocol
pub fn render_detail(protocol: &Protocol) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", protocol.name);
    let _ = writeln!(out, "{}\n", "=".repeat(protocol.name.chars().count()));
    let _ = writeln!(out, "{}\n", protocol.summary);

    let badges: Vec<String> = protocol
        .tier_labels()
        .into_iter()
        .map(|label| format!("[{label}]"))
        .collect();
    let _ = writeln!(out, "{}", badges.join(" "));
    let _ = writeln!(
        out,
        "Importance: {}/10  Cost: {}/10  Ease: {}/10",
        protocol.importance, protocol.cost, protocol.ease
    );

    write_list_section(&mut out, "Key Benefits", &protocol.benefits);

    let _ = writeln!(out, "\nWhat the Evidence Says");
    let _ = writeln!(out, "  Supportive Findings");
    write_bullets(&mut out, &protocol.evidence.supportive, 4);
    let _ = writeln!(out, "  Uncertainties and Limitations");
    write_bullets(&mut out, &protocol.evidence.limitations, 4);

    if !protocol.risks().is_empty() {
        write_list_section(&mut out, "Risks & Contraindications", protocol.risks());
    }

    if !protocol.products().is_empty() {
        let _ = writeln!(out, "\nRecommended Products");
        for product in protocol.products() {
            let _ = writeln!(out, "  {} ({})", product.name, product.category);
            let _ = writeln!(out, "    {}", product.description);
            if !product.pros.is_empty() {
                let _ = writeln!(out, "    Pros: {}", product.pros.join(", "));
            }
            let _ = writeln!(out, "    Best for: {}", product.best_for);
            let _ = writeln!(out, "    Link: {}", product.link);
        }
    }

    if let Some(deep_dive) = &protocol.deep_dive {
        let _ = writeln!(out, "\n{}", deep_dive.title);
        for section in &deep_dive.sections {
            let _ = writeln!(out, "  {}", section.heading);
            if let Some(intro) = &section.intro {
                let _ = writeln!(out, "    {intro}");
            }
            write_bullets(&mut out, &section.items, 4);
        }
        if let Some(summary) = &deep_dive.summary {
            let _ = writeln!(out, "  Summary");
            let _ = writeln!(out, "    {summary}");
        }
    }

    let _ = writeln!(out, "\nSelected References");
    for reference in &protocol.references {
        let _ = writeln!(out, "  - {}: {}", reference.label, reference.citation);
        if let Some(url) = &reference.url {
            let _ = writeln!(out, "    {url}");
        }
    }

    let _ = writeln!(out, "\n<- Back to Protocols: protocols list");

    out
}

/// Message for an unknown slug
pub fn render_not_found(slug: &str) -> String {
    format!(
        "Protocol Not Found\n\nThe protocol '{slug}' doesn't exist.\n\nRun `protocols slugs` to see every available protocol.\n"
    )
}

fn write_list_section(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out, "\n{heading}");
    write_bullets(out, items, 2);
}

fn write_bullets(out: &mut String, items: &[String], indent: usize) {
    for item in items {
        let _ = writeln!(out, "{:indent$}- {item}", "");
    }
}

fn execute_slugs(context: &CommandContext) -> Result<ExitCode> {
    let store = context.catalog()?;
    for slug in all_protocol_slugs(&store) {
        println!("{slug}");
    }
    Ok(ExitCode::SUCCESS)
}

fn execute_validate(context: &CommandContext, path: Option<&Path>) -> Result<ExitCode> {
    let store = match path {
        Some(path) => Cow::Owned(load_catalog(path)?),
        None => context.catalog()?,
    };

    println!("Catalog OK: {} protocol(s)", store.len());
    for (tier, count) in tier_counts(&store) {
        println!("  {:<18} {count}", tier.label());
    }

    let unreferenced: Vec<&str> = store
        .all()
        .iter()
        .filter(|p| p.references.is_empty())
        .map(|p| p.slug.as_str())
        .collect();
    if !unreferenced.is_empty() {
        println!();
        println!("WARNING: no references for: {}", unreferenced.join(", "));
    }

    Ok(ExitCode::SUCCESS)
}
