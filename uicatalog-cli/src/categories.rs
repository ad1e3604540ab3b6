use anyhow::Result;
use colored::*;
use is_terminal::IsTerminal;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Color, Modify, Style},
    Table, Tabled,
};
use uicatalog::Category;

use uicatalog_cli::cli::OutputFormat;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Tool")]
    tool: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Components")]
    components: String,
}

#[derive(Debug, serde::Serialize)]
struct CategoryInfo {
    tool: String,
    category: String,
    description: String,
    components: Vec<String>,
}

impl From<&Category> for CategoryInfo {
    fn from(category: &Category) -> Self {
        Self {
            tool: category.tool_name(),
            category: category.name.clone(),
            description: category.tool_description(),
            components: category.components.clone(),
        }
    }
}

pub fn run_categories_command(categories: &[Category], format: OutputFormat) -> Result<()> {
    let infos: Vec<CategoryInfo> = categories.iter().map(CategoryInfo::from).collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&infos)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&infos)?);
        }
        OutputFormat::Table => display_table(&infos),
    }

    Ok(())
}

fn display_table(infos: &[CategoryInfo]) {
    if infos.is_empty() {
        println!("No categories configured; only getUIComponents will be served.");
        return;
    }

    let rows: Vec<CategoryRow> = infos
        .iter()
        .map(|info| CategoryRow {
            tool: info.tool.clone(),
            category: info.category.clone(),
            components: info.components.join("\n"),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());

    let is_tty = io::stdout().is_terminal();
    if is_tty {
        table.with(Modify::new(Rows::one(0)).with(Color::FG_BRIGHT_CYAN));
    }
    table.with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    println!("{table}");

    let total: usize = infos.iter().map(|info| info.components.len()).sum();
    let summary = format!(
        "{} categories, {} components, plus getUIComponents",
        infos.len(),
        total
    );
    if is_tty {
        println!("{}", summary.dimmed());
    } else {
        println!("{summary}");
    }
}
