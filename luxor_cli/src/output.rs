use luxor_lib::types::{Group, Theme};
use luxor_lib::validation::theme_letter;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    group_number: u8,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Intensity")]
    intensity: String,
}

#[derive(Tabled)]
struct ThemeRow {
    #[tabled(rename = "Theme")]
    letter: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
}

#[derive(Tabled)]
struct MethodRow {
    #[tabled(rename = "Method")]
    name: String,
}

fn build_group_rows(groups: &[Group]) -> Vec<GroupRow> {
    groups
        .iter()
        .map(|g| GroupRow {
            group_number: g.group_number,
            name: g.name.clone(),
            intensity: format!("{}%", g.intensity),
        })
        .collect()
}

fn build_theme_rows(themes: &[Theme]) -> Vec<ThemeRow> {
    themes
        .iter()
        .map(|t| ThemeRow {
            letter: theme_letter(t.theme_index)
                .map(String::from)
                .unwrap_or_else(|_| t.theme_index.to_string()),
            name: t.name.clone(),
            state: if t.on_off != 0 { "on" } else { "off" }.to_string(),
        })
        .collect()
}

pub fn print_groups_table(groups: &[Group]) {
    println!("{}", Table::new(build_group_rows(groups)));
}

pub fn print_themes_table(themes: &[Theme]) {
    println!("{}", Table::new(build_theme_rows(themes)));
}

pub fn print_methods_table(names: &[&str]) {
    let rows = names.iter().map(|name| MethodRow {
        name: name.to_string(),
    });
    println!("{}", Table::new(rows));
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
