//! Catalog administration command handler

use super::confirm;
use crate::args::{CatalogSubcommand, CourseFields};
use course_advisor::config::Config;
use course_advisor::core::catalog::loader::parse_row;
use course_advisor::core::catalog::{CatalogRow, CatalogStore, CsvCatalogStore};
use course_advisor::core::models::Category;
use course_advisor::info;

/// Dispatch catalog subcommands against the configured catalog file
pub fn run(subcommand: CatalogSubcommand, config: &Config) -> Result<(), String> {
    if config.catalog.path.is_empty() {
        return Err("No catalog configured. Use --catalog or `advisor config set catalog <PATH>`.".to_string());
    }
    let store = CsvCatalogStore::new(&config.catalog.path);

    match subcommand {
        CatalogSubcommand::List { category } => list(&store, category.as_deref()),
        CatalogSubcommand::Show { code } => show(&store, &code),
        CatalogSubcommand::Add { code, fields } => add(&store, code, fields),
        CatalogSubcommand::Edit { code, fields } => edit(&store, &code, fields),
        CatalogSubcommand::Delete { code, yes } => delete(&store, &code, yes),
    }
}

fn list(store: &dyn CatalogStore, category: Option<&str>) -> Result<(), String> {
    let only = category
        .map(|name| name.parse::<Category>().map(|c| c.as_str().to_string()))
        .transpose()?;

    let grouped = store.courses_by_category().map_err(|e| e.to_string())?;
    let mut shown = 0usize;
    for (name, rows) in grouped
        .iter()
        .filter(|(name, _)| only.as_deref().map_or(true, |only| only == name.as_str()))
    {
        println!("\n== {name} ({} courses) ==", rows.len());
        for row in rows {
            println!(
                "  {:<8} {:<40} {:>4} cr  {:<6} sem {}",
                row.code, row.name, row.credit_hours, row.offered, row.semester
            );
        }
        shown += rows.len();
    }
    if shown == 0 {
        println!("(no courses)");
    }
    Ok(())
}

fn show(store: &dyn CatalogStore, code: &str) -> Result<(), String> {
    let row = store
        .fetch(code)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Course {code} does not exist"))?;

    println!("Code:           {}", row.code);
    println!("Name:           {}", row.name);
    println!("Category:       {}", row.category);
    println!("Credit hours:   {}", row.credit_hours);
    println!("Offered:        {}", row.offered);
    println!("Semester:       {}", row.semester);
    println!("Prerequisites:  {}", or_dash(&row.prerequisites));
    println!("Co-requisites:  {}", or_dash(&row.corequisites));
    if !row.description.is_empty() {
        println!("\n{}", row.description);
    }
    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Overlay the fields the user supplied onto `row`
fn apply_fields(row: &mut CatalogRow, fields: CourseFields) {
    let CourseFields {
        name,
        description,
        prerequisites,
        corequisites,
        credits,
        offered,
        semester,
        category,
    } = fields;

    for (target, value) in [
        (&mut row.name, name),
        (&mut row.description, description),
        (&mut row.prerequisites, prerequisites),
        (&mut row.corequisites, corequisites),
        (&mut row.credit_hours, credits),
        (&mut row.offered, offered),
        (&mut row.semester, semester),
        (&mut row.category, category),
    ] {
        if let Some(value) = value {
            *target = value;
        }
    }
}

/// Administrators may not write rows the engine would skip
fn check_row(row: &CatalogRow) -> Result<(), String> {
    parse_row(row)
        .map(|_| ())
        .map_err(|cause| format!("Invalid course {}: {cause}", row.code))
}

fn add(store: &dyn CatalogStore, code: String, fields: CourseFields) -> Result<(), String> {
    let mut row = CatalogRow {
        code,
        offered: "Both".to_string(),
        semester: "1".to_string(),
        credit_hours: "0".to_string(),
        ..CatalogRow::default()
    };
    apply_fields(&mut row, fields);
    check_row(&row)?;

    let code = row.code.clone();
    store.insert(row).map_err(|e| e.to_string())?;
    info!("Added course {code}");
    println!("✓ Added {code}");
    Ok(())
}

fn edit(store: &dyn CatalogStore, code: &str, fields: CourseFields) -> Result<(), String> {
    let mut row = store
        .fetch(code)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Course {code} does not exist"))?;
    apply_fields(&mut row, fields);
    check_row(&row)?;

    store.update(code, row).map_err(|e| e.to_string())?;
    info!("Updated course {code}");
    println!("✓ Updated {code}");
    Ok(())
}

fn delete(store: &dyn CatalogStore, code: &str, yes: bool) -> Result<(), String> {
    if !yes && !confirm(&format!("Delete every catalog entry for {code}?")) {
        println!("✗ Delete cancelled");
        return Ok(());
    }
    store.delete(code).map_err(|e| e.to_string())?;
    info!("Deleted course {code}");
    println!("✓ Deleted {code}");
    Ok(())
}
