//! Template commands

use colored::Colorize;

use crate::cli::UtmArgs;
use crate::interfaces::cli::CliError;
use crate::services::Workspace;
use crate::storage::Template;

pub fn save_template(workspace: &mut Workspace, name: &str, utm: &UtmArgs) -> Result<(), CliError> {
    let template = workspace.save_template(name, utm.to_params())?;
    println!(
        "{} Saved template: {}",
        "✓".bold().green(),
        template.name.cyan()
    );
    println!("  {}", describe_values(template).dimmed());
    Ok(())
}

pub fn list_templates(workspace: &Workspace) -> Result<(), CliError> {
    let templates = workspace.templates();
    if templates.is_empty() {
        println!("{} No templates yet.", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Saved templates:".bold().green());
    println!();
    for template in templates {
        println!("  {}", template.name.bold());
        println!("    {}", describe_values(template).dimmed());
    }
    Ok(())
}

pub fn show_template(workspace: &Workspace, name: &str) -> Result<(), CliError> {
    let template = workspace
        .apply_template(name)
        .ok_or_else(|| CliError::CommandError(format!("Template not found: {}", name)))?;

    println!("{}", template.name.bold());
    for (field, value) in template.values.iter() {
        if !value.is_empty() {
            println!("  {:<14}{}", field.query_key().dimmed(), value);
        }
    }
    Ok(())
}

/// `source:fb · medium:cpc`, or `No values`
pub fn describe_values(template: &Template) -> String {
    let parts: Vec<String> = template
        .values
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(field, value)| format!("{}:{}", field, value))
        .collect();

    if parts.is_empty() {
        "No values".to_string()
    } else {
        parts.join(" · ")
    }
}
