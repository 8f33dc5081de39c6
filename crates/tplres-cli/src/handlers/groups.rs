//! Groups command handler.
//!
//! Shows how the matched templates partition into template groups and which
//! group, if any, resolution would select.

use std::path::Path;

use anyhow::Result;
use tplres_core::{Candidate, GroupResolution};

use crate::bootstrap::CliConfig;
use crate::error::CliError;
use crate::handlers::check_language;
use crate::handlers::resolve::build_resolver;
use crate::manifest::load_manifest;
use crate::presentation::{join_or_dash, print_separator, truncate_string};

/// Execute the groups command.
pub fn execute(config: &CliConfig, manifest: &Path, language: Option<&str>) -> Result<i32> {
    check_language(language)?;
    let templates = load_manifest(manifest).map_err(CliError::from)?;
    let resolver = build_resolver(config, templates, language);

    if resolver.groups().len() == 0 {
        println!("No templates in manifest.");
        return Ok(0);
    }

    println!(
        "{:<30} {:<9} {:<9} {:<15} Short names",
        "Group", "Templates", "Invokable", "Languages"
    );
    print_separator(90);

    for group in resolver.groups() {
        let label = if group.is_ungrouped() {
            group.templates().next().map_or("", Candidate::identity)
        } else {
            group.identity()
        };
        let mut short_names: Vec<&str> = Vec::new();
        for template in group.templates() {
            for name in &template.template.short_names {
                if !short_names.contains(&name.as_str()) {
                    short_names.push(name);
                }
            }
        }

        println!(
            "{:<30} {:<9} {:<9} {:<15} {}",
            truncate_string(label, 29),
            group.len(),
            group.invokable_templates().count(),
            truncate_string(&join_or_dash(&group.languages()), 14),
            join_or_dash(&short_names)
        );
    }

    println!();
    match resolver.group_resolution() {
        GroupResolution::SingleMatch(group) if group.is_ungrouped() => {
            println!("Selected: ungrouped template");
        }
        GroupResolution::SingleMatch(group) => println!("Selected group: {}", group.identity()),
        GroupResolution::Ambiguous => println!("Group selection is ambiguous."),
        GroupResolution::NoMatch => println!("No group selected."),
    }

    Ok(0)
}
