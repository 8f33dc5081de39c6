//! Resolve command handler.
//!
//! Chooses the template to invoke from a manifest, or explains why no single
//! template can be chosen.

use std::path::PathBuf;

use anyhow::Result;
use tplres_core::{
    Candidate, ResolutionStatus, TemplateMatch, TemplateResolver, annotate_languages,
};

use crate::bootstrap::CliConfig;
use crate::error::CliError;
use crate::handlers::check_language;
use crate::manifest::load_manifest;
use crate::presentation::verdict::{ResolutionReport, TemplateSummary};
use crate::presentation::{join_or_dash, print_separator, truncate_string};

/// Arguments for the resolve command.
#[derive(Debug, Clone)]
pub struct ResolveArgs {
    pub manifest: PathBuf,
    pub language: Option<String>,
    pub detailed_help: bool,
    pub json: bool,
}

/// Build the resolver for a manifest.
///
/// The requested and default languages are recorded as dispositions before
/// resolution so the resolver can use them as tie-breaks.
pub fn build_resolver(
    config: &CliConfig,
    mut templates: Vec<TemplateMatch>,
    language: Option<&str>,
) -> TemplateResolver<TemplateMatch> {
    annotate_languages(&mut templates, language, config.default_language());
    TemplateResolver::new(templates, language.map(str::to_string))
}

/// Execute the resolve command and return the process exit code.
pub fn execute(config: &CliConfig, args: &ResolveArgs) -> Result<i32> {
    check_language(args.language.as_deref())?;

    let templates = load_manifest(&args.manifest).map_err(CliError::from)?;
    let resolver = build_resolver(config, templates, args.language.as_deref());
    let report = ResolutionReport::from_resolver(&resolver, args.detailed_help);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.exit_code);
    }

    match &report.detailed_help {
        Some(shown) => display_detailed_help(&report, shown),
        None => display_resolution(&resolver, &report),
    }

    Ok(report.exit_code)
}

fn display_resolution(resolver: &TemplateResolver<TemplateMatch>, report: &ResolutionReport) {
    if let Some(template) = resolver.template_to_invoke() {
        let info = &template.template;
        println!("Template: {} ({})", info.display_name(), info.identity);
        if !info.group_identity.is_empty() {
            println!("  Group:       {}", info.group_identity);
        }
        if !info.language.is_empty() {
            println!("  Language:    {}", info.language);
        }
        println!("  Short names: {}", join_or_dash(&info.short_names));
        println!("  Precedence:  {}", info.precedence);
        return;
    }

    println!("{}", report.guidance);

    match report.status {
        ResolutionStatus::AmbiguousTemplateGroupChoice => {
            println!();
            println!("Matching template groups:");
            for group in resolver.groups() {
                let name = group.templates().next().map_or("", Candidate::name);
                println!(
                    "  {:<30} {:<30} {}",
                    truncate_string(group_label(group.identity(), name), 29),
                    truncate_string(name, 29),
                    join_or_dash(&group.languages())
                );
            }
        }
        ResolutionStatus::AmbiguousTemplateChoice | ResolutionStatus::AmbiguousLanguageChoice => {
            if let Some(group) = resolver.unambiguous_group() {
                println!();
                println!("Conflicting templates:");
                let prefer_default = !resolver.has_user_language();
                let conflicting = group.highest_precedence_invokable(prefer_default);
                print_templates(conflicting.iter().map(|t| TemplateSummary::from_candidate(*t)));
            }
        }
        ResolutionStatus::InvalidParameter => {
            if let Some(group) = resolver.unambiguous_group() {
                println!();
                for template in group.templates() {
                    let problems: Vec<String> = template
                        .blocking_dispositions()
                        .map(|d| format!("{} ({})", d.field, d.kind))
                        .collect();
                    if !problems.is_empty() {
                        println!("  {}: {}", template.identity(), problems.join(", "));
                    }
                }
            }
        }
        ResolutionStatus::NoMatch | ResolutionStatus::SingleMatch => {}
    }
}

fn display_detailed_help(report: &ResolutionReport, shown: &[TemplateSummary]) {
    if shown.is_empty() {
        println!("No single set of templates to describe.");
        println!("{}", report.guidance);
        return;
    }

    if let Some(group) = &report.group {
        println!("Template group: {group}\n");
    }
    print_templates(shown.iter().cloned());
}

fn print_templates(templates: impl IntoIterator<Item = TemplateSummary>) {
    println!(
        "  {:<35} {:<30} {:<10} {}",
        "Identity", "Name", "Language", "Precedence"
    );
    print!("  ");
    print_separator(88);
    for template in templates {
        println!(
            "  {:<35} {:<30} {:<10} {}",
            truncate_string(&template.identity, 34),
            truncate_string(&template.name, 29),
            truncate_string(
                if template.language.is_empty() { "--" } else { template.language.as_str() },
                9
            ),
            template.precedence
        );
    }
}

fn group_label<'a>(identity: &'a str, fallback: &'a str) -> &'a str {
    if identity.is_empty() { fallback } else { identity }
}
