use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use seolens_core::{
    audit_page, quick_audit, recommend_schema, AuditResult, BusinessContext, Category, PageAudit,
    PageContext,
};

const APP_NAME: &str = "seolens";
const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "─────────────────────────────────────────────────────────────";

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputMode {
    Text,
    Json,
}

struct CliOptions {
    input: Option<PathBuf>,
    mode: OutputMode,
    quick: bool,
    page: PageContext,
    schema_description: Option<String>,
    business_file: Option<PathBuf>,
}

enum CliCommand {
    Run(CliOptions),
    Help,
    Version,
}

fn parse_arguments(args: &[String]) -> Result<CliCommand> {
    if args.is_empty() {
        return Ok(CliCommand::Help);
    }

    let mut input: Option<PathBuf> = None;
    let mut mode = OutputMode::Text;
    let mut quick = false;
    let mut page = PageContext::default();
    let mut schema_description: Option<String> = None;
    let mut business_file: Option<PathBuf> = None;

    for arg in args {
        if matches!(arg.as_str(), "-h" | "--help") {
            return Ok(CliCommand::Help);
        }
        if matches!(arg.as_str(), "-v" | "--version") {
            return Ok(CliCommand::Version);
        }
        if matches!(arg.as_str(), "-j" | "--json") {
            mode = OutputMode::Json;
            continue;
        }
        if matches!(arg.as_str(), "-q" | "--quick") {
            quick = true;
            continue;
        }
        if let Some(value) = arg.strip_prefix("--page-type=") {
            page.page_type = Some(value.to_string());
            continue;
        }
        if let Some(value) = arg.strip_prefix("--page-name=") {
            page.page_name = Some(value.to_string());
            continue;
        }
        if let Some(value) = arg.strip_prefix("--schema=") {
            if schema_description.is_some() {
                return Err(anyhow!("--schema specified multiple times"));
            }
            schema_description = Some(value.to_string());
            continue;
        }
        if let Some(value) = arg.strip_prefix("--business=") {
            business_file = Some(PathBuf::from(value));
            continue;
        }
        if arg.starts_with('-') && arg != "-" {
            return Err(anyhow!("unknown flag: {arg}"));
        }
        if input.is_none() {
            input = Some(PathBuf::from(arg));
        } else {
            return Err(anyhow!("unexpected additional argument: {arg}"));
        }
    }

    if input.is_none() && schema_description.is_none() {
        return Err(anyhow!("missing <file> argument (use - for stdin)"));
    }

    Ok(CliCommand::Run(CliOptions {
        input,
        mode,
        quick,
        page,
        schema_description,
        business_file,
    }))
}

fn print_help() {
    println!("{APP_NAME} - content quality audits and schema recommendations for HTML pages");
    println!("Usage: {APP_NAME} [OPTIONS] <FILE | ->\n");
    println!("Options:");
    println!("  -j, --json               Output the raw result as JSON");
    println!("  -q, --quick              Lightweight page audit (preview grade ladder)");
    println!("      --page-type=TYPE     Page type hint (landing, product, service, pricing, ...)");
    println!("      --page-name=NAME     Page name hint (used for breadcrumbs and gated schemas)");
    println!("      --schema=DESC        Recommend JSON-LD for a business description");
    println!("      --business=FILE      BusinessContext JSON for --schema");
    println!("  -v, --version            Show version information");
    println!("  -h, --help               Show this help message");
}

fn print_version() {
    println!("{APP_NAME} {VERSION}");
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn render_audit(result: &AuditResult) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "# Audit: {} / 100 (grade {}, {})\n",
        result.overall_score, result.grade, result.status
    ));
    out.push_str(RULE);
    out.push_str("\n\n");

    out.push_str("## Category scores\n");
    let scores = &result.category_scores;
    for (category, score) in [
        (Category::Meta, scores.meta),
        (Category::Headings, scores.headings),
        (Category::Schema, scores.schema),
        (Category::Semantic, scores.semantic),
        (Category::Images, scores.images),
        (Category::Links, scores.links),
        (Category::Content, scores.content),
        (Category::LlmReadability, scores.llm_readability),
    ] {
        out.push_str(&format!("• {:<16} : {score:>3}\n", category.label()));
    }
    out.push('\n');

    if !result.top_issues.is_empty() {
        out.push_str("## Top issues\n");
        for finding in &result.top_issues {
            out.push_str(&format!(
                "• [{:?}] {} -> {}\n",
                finding.severity, finding.issue, finding.fix
            ));
        }
        out.push('\n');
    }

    if !result.quick_wins.is_empty() {
        out.push_str("## Quick wins\n");
        for finding in &result.quick_wins {
            out.push_str(&format!(
                "• {} ({})\n",
                finding.issue,
                finding.time_estimate.as_deref().unwrap_or("-")
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("{} finding(s) total\n", result.finding_count));
    out
}

fn render_quick(result: &PageAudit) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} / 100 (grade {}) - {} finding(s), {} critical\n",
        result.score, result.grade, result.finding_count, result.critical_count
    ));
    for finding in &result.top_issues {
        out.push_str(&format!("• [{:?}] {}\n", finding.severity, finding.issue));
    }
    out
}

/// Render JSON-LD objects as script tags ready for a page's <head>.
fn render_script_tags(objects: &[serde_json::Value]) -> Result<String> {
    let mut out = String::new();
    for object in objects {
        out.push_str("<script type=\"application/ld+json\">\n");
        out.push_str(&serde_json::to_string_pretty(object)?);
        out.push_str("\n</script>\n");
    }
    Ok(out)
}

fn run(options: &CliOptions) -> Result<()> {
    if let Some(description) = &options.schema_description {
        let business = match &options.business_file {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str::<BusinessContext>(&raw)
                    .context("invalid business context JSON")?
            }
            None => BusinessContext::default(),
        };
        let result = recommend_schema(description, &business, &options.page);
        match options.mode {
            OutputMode::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputMode::Text => print!("{}", render_script_tags(&result.all)?),
        }
        return Ok(());
    }

    let input = options
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("missing <file> argument"))?;
    let html = read_input(input)?;
    if html.trim().is_empty() {
        return Err(anyhow!("input document is empty"));
    }

    if options.quick {
        let result = quick_audit(&html, &options.page);
        match options.mode {
            OutputMode::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputMode::Text => print!("{}", render_quick(&result)),
        }
    } else {
        let result = audit_page(&html, &options.page);
        match options.mode {
            OutputMode::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputMode::Text => print!("{}", render_audit(&result)),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = env::args().skip(1).collect::<Vec<_>>();
    match parse_arguments(&raw_args)? {
        CliCommand::Help => print_help(),
        CliCommand::Version => print_version(),
        CliCommand::Run(options) => run(&options)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_shows_help() {
        assert!(matches!(parse_arguments(&[]).unwrap(), CliCommand::Help));
    }

    #[test]
    fn parses_audit_invocation() {
        let command = parse_arguments(&args(&["page.html", "-j", "--page-type=landing"])).unwrap();
        let CliCommand::Run(options) = command else {
            panic!("expected run command");
        };
        assert_eq!(options.input.as_ref().unwrap().to_str(), Some("page.html"));
        assert_eq!(options.mode, OutputMode::Json);
        assert_eq!(options.page.page_type.as_deref(), Some("landing"));
    }

    #[test]
    fn schema_mode_needs_no_input_file() {
        let command = parse_arguments(&args(&["--schema=craft brewery downtown"])).unwrap();
        let CliCommand::Run(options) = command else {
            panic!("expected run command");
        };
        assert!(options.input.is_none());
        assert_eq!(
            options.schema_description.as_deref(),
            Some("craft brewery downtown")
        );
    }

    #[test]
    fn missing_input_without_schema_is_an_error() {
        assert!(parse_arguments(&args(&["-j"])).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(parse_arguments(&args(&["--frobnicate", "page.html"])).is_err());
    }

    #[test]
    fn stdin_dash_is_accepted() {
        let command = parse_arguments(&args(&["-"])).unwrap();
        let CliCommand::Run(options) = command else {
            panic!("expected run command");
        };
        assert_eq!(options.input.as_ref().unwrap().to_str(), Some("-"));
    }

    #[test]
    fn render_script_tags_wraps_each_object() {
        let objects = vec![
            serde_json::json!({"@type": "Brewery"}),
            serde_json::json!({"@type": "Review"}),
        ];
        let rendered = render_script_tags(&objects).unwrap();
        assert_eq!(rendered.matches("<script").count(), 2);
        assert!(rendered.contains("Brewery"));
    }
}
