//! Command-line front end for the naming core.
//!
//! # Usage
//!
//! ```bash
//! # Convert identifiers
//! cargo run --bin naming -- convert kebab UserProfiles HTTPServerError
//!
//! # Show every style at once
//! cargo run --bin naming -- convert all userProfileId
//!
//! # Inspect word boundaries
//! cargo run --bin naming -- tokenize HTTPServer_error2
//!
//! # Rewrite a route template
//! cargo run --bin naming -- route snake "/Api/UserProfiles/{UserId:int}" --parameters
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use naming_convention::casing::{CaseConverter, CasingStyle, tokenize};
use naming_convention::template::{RouteSegment, parse, transform};

/// Identifier casing and route template tool.
#[derive(Parser)]
#[command(name = "naming")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert identifiers to a casing style
    Convert {
        /// camel, pascal, kebab, snake, or "all"
        style: String,

        /// Identifiers to convert
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Split an identifier into words
    Tokenize {
        value: String,
    },

    /// Apply a casing style to a route template
    Route {
        /// camel, pascal, kebab or snake
        style: CasingStyle,

        template: String,

        /// Rename parameters as well as literal segments
        #[arg(short, long)]
        parameters: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { style, values } => convert(&style, &values)?,
        Commands::Tokenize { value } => tokenize_value(&value),
        Commands::Route {
            style,
            template,
            parameters,
        } => route(style, &template, parameters)?,
    }

    Ok(())
}

fn convert(style: &str, values: &[String]) -> Result<()> {
    if style.eq_ignore_ascii_case("all") {
        for value in values {
            println!("{}", value.bright_white().bold());
            for style in CasingStyle::ALL {
                println!("  {:<7} {}", style.as_str().dimmed(), style.convert(value).green());
            }
        }
        return Ok(());
    }

    let style: CasingStyle = style.parse().context("Unknown style")?;
    for value in values {
        let converted = style.convert(value);
        if converted == value.as_str() {
            println!("{} {}", value, "(unchanged)".dimmed());
        } else {
            println!("{} {} {}", value, "→".dimmed(), converted.green());
        }
    }
    Ok(())
}

fn tokenize_value(value: &str) {
    let words = tokenize(value);
    if words.is_empty() {
        println!("{}", "No words found".yellow());
        return;
    }

    println!("{} {}", "Words:".bright_white().bold(), words.len());
    for (index, range) in words.ranges().iter().enumerate() {
        println!(
            "  {:>2}  {:<20} {}",
            index,
            range.slice(value).cyan(),
            format!("bytes {}..{}", range.start, range.end()).dimmed()
        );
    }
}

fn route(style: CasingStyle, template: &str, parameters: bool) -> Result<()> {
    let parsed = parse(template)?;
    let transformed = transform(&parsed, style, parameters);

    println!("{} {}", "Original:   ".bright_white(), parsed.raw());
    println!("{} {}", "Transformed:".bright_white(), transformed.green().bold());

    let params: Vec<_> = parsed
        .segments()
        .iter()
        .filter_map(|segment| match segment {
            RouteSegment::Parameter(parameter) => Some(parameter),
            RouteSegment::Literal(_) => None,
        })
        .collect();

    if !params.is_empty() {
        println!();
        println!("{}", "Parameters:".bright_white().bold());
        for parameter in params {
            let mut flags = Vec::new();
            if let Some(catch_all) = parameter.catch_all {
                flags.push(format!("catch-all {}", catch_all.marker()));
            }
            if parameter.is_optional() {
                flags.push("optional".to_string());
            }
            if !parameter.constraint.is_empty() {
                flags.push(format!("constraint {}", parameter.constraint));
            }
            println!("  {:<16} {}", parameter.name.cyan(), flags.join(", ").dimmed());
        }
    }

    Ok(())
}
