//! Conversion demonstration example

use formfield_core::{
    ConversionStrategy, ErrorDetail, OutputFormat, ReportConverter, ValidationReport,
};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Formfield Conversion Demo ===\n");

    let report = signup_report();

    demo_pass_through(&report)?;
    println!();
    demo_fixed_template(&report)?;
    println!();
    demo_pattern_list(&report)?;
    println!();
    demo_type_map(&report)?;
    println!();
    demo_structured_output(&report)?;

    Ok(())
}

fn signup_report() -> ValidationReport {
    ValidationReport::new(vec![
        ErrorDetail::new(
            "name",
            "\"name\" with value \"j\" fails to match the required pattern: /^[\\sa-zA-Z0-9]{5,30}$/",
            "string.regex.base",
        )
        .with_context("key", "name")
        .with_context("value", "j"),
        ErrorDetail::new(
            "password",
            "\"password\" length must be at least 2 characters long",
            "string.min",
        )
        .with_context("key", "password")
        .with_context("limit", 2),
    ])
}

fn demo_pass_through(report: &ValidationReport) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Pass-Through (no configuration) ---");

    let converter = ReportConverter::plain(ConversionStrategy::default());
    print_errors(&converter, report);
    Ok(())
}

fn demo_fixed_template(report: &ValidationReport) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Fixed Template ---");

    let converter = ReportConverter::from_config(
        &json!("\"${key}\" is badly formed."),
        OutputFormat::Plain,
    )?;
    print_errors(&converter, report);
    Ok(())
}

fn demo_pattern_list(report: &ValidationReport) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Pattern List (first match wins) ---");

    let converter = ReportConverter::from_config(
        &json!([
            {"pattern": "length must be at least 2 characters long",
             "template": "\"${key}\" must be ${limit} or more chars."},
            {"regex": "required pattern",
             "template": "\"${key}\" must consist of letters, digits or spaces."},
        ]),
        OutputFormat::Plain,
    )?;
    print_errors(&converter, report);
    Ok(())
}

fn demo_type_map(report: &ValidationReport) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Type Map ---");

    let converter = ReportConverter::from_config(
        &json!({
            "string.min": "\"${key}\" must be ${limit} or more chars.",
            "string.regex.base": "\"${key}\" must consist of letters, digits or spaces.",
        }),
        OutputFormat::Plain,
    )?;
    print_errors(&converter, report);
    Ok(())
}

fn demo_structured_output(report: &ValidationReport) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Structured Output ---");

    let converter = ReportConverter::structured(ConversionStrategy::FixedTemplate(
        "\"${key}\" is badly formed.".to_string(),
    ));
    match converter.convert(report) {
        Some(errors) => println!("{}", serde_json::to_string_pretty(&errors)?),
        None => println!("   Not a validation-error report"),
    }
    Ok(())
}

fn print_errors(converter: &ReportConverter, report: &ValidationReport) {
    match converter.convert(report) {
        Some(errors) => {
            let mut paths: Vec<&String> = errors.keys().collect();
            paths.sort();
            for path in paths {
                println!("   {}: {}", path, errors[path].message());
            }
        }
        None => println!("   Not a validation-error report"),
    }
}
