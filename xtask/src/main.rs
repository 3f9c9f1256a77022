//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask has no parent")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(godepr_types::GodeprReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(godepr_settings::GodeprConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "godepr.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "godepr.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn is_hex_fingerprint(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Check every golden report under `tests/fixtures/` against the generated
/// report schema, plus fingerprint and count hygiene.
fn conform() -> anyhow::Result<()> {
    let mut schema = serde_json::to_value(generate_report_schema())
        .context("Failed to serialize report schema")?;
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$id");
    }
    let compiled = jsonschema::draft202012::new(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    println!("✓ godepr.report.v1 schema compiles");

    let fixtures_dir = fixtures_dir()?;
    let mut entries: Vec<PathBuf> = fs::read_dir(&fixtures_dir)
        .with_context(|| format!("Failed to read {}", fixtures_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    entries.sort();

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    for fixture_dir in entries {
        let golden = fixture_dir.join("expected.report.json");
        if !golden.exists() {
            continue;
        }
        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let content =
            fs::read_to_string(&golden).with_context(|| format!("Failed to read {}", name))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} golden report as JSON", name))?;

        for err in compiled.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", name, err));
        }

        let violations = value
            .get("violations")
            .and_then(|v| v.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();
        for (i, violation) in violations.iter().enumerate() {
            if let Some(fp) = violation.get("fingerprint").and_then(|v| v.as_str())
                && !is_hex_fingerprint(fp)
            {
                errors.push(format!(
                    "{}: violations[{}].fingerprint '{}' is not a sha256 hex digest",
                    name, i, fp
                ));
            }
        }

        let total = value
            .get("data")
            .and_then(|d| d.get("violations_total"))
            .and_then(|v| v.as_u64());
        if total != Some(violations.len() as u64) {
            errors.push(format!(
                "{}: data.violations_total {:?} does not match {} violations",
                name,
                total,
                violations.len()
            ));
        }

        let expected_verdict = if violations.is_empty() { "pass" } else { "fail" };
        if value.get("verdict").and_then(|v| v.as_str()) != Some(expected_verdict) {
            errors.push(format!(
                "{}: verdict should be '{}'",
                name, expected_verdict
            ));
        }

        fixture_count += 1;
        println!("  ✓ {} validates", name);
    }

    if fixture_count == 0 {
        bail!("No golden reports found in {}", fixtures_dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} golden reports pass conformance checks!", fixture_count);
    Ok(())
}

/// Validate that all rule kinds and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let rule_kinds = godepr_types::explain::all_rule_kinds();
    let codes = godepr_types::explain::all_codes();

    let mut errors = Vec::new();
    let identifiers = rule_kinds
        .iter()
        .map(|id| ("Rule kind", *id))
        .chain(codes.iter().map(|id| ("Code", *id)));

    for (label, id) in identifiers {
        match godepr_types::explain::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("{} '{}' has empty title", label, id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("{} '{}' has empty description", label, id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("{} '{}' has empty remediation", label, id));
                }
            }
            None => errors.push(format!("{} '{}' has no explanation", label, id)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} rule kinds have explanations", rule_kinds.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate golden fixture reports against the report schema");
    eprintln!("  explain-coverage  Validate all rule kinds and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
