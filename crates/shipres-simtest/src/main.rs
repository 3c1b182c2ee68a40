//! ShipRes Headless Resource Harness
//!
//! Loads a vessel snapshot, aggregates its resources the way a script's
//! `SHIP:RESOURCES` would, and cross-checks the result against the raw
//! part entries. Runs entirely in-process: no game, no scripting runtime.
//!
//! Usage:
//!   cargo run -p shipres-simtest
//!   cargo run -p shipres-simtest -- path/to/vessel.json --verbose
//!   cargo run -p shipres-simtest -- --json
//!
//! Set `RUST_LOG=debug` to see density disagreements between parts.

use shipres_logic::{
    parts_to_list, AggregateResource, ResourceLibrary, ShipResError, Structure, Value, Vessel,
};

// ── Bundled snapshot (used when no path is given) ───────────────────────
const SAMPLE_VESSEL_JSON: &str = include_str!("../../../data/sample_vessel.json");

/// Tolerance for comparing float sums built in the same order.
const EPSILON: f64 = 1e-9;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

struct Args {
    path: Option<String>,
    verbose: bool,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        path: None,
        verbose: false,
        json: false,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--verbose" => args.verbose = true,
            "--json" => args.json = true,
            _ if args.path.is_none() && !arg.starts_with("--") => args.path = Some(arg),
            _ => log::warn!("Ignoring argument '{}'", arg),
        }
    }
    args
}

fn load_vessel(path: Option<&str>) -> Result<Vessel, ShipResError> {
    let library = ResourceLibrary::default();
    match path {
        Some(p) => Vessel::load(p, &library),
        None => Vessel::from_json_with(SAMPLE_VESSEL_JSON, &library),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    println!("=== ShipRes Resource Harness ===\n");

    let vessel = match load_vessel(args.path.as_deref()) {
        Ok(v) => v,
        Err(e) => {
            println!("  ✗ snapshot_load: {}", e);
            std::process::exit(1);
        }
    };
    let resources = vessel.resources();

    if args.json {
        match serde_json::to_string_pretty(&resources) {
            Ok(json) => println!("{}\n", json),
            Err(e) => log::error!("Could not serialize report: {}", e),
        }
    }

    let mut results = Vec::new();

    // 1. Totals match raw part entries
    results.extend(validate_totals(&vessel, &resources, args.verbose));

    // 2. Grouping and ordering
    results.extend(validate_grouping(&vessel, &resources, args.verbose));

    // 3. Script suffix surface
    results.extend(validate_suffixes(&resources, args.verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Totals ───────────────────────────────────────────────────────────

fn validate_totals(
    vessel: &Vessel,
    resources: &[AggregateResource],
    verbose: bool,
) -> Vec<TestResult> {
    println!("--- Totals ({}) ---", vessel.name);
    let mut results = Vec::new();

    for res in resources {
        let entries: Vec<_> = vessel
            .parts
            .iter()
            .flat_map(|p| p.resources.iter())
            .filter(|r| r.resource_name() == res.name())
            .collect();
        let amount: f64 = entries.iter().map(|r| r.amount).sum();
        let capacity: f64 = entries.iter().map(|r| r.max_amount).sum();

        if verbose {
            println!(
                "  {} ({} parts, density {})",
                res,
                res.parts().len(),
                res.density()
            );
            for p in res.parts() {
                println!("      {} \"{}\"", p, p.title);
            }
        }

        results.push(TestResult {
            name: format!("{}_amount", res.name()),
            passed: (res.amount() - amount).abs() < EPSILON,
            detail: format!("aggregate {} vs entries {}", res.amount(), amount),
        });
        results.push(TestResult {
            name: format!("{}_capacity", res.name()),
            passed: (res.capacity() - capacity).abs() < EPSILON,
            detail: format!("aggregate {} vs entries {}", res.capacity(), capacity),
        });
        results.push(TestResult {
            name: format!("{}_part_count", res.name()),
            passed: res.parts().len() == entries.len(),
            detail: format!("{} wrappers for {} entries", res.parts().len(), entries.len()),
        });
        results.push(TestResult {
            name: format!("{}_within_capacity", res.name()),
            passed: res.amount() <= res.capacity() + EPSILON,
            detail: format!("{:.1}% full", fill_percent(res)),
        });
    }

    results
}

fn fill_percent(res: &AggregateResource) -> f64 {
    if res.capacity() <= 0.0 {
        0.0
    } else {
        res.amount() / res.capacity() * 100.0
    }
}

// ── 2. Grouping ─────────────────────────────────────────────────────────

fn validate_grouping(
    vessel: &Vessel,
    resources: &[AggregateResource],
    verbose: bool,
) -> Vec<TestResult> {
    println!("--- Grouping ---");
    let mut results = Vec::new();

    // First-seen order of kind names straight from the parts list
    let mut expected: Vec<&str> = Vec::new();
    for entry in vessel.parts.iter().flat_map(|p| p.resources.iter()) {
        if !expected.contains(&entry.resource_name()) {
            expected.push(entry.resource_name());
        }
    }
    let actual: Vec<&str> = resources.iter().map(|r| r.name()).collect();
    results.push(TestResult {
        name: "one_aggregate_per_kind".into(),
        passed: actual == expected,
        detail: format!("{} kinds: {}", actual.len(), actual.join(", ")),
    });

    let empty_parts: Vec<_> = vessel
        .parts
        .iter()
        .filter(|p| p.resources.is_empty())
        .collect();
    let leaked = empty_parts.iter().any(|p| {
        resources
            .iter()
            .any(|r| r.parts().iter().any(|pv| pv.uid == p.uid))
    });
    results.push(TestResult {
        name: "empty_parts_skipped".into(),
        passed: !leaked,
        detail: format!("{} parts hold no resources", empty_parts.len()),
    });

    let listed = parts_to_list(&vessel.parts, &vessel.shared_context());
    results.push(TestResult {
        name: "listing_matches_vessel".into(),
        passed: listed.len() == resources.len()
            && listed
                .iter()
                .zip(resources.iter())
                .all(|(v, r)| v.to_string() == r.to_string()),
        detail: format!("{} listed", listed.len()),
    });

    for res in resources {
        let first = vessel
            .parts
            .iter()
            .flat_map(|p| p.resources.iter())
            .find(|r| r.resource_name() == res.name());
        if let Some(first) = first {
            results.push(TestResult {
                name: format!("{}_first_density", res.name()),
                passed: first.definition.density == res.density(),
                detail: format!("density {}", res.density()),
            });
        }
    }

    if verbose {
        println!("  kinds in first-seen order: {}", actual.join(", "));
    }

    results
}

// ── 3. Suffixes ─────────────────────────────────────────────────────────

fn validate_suffixes(resources: &[AggregateResource], verbose: bool) -> Vec<TestResult> {
    println!("--- Suffixes ---");
    let mut results = Vec::new();

    for res in resources {
        let reads = [
            (
                "NAME",
                res.get_suffix("NAME")
                    .ok()
                    .and_then(|v| v.as_str().map(|s| s == res.name())),
            ),
            ("DENSITY", scalar_matches(res, "DENSITY", res.density())),
            ("AMOUNT", scalar_matches(res, "AMOUNT", res.amount())),
            ("CAPACITY", scalar_matches(res, "CAPACITY", res.capacity())),
            (
                "PARTS",
                res.get_suffix("PARTS")
                    .ok()
                    .and_then(|v| v.as_list().map(|l| l.len() == res.parts().len())),
            ),
        ];
        let bad: Vec<&str> = reads
            .iter()
            .filter(|(_, ok)| *ok != Some(true))
            .map(|(name, _)| *name)
            .collect();
        results.push(TestResult {
            name: format!("{}_suffix_reads", res.name()),
            passed: bad.is_empty(),
            detail: if bad.is_empty() {
                format!("{} suffixes agree", reads.len())
            } else {
                format!("mismatched: {}", bad.join(", "))
            },
        });

        let mut probe = res.clone();
        let writable: Vec<&str> = res
            .suffix_names()
            .into_iter()
            .filter(|name| probe.set_suffix(name, Value::Scalar(0.0)).is_ok())
            .collect();
        results.push(TestResult {
            name: format!("{}_read_only", res.name()),
            passed: writable.is_empty() && probe == *res,
            detail: if writable.is_empty() {
                "all suffixes reject writes".into()
            } else {
                format!("writable: {}", writable.join(", "))
            },
        });

        let text = res.to_string();
        let expected = format!(
            "SHIPRESOURCE({},{},{})",
            res.name(),
            res.amount(),
            res.capacity()
        );
        results.push(TestResult {
            name: format!("{}_text_form", res.name()),
            passed: text == expected,
            detail: text,
        });

        if verbose {
            for name in res.suffix_names() {
                if let Ok(value) = res.get_suffix(name) {
                    println!("  {}:{} = {}", res.name(), name, value);
                }
            }
        }
    }

    results
}

fn scalar_matches(res: &AggregateResource, suffix: &str, expected: f64) -> Option<bool> {
    res.get_suffix(suffix)
        .ok()
        .and_then(|v| v.as_scalar())
        .map(|v| v == expected)
}
