//! Integration tests for the vessel resource pipeline.
//!
//! Exercises: snapshot JSON → Vessel → prospect_resources → AggregateResource
//! → suffix reads, the way a script walks `SHIP:RESOURCES`.
//!
//! All tests are pure logic — no host game, no scripting runtime.

use shipres_logic::{
    from_vessel, parts_to_list, prospect_resources, AggregateResource, Part, ResourceDefinition,
    ShipResError, SharedContext, Structure, Value, Vessel,
};

// ── Helpers ────────────────────────────────────────────────────────────

const KERBAL_X: &str = r#"{
    "name": "Kerbal X",
    "parts": [
        { "uid": 1, "name": "mk1pod", "title": "Mk1 Command Pod",
          "resources": [
              { "name": "ElectricCharge", "amount": 50, "max_amount": 50 },
              { "name": "MonoPropellant", "amount": 10, "max_amount": 10 }
          ] },
        { "uid": 2, "name": "parachute", "title": "Mk16 Parachute" },
        { "uid": 3, "name": "fuelTank", "title": "FL-T400 Fuel Tank",
          "resources": [
              { "name": "LiquidFuel", "amount": 180, "max_amount": 180 },
              { "name": "Oxidizer", "amount": 220, "max_amount": 220 }
          ] },
        { "uid": 4, "name": "fuelTank", "title": "FL-T400 Fuel Tank",
          "resources": [
              { "name": "LiquidFuel", "amount": 90, "max_amount": 180 },
              { "name": "Oxidizer", "amount": 110, "max_amount": 220 }
          ] },
        { "uid": 5, "name": "liquidEngine", "title": "LV-T45 Swivel" }
    ]
}"#;

fn kerbal_x() -> Vessel {
    Vessel::from_json(KERBAL_X).expect("fixture parses")
}

fn by_name<'a>(resources: &'a [AggregateResource], name: &str) -> &'a AggregateResource {
    resources
        .iter()
        .find(|r| r.name() == name)
        .unwrap_or_else(|| panic!("no aggregate for {name}"))
}

fn scalar(s: &impl Structure, suffix: &str) -> f64 {
    s.get_suffix(suffix)
        .unwrap()
        .as_scalar()
        .unwrap_or_else(|| panic!("{suffix} should be a scalar"))
}

// ── Aggregation ────────────────────────────────────────────────────────

#[test]
fn reference_three_part_grouping() {
    let fuel = ResourceDefinition::new("LiquidFuel", 0.005);
    let charge = ResourceDefinition::new("ElectricCharge", 0.0);
    let parts = vec![
        Part::new(1, "p1", "P1").with_resource(fuel.clone(), 10.0, 50.0),
        Part::new(2, "p2", "P2").with_resource(fuel, 5.0, 50.0),
        Part::new(3, "p3", "P3").with_resource(charge, 100.0, 200.0),
    ];
    let found = prospect_resources(&parts, &SharedContext::new("ref"));

    assert_eq!(found.len(), 2, "exactly two kinds");
    assert_eq!(found["LiquidFuel"].amount(), 15.0);
    assert_eq!(found["LiquidFuel"].capacity(), 100.0);
    assert_eq!(found["LiquidFuel"].parts().len(), 2);
    assert_eq!(found["ElectricCharge"].amount(), 100.0);
    assert_eq!(found["ElectricCharge"].capacity(), 200.0);
    assert_eq!(found["ElectricCharge"].parts().len(), 1);
}

#[test]
fn vessel_totals() {
    let v = kerbal_x();
    let res = v.resources();
    assert_eq!(res.len(), 4);

    let lf = by_name(&res, "LiquidFuel");
    assert_eq!(lf.amount(), 270.0);
    assert_eq!(lf.capacity(), 360.0);
    assert_eq!(lf.density(), 0.005, "stock density resolved");

    let ox = by_name(&res, "Oxidizer");
    assert_eq!(ox.amount(), 330.0);
    assert_eq!(ox.capacity(), 440.0);
}

#[test]
fn parts_without_resources_are_skipped() {
    let v = kerbal_x();
    let listed: Vec<u64> = v
        .resources()
        .iter()
        .flat_map(|r| r.parts().iter().map(|p| p.uid.0))
        .collect();
    assert!(!listed.contains(&2), "parachute holds nothing");
    assert!(!listed.contains(&5), "engine holds nothing");
    assert_eq!(listed.len(), 6, "one wrapper per resource entry");
}

#[test]
fn first_seen_order_is_stable() {
    let v = kerbal_x();
    let first: Vec<String> = v.resources().iter().map(|r| r.name().to_string()).collect();
    let second: Vec<String> = v.resources().iter().map(|r| r.name().to_string()).collect();
    assert_eq!(
        first,
        vec!["ElectricCharge", "MonoPropellant", "LiquidFuel", "Oxidizer"]
    );
    assert_eq!(first, second);
}

#[test]
fn listing_matches_vessel_entry_point() {
    let v = kerbal_x();
    let shared = v.shared_context();
    let listed = parts_to_list(&v.parts, &shared);
    let direct = from_vessel(&v, &shared);
    assert_eq!(listed.len(), direct.len());
    for (value, agg) in listed.iter().zip(direct.iter()) {
        assert_eq!(value.to_string(), agg.to_string());
    }
}

#[test]
fn empty_vessel_has_no_resources() {
    let v = Vessel::new("Debris", Vec::new());
    assert!(v.resources().is_empty());
    let v = Vessel::new("Strut", vec![Part::new(1, "strut", "Strut")]);
    assert!(v.resources().is_empty());
}

// ── Script surface ─────────────────────────────────────────────────────

#[test]
fn script_reads_resource_suffixes() {
    let v = kerbal_x();
    let res = v.get_suffix("RESOURCES").unwrap();
    let list = res.as_list().expect("RESOURCES is a list");
    let Value::Resource(lf) = &list[2] else {
        panic!("expected a resource, got {}", list[2]);
    };

    assert_eq!(lf.get_suffix("name").unwrap().as_str(), Some("LiquidFuel"));
    assert_eq!(scalar(lf, "AMOUNT"), 270.0);
    assert_eq!(scalar(lf, "CAPACITY"), 360.0);
    assert_eq!(scalar(lf, "DENSITY"), 0.005);
    assert_eq!(lf.to_string(), "SHIPRESOURCE(LiquidFuel,270,360)");

    let parts = lf.get_suffix("PARTS").unwrap();
    assert_eq!(
        parts.to_string(),
        "LIST(PART(fuelTank,uid=3), PART(fuelTank,uid=4))"
    );
}

#[test]
fn script_cannot_write_suffixes() {
    let mut res = kerbal_x().resources().remove(0);
    for name in res.suffix_names() {
        let err = res.set_suffix(name, Value::Scalar(0.0)).unwrap_err();
        assert!(
            matches!(err, ShipResError::ReadOnlySuffix { .. }),
            "{name} should be read only"
        );
    }
    assert_eq!(res.amount(), 50.0);
}

#[test]
fn unknown_suffix_reports_structure() {
    let res = kerbal_x().resources().remove(0);
    let err = res.get_suffix("MASS").unwrap_err();
    assert_eq!(err.to_string(), "suffix 'MASS' not found on ShipResource");
}

#[test]
fn report_serializes_to_json() {
    let res = kerbal_x().resources();
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json[0]["name"], "ElectricCharge");
    assert_eq!(json[0]["amount"], 50.0);
    assert_eq!(json[0]["parts"][0]["title"], "Mk1 Command Pod");
}
