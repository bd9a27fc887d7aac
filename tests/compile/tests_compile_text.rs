//! End-to-end compilation of model text.

use rstest::rstest;
use xuml_model::{
    AssocClass, MetadataValue, Multiplicity, NavTarget, Relationship, Side, compile_str,
};

use crate::helpers::compile_helpers::{class, compile_ok};
use crate::helpers::source_fixtures::{ELEVATOR_TRANSPORT, HEADER};

// =============================================================================
// Full fixture
// =============================================================================

#[test]
fn test_fixture_header_and_metadata() {
    let compilation = compile_ok(ELEVATOR_TRANSPORT);
    let subsystem = &compilation.subsystem;

    assert_eq!(subsystem.name, "Transport");
    assert_eq!(subsystem.abbreviation.as_deref(), Some("TRANS"));
    assert_eq!(subsystem.domain, "Elevator Management");

    assert_eq!(
        subsystem.metadata.keys().collect::<Vec<_>>(),
        vec!["Title", "Author", "Copyright notice", "Organization logo"]
    );
    assert_eq!(
        subsystem.metadata("Title"),
        Some(&MetadataValue::Text("Elevator Transport".to_string()))
    );
    assert_eq!(
        subsystem.metadata("Copyright notice"),
        Some(&MetadataValue::Resource("MIT".to_string()))
    );
    assert!(compilation.warnings.is_empty());
}

#[test]
fn test_fixture_classes_in_order() {
    let compilation = compile_ok(ELEVATOR_TRANSPORT);
    let names: Vec<_> = compilation
        .subsystem
        .classes
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Bank",
            "Shaft",
            "Cabin",
            "Floor",
            "Accessible Floor",
            "Door",
            "Level Door",
            "Cabin Door",
        ]
    );
    assert_eq!(
        compilation
            .subsystem
            .class_by_keyletter("AF")
            .map(|c| c.name.as_str()),
        Some("Accessible Floor")
    );
}

#[test]
fn test_fixture_cabin() {
    let compilation = compile_ok(ELEVATOR_TRANSPORT);
    let cabin = class(&compilation, "Cabin");

    assert_eq!(cabin.keyletter.as_deref(), Some("CAB"));
    assert_eq!(
        cabin.attributes.keys().collect::<Vec<_>>(),
        vec!["Shaft", "Travel direction"]
    );
    assert!(cabin.ignored_attributes.contains_key("Scratch"));
    assert_eq!(
        cabin.methods,
        Some(vec!["Ping()".to_string(), "Go to floor(floor)".to_string()])
    );

    let shaft = &cabin.attributes["Shaft"];
    assert!(shaft.in_identifier("I"));
    assert_eq!(shaft.type_name, None);
    let reference = shaft.reference.as_ref().unwrap();
    assert_eq!(reference.rnum, "R2");
    assert_eq!(reference.target, NavTarget::Class("Shaft".to_string()));
}

#[test]
fn test_fixture_import_and_identifiers() {
    let compilation = compile_ok(ELEVATOR_TRANSPORT);

    let floor = class(&compilation, "Floor");
    assert!(floor.is_imported());
    assert_eq!(floor.import.as_deref(), Some("BLDG"));
    assert_eq!(floor.identifier_groups(), vec!["I", "I2"]);

    let level_door = class(&compilation, "Level Door");
    let floor_attr = level_door.attribute("Floor").unwrap();
    assert!(floor_attr.constrained_identifiers.contains("I2"));
    assert!(floor_attr.identifiers.contains("I2"));
    assert_eq!(
        level_door.attribute("Cabin").unwrap().reference.as_ref().map(|r| &r.target),
        Some(&NavTarget::Phrase("is a".to_string()))
    );
}

#[test]
fn test_fixture_union_navigation() {
    let compilation = compile_ok(ELEVATOR_TRANSPORT);
    let door = class(&compilation, "Door");
    let reference = door.attribute("Cabin").unwrap().reference.clone().unwrap();

    assert!(reference.is_union);
    assert!(reference.is_constrained);
    assert_eq!(reference.rnum, "R6");
    assert_eq!(reference.target, NavTarget::Attribute("Shaft".to_string()));
}

#[test]
fn test_fixture_bare_relationship_reference() {
    let compilation = compile_ok(ELEVATOR_TRANSPORT);
    let bank = class(&compilation, "Shaft").attribute("Bank").unwrap();
    assert!(bank.formalizes.contains("R1"));
    assert!(bank.reference.is_none());
    assert!(bank.is_referential());
}

#[test]
fn test_fixture_relationships() {
    let compilation = compile_ok(ELEVATOR_TRANSPORT);
    let subsystem = &compilation.subsystem;

    let rnums: Vec<_> = subsystem.relationships.iter().map(Relationship::rnum).collect();
    assert_eq!(rnums, vec!["R1", "R2", "R3", "R6"]);

    assert_eq!(
        subsystem.relationship("R1"),
        Some(&Relationship::Binary {
            rnum: "R1".to_string(),
            t_side: Side::new("is managed by", Multiplicity::One, "Bank"),
            p_side: Side::new("manages", Multiplicity::Many, "Shaft"),
            association_class: None,
        })
    );

    let Some(Relationship::Binary {
        association_class, ..
    }) = subsystem.relationship("R3")
    else {
        panic!("R3 should be binary");
    };
    assert_eq!(
        association_class,
        &Some(AssocClass {
            class_name: "Accessible Floor".to_string(),
            multiplicity: Multiplicity::One,
        })
    );

    assert_eq!(
        subsystem.relationship("R6"),
        Some(&Relationship::Generalization {
            rnum: "R6".to_string(),
            superclass: "Door".to_string(),
            subclasses: vec!["Level Door".to_string(), "Cabin Door".to_string()],
        })
    );

    let of_bank: Vec<_> = subsystem
        .relationships_of("Bank")
        .map(Relationship::rnum)
        .collect();
    assert_eq!(of_bank, vec!["R1", "R3"]);
}

#[test]
fn test_fixture_compiles_deterministically() {
    assert_eq!(
        compile_str(ELEVATOR_TRANSPORT).unwrap(),
        compile_str(ELEVATOR_TRANSPORT).unwrap()
    );
}

// =============================================================================
// Small inputs
// =============================================================================

#[rstest]
#[case("domain D\nsubsystem S\n", "S", None)]
#[case("domain D\nsubsystem S, SUB\n", "S", Some("SUB"))]
#[case("domain D\nsubsystem Größe, GR\n", "Größe", Some("GR"))]
#[case("\n\n// leading comment\ndomain D\n\nsubsystem Multi Word Name, MWN\n\n", "Multi Word Name", Some("MWN"))]
fn test_header_forms(#[case] text: &str, #[case] name: &str, #[case] abbreviation: Option<&str>) {
    let subsystem = compile_ok(text).subsystem;
    assert_eq!(subsystem.name, name);
    assert_eq!(subsystem.abbreviation.as_deref(), abbreviation);
    assert_eq!(subsystem.domain, "D");
}

#[rstest]
#[case("Name : Floor Name {I}", Some("Floor Name"), &["I"])]
#[case("Name : Floor Name {I, I, I2}", Some("Floor Name"), &["I", "I2"])]
#[case("Name {I2c, R7}", None, &["I2"])]
#[case("Name:Text", Some("Text"), &[])]
#[case("  Name  :  Text  // trailing note", Some("Text"), &[])]
fn test_attribute_forms(
    #[case] line: &str,
    #[case] type_name: Option<&str>,
    #[case] identifiers: &[&str],
) {
    let text = format!("{HEADER}class Floor\nattributes\n{line}\n--\n");
    let compilation = compile_ok(&text);
    let attribute = class(&compilation, "Floor").attribute("Name").unwrap();

    assert_eq!(attribute.type_name.as_deref(), type_name);
    assert_eq!(
        attribute.identifiers.iter().map(String::as_str).collect::<Vec<_>>(),
        identifiers
    );
}

#[rstest]
#[case("1", Multiplicity::One)]
#[case("M", Multiplicity::Many)]
fn test_multiplicity_literals(#[case] literal: &str, #[case] expected: Multiplicity) {
    let text = format!("{HEADER}relationships\nR1\nowns, {literal} Pet\nis owned by, 1 Owner\n");
    let subsystem = compile_ok(&text).subsystem;
    let Some(Relationship::Binary { t_side, .. }) = subsystem.relationship("R1") else {
        panic!("R1 should be binary");
    };
    assert_eq!(t_side.multiplicity, expected);
    assert_eq!(t_side.multiplicity.as_str(), literal);
}

#[test]
fn test_missing_type_is_structural() {
    let text = format!("{HEADER}class Floor\nattributes\nName {{I}}\n--\n");
    let err = compile_str(&text).unwrap_err();
    assert_eq!(
        err.to_string(),
        "subsystem > class_set > class_block > attr_block > attr: attribute is missing required type or reference"
    );
}

#[test]
fn test_ignored_attribute_needs_no_type() {
    let text = format!("{HEADER}class Floor\nattributes\nName : Text\n!Legacy\n--\n");
    let compilation = compile_ok(&text);
    let floor = class(&compilation, "Floor");
    assert!(floor.attribute("Legacy").is_none());
    assert!(floor.ignored_attributes["Legacy"].is_ignored);
}

#[test]
fn test_bare_union_reference() {
    let text = format!("{HEADER}class Door\nattributes\nCabin {{UR3}}\nShaft {{R2, UR3}}\n--\n");
    let compilation = compile_ok(&text);
    let door = class(&compilation, "Door");

    let cabin = door.attribute("Cabin").unwrap();
    assert!(cabin.formalizes.contains("R3"));
    assert!(cabin.union_formalizes.contains("R3"));
    assert!(cabin.reference.is_none());

    let shaft = door.attribute("Shaft").unwrap();
    assert_eq!(
        shaft.formalizes.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["R2", "R3"]
    );
    assert_eq!(
        shaft.union_formalizes.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["R3"]
    );
}

#[rstest]
#[case("class id : T", "class id", "T")]
#[case("class Name : Text {I}", "class Name", "Text")]
#[case("subsystem : Name", "subsystem", "Name")]
fn test_keywords_inside_attribute_names(
    #[case] line: &str,
    #[case] name: &str,
    #[case] type_name: &str,
) {
    let text = format!("{HEADER}class Floor\nattributes\nLevel : Count\n{line}\n--\n");
    let compilation = compile_ok(&text);

    assert_eq!(compilation.subsystem.classes.len(), 1);
    let attribute = class(&compilation, "Floor").attribute(name).unwrap();
    assert_eq!(attribute.type_name.as_deref(), Some(type_name));
}

#[rstest]
#[case("domain owner : Leon", "domain owner", MetadataValue::Text("Leon".to_string()))]
#[case("subsystem logo > mint_small", "subsystem logo", MetadataValue::Resource("mint_small".to_string()))]
#[case("domain : Lifts", "domain", MetadataValue::Text("Lifts".to_string()))]
fn test_keywords_inside_metadata_keys(
    #[case] line: &str,
    #[case] key: &str,
    #[case] value: MetadataValue,
) {
    let text = format!("metadata\n{line}\n\n{HEADER}");
    let subsystem = compile_ok(&text).subsystem;

    assert_eq!(subsystem.metadata(key), Some(&value));
    assert_eq!(subsystem.domain, "Elevator Management");
    assert_eq!(subsystem.name, "Transport");
}
