//! Lint warnings and compile options.

use rstest::rstest;
use xuml_model::{CompileOptions, Compiler, MetadataValue, ResourceTable, Warning};

use crate::helpers::compile_helpers::{class, compile_ok, compile_ok_with};
use crate::helpers::source_fixtures::{DUPLICATE_METADATA, ELEVATOR_TRANSPORT, HEADER};

#[test]
fn test_duplicate_metadata_last_wins() {
    let compilation = compile_ok(DUPLICATE_METADATA);
    assert_eq!(
        compilation.subsystem.metadata("Author"),
        Some(&MetadataValue::Resource("MIT".to_string()))
    );
    assert_eq!(
        compilation.warnings,
        vec![Warning::DuplicateMetadataKey {
            key: "Author".to_string()
        }]
    );
    assert_eq!(
        compilation.warnings[0].to_string(),
        "[W0101] metadata key `Author` redefined; keeping last value"
    );
}

#[test]
fn test_duplicate_attribute_warning() {
    let text = format!("{HEADER}class Floor\nattributes\nName : Short\nHeight : Distance\nName : Long\n--\n");
    let compilation = compile_ok(&text);

    let floor = class(&compilation, "Floor");
    assert_eq!(floor.attributes.keys().collect::<Vec<_>>(), vec!["Name", "Height"]);
    assert_eq!(floor.attributes["Name"].type_name.as_deref(), Some("Long"));
    assert_eq!(compilation.warnings.len(), 1);
    assert_eq!(compilation.warnings[0].code(), "W0201");
}

#[rstest]
#[case(true, true, 2)]
#[case(false, true, 1)]
#[case(true, false, 1)]
#[case(false, false, 0)]
fn test_warning_switches(
    #[case] metadata: bool,
    #[case] attributes: bool,
    #[case] expected: usize,
) {
    let text = format!(
        "metadata\nA : one\nA : two\n\n{HEADER}class Floor\nattributes\nName : X\nName : Y\n--\n"
    );
    let options = CompileOptions::default()
        .with_duplicate_metadata_warnings(metadata)
        .with_duplicate_attribute_warnings(attributes);
    let compilation = compile_ok_with(options, &text);
    assert_eq!(compilation.warnings.len(), expected);
}

#[test]
fn test_standard_resources_are_known() {
    let options = CompileOptions::default()
        .with_resources(ResourceTable::with_standard_images("/usr/share/xuml/images"));
    let compilation = compile_ok_with(options, ELEVATOR_TRANSPORT);
    assert!(compilation.warnings.is_empty());
}

#[test]
fn test_unknown_resource_is_reported() {
    let mut resources = ResourceTable::new();
    resources.insert("MIT", "images/mit.png");
    let options = CompileOptions::default().with_resources(resources);

    let compilation = compile_ok_with(options, ELEVATOR_TRANSPORT);
    assert_eq!(
        compilation.warnings,
        vec![Warning::UnknownResource {
            key: "Organization logo".to_string(),
            resource: "mint_small".to_string(),
        }]
    );
    assert_eq!(compilation.warnings[0].code(), "W0102");
}

#[test]
fn test_compile_many_in_parallel() {
    let texts = vec![
        ELEVATOR_TRANSPORT.to_string(),
        DUPLICATE_METADATA.to_string(),
        "not a model".to_string(),
    ];
    let results = Compiler::default().compile_many(&texts);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().map(|c| c.subsystem.classes.len()).ok(), Some(8));
    assert_eq!(results[1].as_ref().map(|c| c.warnings.len()).ok(), Some(1));
    assert!(results[2].is_err());
}
