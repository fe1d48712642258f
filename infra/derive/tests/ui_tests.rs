#[test]
fn motif_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/motif_error_pass.rs");
    t.compile_fail("tests/ui/motif_error_no_context.rs");
    t.compile_fail("tests/ui/motif_error_bad_context_type.rs");
    t.compile_fail("tests/ui/motif_error_tuple_variant.rs");
}

#[test]
fn entity_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/entity_pass.rs");
    t.compile_fail("tests/ui/entity_generic.rs");
    t.compile_fail("tests/ui/entity_tuple_struct.rs");
    t.compile_fail("tests/ui/entity_unknown_argument.rs");
    t.compile_fail("tests/ui/entity_duplicate_title.rs");
    t.compile_fail("tests/ui/entity_bad_describe_key.rs");
    t.compile_fail("tests/ui/entity_reserved_field.rs");
}
