//! trybuild coverage for `#[derive(Options)]`.
//!
//! Ensures derived impls compile against the public API, including when the
//! runtime crate is imported under another name.

#[test]
fn derived_options_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/plain.rs");
    t.pass("tests/trybuild/crate_path_alias.rs");
}
