pub mod entity;
pub mod error;

use fxhash::FxHashSet;
use syn::DeriveInput;

/// Names of the traits already listed in `#[derive(...)]`, by last path segment.
pub fn derived_trait_names(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                traits.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}
