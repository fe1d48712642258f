use super::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Expr, Fields, Ident, Lit, LitStr, Meta, Token, Type};

/// How a field is passed into setters and handed out by accessors.
enum Shape {
    /// `String`: setters take `impl Into<String>`, the getter borrows `&str`.
    Text,
    /// Primitive scalars: taken and returned by value.
    Scalar,
    /// Anything else: taken by value, returned by reference.
    Other,
}

struct EntityField {
    ident: Ident,
    ty: Type,
    label: LitStr,
    shape: Shape,
}

pub fn expand(args: TokenStream, mut input: DeriveInput) -> TokenStream {
    match expand_inner(args, &mut input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand_inner(args: TokenStream, input: &mut DeriveInput) -> syn::Result<TokenStream> {
    let title = parse_title(args)?;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[entity] does not support generic structs",
        ));
    }

    let fields = collect_fields(input)?;
    strip_describe_attrs(input);

    let name = &input.ident;
    let vis = &input.vis;
    let builder = format_ident!("{name}Builder");
    let derives = missing_derives(input);

    let setters = fields.iter().map(entity_setter);
    let getters = fields.iter().map(entity_getter);
    let chained = fields.iter().map(builder_setter);
    let display = display_impl(name, title.as_ref(), &fields);

    let builder_doc = format!(
        "Fluent configurator for [`{name}`].\n\nEvery setter consumes and returns the \
         configurator, so calls chain. [`{builder}::build`] consumes it as well; a finished \
         configurator cannot be reused."
    );

    Ok(quote! {
        #derives
        #input

        impl #name {
            /// Starts a fresh configurator with every field at its default.
            #vis fn builder() -> #builder {
                #builder::default()
            }

            /// Renders every field, one per line, in declaration order.
            #[must_use]
            #vis fn describe(&self) -> String {
                self.to_string()
            }

            #(#setters)*
            #(#getters)*
        }

        #[doc = #builder_doc]
        #[derive(Debug, Clone, Default)]
        #[must_use = "a configurator does nothing until `build` is called"]
        #vis struct #builder {
            inner: #name,
        }

        impl #builder {
            #vis fn new() -> Self {
                Self::default()
            }

            #(#chained)*

            /// Finishes configuration and hands the entity to the caller.
            #vis fn build(self) -> #name {
                self.inner
            }
        }

        impl From<#name> for #builder {
            fn from(inner: #name) -> Self {
                Self { inner }
            }
        }

        #display
    })
}

fn parse_title(args: TokenStream) -> syn::Result<Option<LitStr>> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut title = None;

    for meta in metas {
        let Meta::NameValue(nv) = meta else {
            return Err(syn::Error::new_spanned(meta, "expected `title = \"...\"`"));
        };
        if !nv.path.is_ident("title") {
            return Err(syn::Error::new_spanned(nv.path, "only `title = \"...\"` is supported"));
        }
        if title.is_some() {
            return Err(syn::Error::new_spanned(nv, "duplicate `title` argument"));
        }
        title = Some(string_literal(&nv.value)?);
    }

    Ok(title)
}

fn string_literal(expr: &Expr) -> syn::Result<LitStr> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(s) => Ok(s.clone()),
            other => Err(syn::Error::new_spanned(other, "expected a string literal")),
        },
        other => Err(syn::Error::new_spanned(other, "expected a string literal")),
    }
}

/// Method names `#[entity]` generates on the entity or its configurator.
const RESERVED_NAMES: &[&str] = &["build", "builder", "describe", "new"];

fn collect_fields(input: &DeriveInput) -> syn::Result<Vec<EntityField>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "#[entity] only supports structs"));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[entity] requires a struct with named fields",
        ));
    };

    named
        .named
        .iter()
        .map(|field| {
            let Some(ident) = field.ident.clone() else {
                return Err(syn::Error::new_spanned(field, "unnamed field"));
            };
            if RESERVED_NAMES.iter().any(|reserved| ident == reserved) {
                return Err(syn::Error::new_spanned(
                    &ident,
                    format!("`{ident}` clashes with a generated method; rename the field"),
                ));
            }
            let label = match describe_label(field)? {
                Some(label) => label,
                None => LitStr::new(&title_case(&ident.to_string()), Span::call_site()),
            };
            Ok(EntityField { shape: shape_of(&field.ty), ty: field.ty.clone(), ident, label })
        })
        .collect()
}

/// Reads `#[describe(label = "...")]` off a field.
fn describe_label(field: &syn::Field) -> syn::Result<Option<LitStr>> {
    let mut label = None;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("describe")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("label") {
                label = Some(meta.value()?.parse::<LitStr>()?);
                Ok(())
            } else {
                Err(meta.error("only `label = \"...\"` is supported"))
            }
        })?;
    }
    Ok(label)
}

fn strip_describe_attrs(input: &mut DeriveInput) {
    if let Data::Struct(data) = &mut input.data {
        for field in &mut data.fields {
            field.attrs.retain(|a| !a.path().is_ident("describe"));
        }
    }
}

fn shape_of(ty: &Type) -> Shape {
    const SCALARS: &[&str] = &[
        "bool", "char", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
        "u128", "usize", "f32", "f64",
    ];

    let Type::Path(path) = ty else {
        return Shape::Other;
    };
    match path.path.segments.last() {
        Some(seg) if seg.ident == "String" => Shape::Text,
        Some(seg) if SCALARS.iter().any(|s| seg.ident == s) => Shape::Scalar,
        _ => Shape::Other,
    }
}

/// `first_name` becomes `First Name`.
fn title_case(ident: &str) -> String {
    ident
        .trim_start_matches("r#")
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let present = derived_trait_names(input);

    let wanted: Vec<Ident> = ["Debug", "Clone", "Default", "PartialEq"]
        .into_iter()
        .filter(|name| !present.contains(*name))
        .map(|name| Ident::new(name, Span::call_site()))
        .collect();

    if wanted.is_empty() { quote!() } else { quote!(#[derive(#(#wanted),*)]) }
}

fn entity_setter(field: &EntityField) -> TokenStream {
    let EntityField { ident, ty, .. } = field;
    let setter = format_ident!("set_{}", ident.to_string().trim_start_matches("r#"));
    let doc = format!("Overwrites `{ident}`.");

    match field.shape {
        Shape::Text => quote! {
            #[doc = #doc]
            pub fn #setter(&mut self, value: impl Into<String>) {
                self.#ident = value.into();
            }
        },
        Shape::Scalar | Shape::Other => quote! {
            #[doc = #doc]
            pub fn #setter(&mut self, value: #ty) {
                self.#ident = value;
            }
        },
    }
}

fn entity_getter(field: &EntityField) -> TokenStream {
    let EntityField { ident, ty, .. } = field;

    match field.shape {
        Shape::Text => quote! {
            #[must_use]
            pub fn #ident(&self) -> &str {
                &self.#ident
            }
        },
        Shape::Scalar => quote! {
            #[must_use]
            pub const fn #ident(&self) -> #ty {
                self.#ident
            }
        },
        Shape::Other => quote! {
            #[must_use]
            pub const fn #ident(&self) -> &#ty {
                &self.#ident
            }
        },
    }
}

fn builder_setter(field: &EntityField) -> TokenStream {
    let EntityField { ident, ty, .. } = field;
    let setter = format_ident!("set_{}", ident.to_string().trim_start_matches("r#"));

    let param = match field.shape {
        Shape::Text => quote!(impl Into<String>),
        Shape::Scalar | Shape::Other => quote!(#ty),
    };

    quote! {
        pub fn #ident(mut self, value: #param) -> Self {
            self.inner.#setter(value);
            self
        }
    }
}

fn display_impl(name: &Ident, title: Option<&LitStr>, fields: &[EntityField]) -> TokenStream {
    let mut lines = Vec::with_capacity(fields.len() + 1);

    if let Some(title) = title {
        lines.push(quote! { f.write_str(#title)?; });
    }
    for EntityField { ident, label, .. } in fields {
        lines.push(quote! { write!(f, "{}: {}", #label, self.#ident)?; });
    }

    let display_checks = fields.iter().map(|EntityField { ty, .. }| {
        quote_spanned! {ty.span()=>
            const _: fn() = || {
                fn field_must_implement_display<T: ::std::fmt::Display + ?Sized>() {}
                field_must_implement_display::<#ty>();
            };
        }
    });

    let body = lines.iter().enumerate().map(|(i, line)| {
        if i == 0 {
            quote! { #line }
        } else {
            quote! { f.write_str("\n")?; #line }
        }
    });

    quote! {
        #(#display_checks)*

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #(#body)*
                Ok(())
            }
        }
    }
}
