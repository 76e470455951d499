use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::BEAN_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// RenameRule

/// The `rename_all` rule applied to field identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum RenameRule {
    /// Keep the identifier as written.
    #[default]
    None,
    Camel,
    Pascal,
    Snake,
    ScreamingSnake,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            _ => Err(syn::Error::new(
                lit.span(),
                "expected one of `camelCase`, `PascalCase`, `snake_case`, `SCREAMING_SNAKE_CASE`",
            )),
        }
    }

    pub(crate) fn apply(self, ident: &str) -> String {
        use bean_utils::case;

        match self {
            Self::None => ident.to_owned(),
            Self::Camel => case::to_camel_case(ident),
            Self::Pascal => case::to_pascal_case(ident),
            Self::Snake => case::to_underline_case(ident),
            Self::ScreamingSnake => case::to_screaming_snake_case(ident),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Container attributes: `#[bean(rename_all = "...", default, auto_register)]`.
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    pub rename_all: RenameRule,
    /// Register `Default::default` as the no-argument constructor.
    pub default: Option<Span>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(BEAN_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    result.rename_all = RenameRule::parse(&lit)?;
                    Ok(())
                } else if meta.path.is_ident("default") {
                    result.default = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    result.auto_register = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("unsupported bean attribute, expected `rename_all`, `default` or `auto_register`"))
                }
            })?;
        }

        Ok(result)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// How a field takes part in the bean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum FieldMode {
    /// Raw field and property with getter and setter.
    #[default]
    ReadWrite,
    /// Raw field and property with a getter only.
    ReadOnly,
    /// Raw field and property with a setter only.
    WriteOnly,
    /// Raw field only, no property.
    Skip,
    /// Neither a raw field nor a property.
    Ignore,
    /// The inheritance link.
    Parent,
}

/// Field attributes: `#[bean(parent | rename = "..." | skip | ignore | read_only | write_only)]`.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub mode: FieldMode,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();
        let mut mode_span: Option<Span> = None;

        for attr in attrs {
            if !attr.path().is_ident(BEAN_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if result.rename.is_some() {
                        return Err(meta.error("duplicate `rename` attribute"));
                    }
                    result.rename = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                let mode = if meta.path.is_ident("parent") {
                    FieldMode::Parent
                } else if meta.path.is_ident("skip") {
                    FieldMode::Skip
                } else if meta.path.is_ident("ignore") {
                    FieldMode::Ignore
                } else if meta.path.is_ident("read_only") {
                    FieldMode::ReadOnly
                } else if meta.path.is_ident("write_only") {
                    FieldMode::WriteOnly
                } else {
                    return Err(meta.error(
                        "unsupported bean field attribute, expected `parent`, `rename`, `skip`, `ignore`, `read_only` or `write_only`",
                    ));
                };

                if mode_span.is_some() {
                    return Err(meta.error(
                        "`parent`, `skip`, `ignore`, `read_only` and `write_only` are mutually exclusive",
                    ));
                }
                mode_span = Some(meta.path.span());
                result.mode = mode;
                Ok(())
            })?;
        }

        if let Some(rename) = &result.rename
            && matches!(result.mode, FieldMode::Parent | FieldMode::Ignore)
        {
            return Err(syn::Error::new(
                rename.span(),
                "`rename` has no effect on `parent` or `ignore` fields",
            ));
        }

        Ok(result)
    }
}
