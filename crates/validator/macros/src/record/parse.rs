//! Parsing of #[validate(...)] attributes

use syn::{Attribute, LitStr};

/// What a field's `#[validate(...)]` attributes ask for.
#[derive(Debug, Default, Clone)]
pub(super) struct FieldAttrs {
    pub rules: Option<LitStr>,
    pub code: Option<LitStr>,
    pub embedded: bool,
}

impl FieldAttrs {
    /// Collects every `#[validate]` attribute of a field.
    ///
    /// Returns `None` when the field has none, meaning it is not part of the
    /// record's description.
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Option<Self>> {
        let mut result = Self::default();
        let mut seen: Option<&Attribute> = None;

        for attr in attrs {
            if !attr.path().is_ident("validate") {
                continue;
            }
            seen = Some(attr);

            // Shorthand: #[validate("NotEmpty, MaxLength:8")]
            if let Ok(rules) = attr.parse_args::<LitStr>() {
                result.set_rules(rules)?;
                continue;
            }

            attr.parse_nested_meta(|meta| result.parse_meta(&meta))?;
        }

        let Some(attr) = seen else {
            return Ok(None);
        };

        if result.embedded && (result.rules.is_some() || result.code.is_some()) {
            return Err(syn::Error::new_spanned(
                attr,
                "`embedded` fields are validated by their own rules; \
                 remove `rules`/`code` from this field",
            ));
        }

        if !result.embedded && result.rules.is_none() {
            return Err(syn::Error::new_spanned(
                attr,
                "expected a rule expression, e.g. #[validate(\"NotEmpty\")], \
                 or #[validate(embedded)]",
            ));
        }

        Ok(Some(result))
    }

    fn parse_meta(&mut self, meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("rules") {
            let value: LitStr = meta.value()?.parse()?;
            return self.set_rules(value);
        }

        if meta.path.is_ident("code") {
            let value: LitStr = meta.value()?.parse()?;
            if self.code.is_some() {
                return Err(syn::Error::new_spanned(value, "duplicate `code`"));
            }
            self.code = Some(value);
            return Ok(());
        }

        if meta.path.is_ident("embedded") {
            self.embedded = true;
            return Ok(());
        }

        Err(meta.error("unknown validate attribute; expected `rules`, `code` or `embedded`"))
    }

    fn set_rules(&mut self, rules: LitStr) -> syn::Result<()> {
        if self.rules.is_some() {
            return Err(syn::Error::new_spanned(rules, "duplicate rule expression"));
        }
        self.rules = Some(rules);
        Ok(())
    }
}
