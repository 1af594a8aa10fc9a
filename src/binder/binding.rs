use super::{
    Document,
    ElementId,
    Target,
};
use crate::config::MarkerAttributes;
use crate::localizer::Translator;
use crate::template::ParamSet;

/// One marked element and the text it should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The marked element
    pub element: ElementId,
    /// Translation key read from the marker attribute
    pub key: String,
    /// Parameters for content bindings; empty otherwise
    pub params: ParamSet,
    /// Where the rendered text goes
    pub target: Target,
}

impl Binding {
    /// Resolves the binding's text without touching the document.
    #[must_use]
    pub fn render(&self, translator: &Translator<'_>) -> String {
        translator.t_with(&self.key, &self.params)
    }
}

/// Reads every marker attribute in `document`.
///
/// Content bindings come first, then placeholders, then titles; each group in
/// document order. Only content bindings take parameters. A malformed
/// parameter attribute is logged and the element is rendered without
/// parameters.
pub fn collect_bindings<D: Document + ?Sized>(
    document: &D,
    markers: &MarkerAttributes,
) -> Vec<Binding> {
    let sweeps = [
        (markers.content.as_str(), Target::TextContent),
        (markers.placeholder.as_str(), Target::Placeholder),
        (markers.title.as_str(), Target::Title),
    ];

    let mut bindings = Vec::new();
    for (attribute, target) in sweeps {
        for element in document.elements_with_attribute(attribute) {
            let Some(key) = document.attribute(element, attribute) else {
                continue;
            };
            let params = if target == Target::TextContent {
                parse_params(element, document.attribute(element, &markers.params))
            } else {
                ParamSet::new()
            };
            bindings.push(Binding { element, key: key.to_string(), params, target });
        }
    }
    bindings
}

/// Parses a parameter attribute; absent or empty means no parameters.
fn parse_params(element: ElementId, raw: Option<&str>) -> ParamSet {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return ParamSet::new();
    };

    match ParamSet::from_json_str(raw) {
        Ok(params) => params,
        Err(e) => {
            tracing::warn!(element, raw, "Ignoring malformed translation params: {e}");
            ParamSet::new()
        }
    }
}

/// Renders every binding in `document` and sets the root language.
///
/// Returns the number of elements written.
pub fn apply_translations<D: Document + ?Sized>(
    translator: &Translator<'_>,
    markers: &MarkerAttributes,
    document: &mut D,
) -> usize {
    let bindings = collect_bindings(document, markers);
    for binding in &bindings {
        let text = binding.render(translator);
        document.write(binding.element, binding.target, &text);
    }
    document.set_language(translator.language().as_str());

    tracing::debug!(
        count = bindings.len(),
        lang = %translator.language(),
        "Applied translations"
    );
    bindings.len()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::binder::{
        MemoryDocument,
        MemoryElement,
    };
    use crate::catalog::{
        Catalog,
        TranslationTable,
    };
    use crate::language::LanguageCode;

    fn catalog() -> Catalog {
        Catalog::new(LanguageCode::En)
            .with_table(
                LanguageCode::En,
                TranslationTable::from_pairs(&[
                    ("hud.budget", "Budget"),
                    ("msg.cost", "Road costs {cost}. You have {money}."),
                    ("form.name", "Enter name"),
                    ("tip.close", "Close"),
                ]),
            )
            .with_table(LanguageCode::Ko, TranslationTable::from_pairs(&[("hud.budget", "예산")]))
    }

    #[googletest::test]
    fn collect_bindings_reads_all_markers() {
        let mut document = MemoryDocument::new();
        document.push(MemoryElement::new("span").attr("data-i18n", "hud.budget"));
        document.push(
            MemoryElement::new("input")
                .attr("data-i18n-placeholder", "form.name")
                .attr("data-i18n-params", r#"{"ignored": 1}"#),
        );
        document.push(MemoryElement::new("button").attr("data-i18n-title", "tip.close"));

        let bindings = collect_bindings(&document, &MarkerAttributes::default());
        let summary: Vec<_> = bindings
            .iter()
            .map(|b| (b.element, b.key.as_str(), b.target, b.params.is_empty()))
            .collect();

        expect_that!(
            summary,
            eq(&vec![
                (0, "hud.budget", Target::TextContent, true),
                (1, "form.name", Target::Placeholder, true),
                (2, "tip.close", Target::Title, true),
            ])
        );
    }

    #[googletest::test]
    fn content_bindings_carry_params() {
        let mut document = MemoryDocument::new();
        document.push(
            MemoryElement::new("p")
                .attr("data-i18n", "msg.cost")
                .attr("data-i18n-params", r#"{"cost": 100}"#),
        );

        let bindings = collect_bindings(&document, &MarkerAttributes::default());

        assert_that!(bindings, len(eq(1)));
        expect_that!(bindings.first().unwrap().params.get("cost"), some(eq("100")));
    }

    #[rstest]
    #[case::malformed("{not json")]
    #[case::empty("")]
    fn unusable_params_render_without_substitution(#[case] raw: &str) {
        let mut document = MemoryDocument::new();
        let id = document.push(
            MemoryElement::new("p").attr("data-i18n", "msg.cost").attr("data-i18n-params", raw),
        );
        let catalog = catalog();

        apply_translations(
            &Translator::new(&catalog, LanguageCode::En),
            &MarkerAttributes::default(),
            &mut document,
        );

        assert_that!(
            document.element(id).unwrap().text,
            eq("Road costs {cost}. You have {money}.")
        );
    }

    #[googletest::test]
    fn apply_translations_writes_every_target() {
        let mut document = MemoryDocument::new();
        let text = document.push(
            MemoryElement::new("p")
                .attr("data-i18n", "msg.cost")
                .attr("data-i18n-params", r#"{"cost": 100, "money": 50}"#),
        );
        let input = document.push(MemoryElement::new("input").attr("data-i18n-placeholder", "form.name"));
        let button = document.push(MemoryElement::new("button").attr("data-i18n-title", "tip.close"));
        let catalog = catalog();

        let written = apply_translations(
            &Translator::new(&catalog, LanguageCode::En),
            &MarkerAttributes::default(),
            &mut document,
        );

        expect_that!(written, eq(3));
        expect_that!(document.element(text).unwrap().text, eq("Road costs 100. You have 50."));
        expect_that!(
            document.element(input).unwrap().get_attr("placeholder"),
            some(eq("Enter name"))
        );
        expect_that!(document.element(button).unwrap().get_attr("title"), some(eq("Close")));
        expect_that!(document.lang, some(eq("en")));
    }

    #[googletest::test]
    fn apply_translations_falls_back_per_element() {
        let mut document = MemoryDocument::new();
        let budget = document.push(MemoryElement::new("span").attr("data-i18n", "hud.budget"));
        let close = document.push(MemoryElement::new("span").attr("data-i18n", "tip.close"));
        let missing = document.push(MemoryElement::new("span").attr("data-i18n", "no.such.key"));
        let catalog = catalog();

        apply_translations(
            &Translator::new(&catalog, LanguageCode::Ko),
            &MarkerAttributes::default(),
            &mut document,
        );

        expect_that!(document.element(budget).unwrap().text, eq("예산"));
        expect_that!(document.element(close).unwrap().text, eq("Close"));
        expect_that!(document.element(missing).unwrap().text, eq("no.such.key"));
        expect_that!(document.lang, some(eq("ko")));
    }

    #[googletest::test]
    fn custom_marker_names() {
        let markers = MarkerAttributes {
            content: "data-t".to_string(),
            params: "data-t-args".to_string(),
            placeholder: "data-t-ph".to_string(),
            title: "data-t-title".to_string(),
        };
        let mut document = MemoryDocument::new();
        let custom = document.push(MemoryElement::new("span").attr("data-t", "hud.budget"));
        let default = document.push(MemoryElement::new("span").attr("data-i18n", "hud.budget"));
        let catalog = catalog();

        apply_translations(&Translator::new(&catalog, LanguageCode::En), &markers, &mut document);

        expect_that!(document.element(custom).unwrap().text, eq("Budget"));
        expect_that!(document.element(default).unwrap().text, eq(""));
    }
}
