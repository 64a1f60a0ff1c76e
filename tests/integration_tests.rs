//! Integration tests for wikiclean

use wikiclean::{
    clean_template_args, clean_value, clean_value_with_options,
    diagnostics::{CollectingSink, DiagnosticLevel},
    render_math, render_math_with_sink, strip_emphasis, to_chem, to_subscript, to_superscript,
    CleanOptions, Cleaner, NamespaceConfig,
};

// ============================================================================
// Markup Stripping
// ============================================================================

mod markup {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gloss_with_links_and_references() {
        let input = "(''transitive'') To [[eat]] [[food|foods]]<ref>Cite this</ref>.";
        assert_eq!(clean_value(input), "(transitive) To eat foods.");
    }

    #[test]
    fn test_nested_tables_removed() {
        let input = "a\n{| class=\"wikitable\"\n|-\n| {|\n| inner\n|}\n|}\nb";
        assert_eq!(clean_value(input), "a\nb");
    }

    #[test]
    fn test_spans_and_breaks() {
        assert_eq!(
            clean_value("<span class=\"Latn\">multi\n  word</span><br/>next"),
            "multi word\nnext"
        );
    }

    #[test]
    fn test_floating_box_removed() {
        let input = "<div class=\"floatright\"><div>kanji</div></div>meaning";
        assert_eq!(clean_value(input), "meaning");
    }

    #[test]
    fn test_definition_lists_become_lines() {
        assert_eq!(clean_value("<dl><dt>term</dt><dd>def</dd></dl>"), "term\ndef");
    }

    #[test]
    fn test_inline_scripts() {
        assert_eq!(clean_value("m<sup>2</sup>"), "m²");
        assert_eq!(clean_value("CO<sub>2</sub>"), "CO₂");
        assert_eq!(clean_value("<chem>C6H12O6</chem>"), "C₆H₁₂O₆");
    }

    #[test]
    fn test_math_tag() {
        assert_eq!(clean_value(r"<math>\sqrt[3]{x}</math>"), "∛x");
        assert_eq!(clean_value(r#"<math display="block">x^2</math>"#), "x²");
    }

    #[test]
    fn test_entities_decoded_after_tag_stripping() {
        assert_eq!(clean_value("&lt;b&gt; &eacute;"), "<b> é");
    }

    #[test]
    fn test_raw_html_option() {
        let out = clean_value_with_options("<i>x</i> <noinclude/>", CleanOptions::raw_html());
        assert_eq!(out, "<i>x</i>");
    }
}

// ============================================================================
// Links
// ============================================================================

mod links {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_piped_and_plain() {
        assert_eq!(clean_value("[[foo|bar]]"), "bar");
        assert_eq!(clean_value("[[foo]]"), "foo");
        assert_eq!(clean_value("[[w:Albert Einstein|Einstein]]"), "Einstein");
        assert_eq!(clean_value("[[w:Paris]]"), "Paris");
    }

    #[test]
    fn test_category_and_file_links_dropped() {
        assert_eq!(clean_value("[[Category:Foo]]"), "");
        assert_eq!(clean_value("word [[Category:English nouns]]"), "word");
        assert_eq!(clean_value("[[File:Foo.jpg|thumb|A picture]] Text"), "Text");
    }

    #[test]
    fn test_inline_image_alt_text() {
        assert_eq!(clean_value("[[File:Sym.svg|20px|alt=star]]"), "[Alt: star]");
    }

    #[test]
    fn test_link_label_with_external_link() {
        assert_eq!(
            clean_value("[[Foo|see [https://example.org the site]]]"),
            "see the site"
        );
    }

    #[test]
    fn test_bracket_in_target() {
        assert_eq!(clean_value("[[a[b]]"), "a[b");
    }

    #[test]
    fn test_external_links() {
        assert_eq!(clean_value("[https://example.org Example]"), "Example");
        assert_eq!(clean_value("[https://example.org]"), "https://example.org");
    }
}

// ============================================================================
// Emphasis
// ============================================================================

mod emphasis {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markers_removed() {
        assert_eq!(strip_emphasis("''i'' '''b''' '''''bi'''''"), "i b bi");
    }

    #[test]
    fn test_apostrophe_after_italic() {
        assert_eq!(strip_emphasis("''l'''amour"), "l'amour");
    }

    #[test]
    fn test_lines_are_independent() {
        assert_eq!(strip_emphasis("''a\nb''"), "a\nb");
    }
}

// ============================================================================
// Math
// ============================================================================

mod math {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_common_formulas() {
        let cases = [
            (r"\frac{a+b}{c}", "(a+b)/c"),
            (r"\mathcal{A}", "𝒜"),
            (r"\mathbb{R}", "ℝ"),
            (r"\sum_{i=1}^n", "∑ᵢ₌₁ⁿ"),
            (r"\alpha^2", "α²"),
        ];
        for (formula, expected) in cases {
            assert_eq!(render_math(formula), expected, "formula: {}", formula);
        }
    }

    #[test]
    fn test_broken_fraction_reported() {
        let sink = CollectingSink::new();
        let out = render_math_with_sink(r"\frac", &sink);
        assert_eq!(out, r"\frac");
        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, DiagnosticLevel::Warning);
    }

    #[test]
    fn test_deep_nesting() {
        let formula = "{".repeat(50) + "x" + &"}".repeat(50);
        assert_eq!(render_math(&formula), "x");
    }
}

// ============================================================================
// Scripts
// ============================================================================

mod scripts {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fallback_notation() {
        assert_eq!(to_superscript("n+1"), "ⁿ⁺¹");
        assert_eq!(to_superscript("ΣΣ"), "^(ΣΣ)");
        assert_eq!(to_subscript("xy"), "_(xy)");
        assert_eq!(to_chem("H2O"), "H₂O");
        assert_eq!(clean_value("<chem>H½</chem>"), "H½");
    }
}

// ============================================================================
// Namespaces and Template Arguments
// ============================================================================

mod configuration {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_programmatic_namespaces() {
        let cleaner = Cleaner::new(NamespaceConfig::new(["Datei", "Bild"], ["Kategorie"]));
        let out = cleaner.clean(
            "Hund [[Bild:Hund.jpg|mini|Ein Hund]] [[Kategorie:Tiere]]",
            CleanOptions::default(),
        );
        assert_eq!(out, "Hund");
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_namespaces_from_json() {
        let json = r#"{
            "File": {"id": 6, "name": "Fichier", "aliases": ["Image"]},
            "Category": {"id": 14, "name": "Catégorie", "aliases": []}
        }"#;
        let config = NamespaceConfig::from_json(json).unwrap();
        let cleaner = Cleaner::new(config);
        assert_eq!(
            cleaner.clean("chat [[Catégorie:Mammifères]]", CleanOptions::default()),
            "chat"
        );
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_namespaces_json_errors() {
        use wikiclean::CleanError;

        let missing = NamespaceConfig::from_json(r#"{"File": {"name": "Datei"}}"#);
        assert!(matches!(missing, Err(CleanError::MissingNamespace { .. })));

        let invalid = NamespaceConfig::from_json("not json");
        assert!(matches!(invalid, Err(CleanError::InvalidConfig { .. })));
    }

    #[test]
    fn test_template_args_keep_order() {
        let mut args = indexmap::IndexMap::new();
        args.insert("1".to_string(), "[[cat|cats]]".to_string());
        args.insert("tr".to_string(), "''kot''".to_string());
        args.insert("g".to_string(), "<span>m</span>".to_string());

        let out = clean_template_args(&args, false);
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["1", "tr", "g"]);
        assert_eq!(out["1"], "cats");
        assert_eq!(out["tr"], "kot");
        assert_eq!(out["g"], "m");
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

mod edge_cases {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_value(""), "");
        assert_eq!(render_math(""), "");
        assert_eq!(strip_emphasis(""), "");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "[[foo|bar]] and [[baz]]",
            "''x'' &amp; '''y'''",
            "H<sub>2</sub>O <math>x^2</math>",
            "{|\n|cell\n|}\ntext",
        ];
        for input in inputs {
            let once = clean_value(input);
            assert_eq!(clean_value(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_unbalanced_constructs_terminate() {
        let inputs = [
            "{|".repeat(1_000),
            "|}".repeat(1_000),
            "[[".repeat(1_000),
            "[[a|".repeat(500) + &"]]".repeat(250),
            "<div style=\"float:right\">".repeat(200) + "x",
            "<math>".to_string() + &"{".repeat(500) + "</math>",
        ];
        for input in &inputs {
            let _ = clean_value(input);
        }
    }

    #[test]
    fn test_shared_cleaner_across_threads() {
        let cleaner = Cleaner::default();
        std::thread::scope(|scope| {
            for i in 0..4 {
                let cleaner = &cleaner;
                scope.spawn(move || {
                    let input = format!("[[page{}|label{}]]", i, i);
                    assert_eq!(
                        cleaner.clean(&input, CleanOptions::default()),
                        format!("label{}", i)
                    );
                });
            }
        });
    }
}
