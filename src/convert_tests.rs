    use super::*;

    #[test]
    fn test_convert_heading_h1() {
        assert_eq!(markdown_to_html("# Hi"), "<h1>Hi</h1>\n");
    }

    #[test]
    fn test_convert_heading_all_levels() {
        for lvl in 1..=6 {
            let md = format!("{} Level {}", "#".repeat(lvl), lvl);
            assert_eq!(
                markdown_to_html(&md),
                format!("<h{lvl}>Level {lvl}</h{lvl}>\n"),
                "level {lvl}"
            );
        }
    }

    #[test]
    fn test_convert_paragraph_with_inline_styles() {
        let html = markdown_to_html("Some **bold**, *italic* and `code`.");
        assert_eq!(
            html,
            "<p>Some <strong>bold</strong>, <em>italic</em> and <code>code</code>.</p>\n"
        );
    }

    #[test]
    fn test_convert_empty_input_is_empty_output() {
        assert_eq!(markdown_to_html(""), "");
    }

    #[test]
    fn test_convert_link() {
        assert_eq!(
            markdown_to_html("[docs](https://example.com)"),
            "<p><a href=\"https://example.com\">docs</a></p>\n"
        );
    }

    #[test]
    fn test_convert_fenced_code_block_escapes_html() {
        let html = markdown_to_html("```rust\nlet x = a < b;\n```\n");
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">let x = a &lt; b;\n</code></pre>\n"
        );
    }

    #[test]
    fn test_convert_tables_not_enabled() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(!html.contains("<table>"), "got {html}");
        assert!(html.starts_with("<p>"));
    }

    #[test]
    fn test_convert_strikethrough_not_enabled() {
        let html = markdown_to_html("~~gone~~");
        assert!(!html.contains("<del>"), "got {html}");
    }

    #[test]
    fn test_convert_raw_html_passes_through() {
        let html = markdown_to_html("<div class=\"note\">hi</div>\n");
        assert_eq!(html, "<div class=\"note\">hi</div>\n");
    }

    #[test]
    fn test_convert_is_deterministic() {
        let md = "# Title\n\n- one\n- two\n\n> quote\n";
        assert_eq!(markdown_to_html(md), markdown_to_html(md));
    }
