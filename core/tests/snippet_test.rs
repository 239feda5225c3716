// Tests for snippet and preview generation

use button_creator_core::*;

const DEFAULT_SNIPPET: &str = r#"<style>
  input[type="radio"] { display: none !important; }
  input + label {
    background-color: #0097f9 !important;
    color: #ffffff !important;
    border: 1px solid #666666 !important;
    border-radius: 5px !important;
    padding: 5px 20px !important;
    font-size: 16px !important;
    line-height: 28px !important;
    width: 100% !important;
    cursor: pointer !important;
    position: relative !important;
    display: block !important;
    margin-left: 0 !important;
  }
  input[type=radio]:checked + label { background-color: #999999 !important; }
  input + label::before { content: none !important; }
</style>
"#;

// ==================== Snippet Tests ====================

#[test]
fn test_default_snippet_golden() {
    assert_eq!(generate_snippet(&StyleConfig::default()), DEFAULT_SNIPPET);
}

#[test]
fn test_each_field_lands_in_its_rule() {
    let config = StyleConfig {
        background_color: "#a00001".to_string(),
        selected_background_color: "#a00002".to_string(),
        text_color: "#a00003".to_string(),
        border_color: "#a00004".to_string(),
        border_width: "101".to_string(),
        border_radius: "102".to_string(),
        padding_top_bottom: "103".to_string(),
        padding_left_right: "104".to_string(),
        font_size: "105".to_string(),
        line_height: "106".to_string(),
    };
    let snippet = generate_snippet(&config);

    let expected_lines = [
        "    background-color: #a00001 !important;",
        "    color: #a00003 !important;",
        "    border: 101px solid #a00004 !important;",
        "    border-radius: 102px !important;",
        "    padding: 103px 104px !important;",
        "    font-size: 105px !important;",
        "    line-height: 106px !important;",
        "  input[type=radio]:checked + label { background-color: #a00002 !important; }",
    ];
    for line in expected_lines {
        assert!(snippet.lines().any(|l| l == line), "missing line: {}", line);
    }

    for (field, value) in config.iter() {
        assert_eq!(snippet.matches(value).count(), 1, "{} should appear once", field);
    }
}

#[test]
fn test_snippet_follows_set_field() {
    let mut config = StyleConfig::default();
    config.set_field(StyleField::BorderRadius, "12");

    let snippet = generate_snippet(&config);
    assert!(snippet.contains("border-radius: 12px !important;"));
    assert!(!snippet.contains("border-radius: 5px"));
}

// ==================== Preview Tests ====================

#[test]
fn test_preview_states_use_distinct_backgrounds() {
    let config = StyleConfig::default();
    let normal = preview_style(&config, PreviewState::Normal);
    let selected = preview_style(&config, PreviewState::Selected);

    assert!(normal.starts_with("background-color: #0097f9;"));
    assert!(selected.starts_with("background-color: #999999;"));
    assert_ne!(normal, selected);
}

#[test]
fn test_preview_style_has_no_important() {
    let style = preview_style(&StyleConfig::default(), PreviewState::Selected);
    assert!(!style.contains("!important"));
    assert!(style.contains("padding: 5px 20px;"));
}
