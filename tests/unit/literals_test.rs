//! Unit tests for literal protection

use cstrip::clean::{check_comment_balance, protect, remove_block_comments, restore};

#[test]
fn test_protected_text_hides_literal_comment_markers() {
    let source = r#"a = "/*"; b = '*'; c = "*/";"#;
    let (protected, map) = protect(source).unwrap();
    assert_eq!(map.len(), 3);
    assert!(check_comment_balance(&protected).is_empty());
    assert_eq!(restore(&protected, &map), source);
}

#[test]
fn test_placeholders_survive_comment_removal_intact() {
    let source = "/* \"gone\" */ keep(\"kept\");";
    let (protected, map) = protect(source).unwrap();
    let stripped = remove_block_comments(&protected);
    assert_eq!(restore(&stripped, &map), " keep(\"kept\");");
}

#[test]
fn test_placeholder_ids_follow_appearance_order() {
    let (_, map) = protect(r#"'x' "y" 'z'"#).unwrap();
    let literals: Vec<&str> = map.iter().collect();
    assert_eq!(literals, vec!["'x'", "\"y\"", "'z'"]);
}

#[test]
fn test_source_resembling_old_placeholder_syntax_is_untouched() {
    let source = "int __LIT_0__ = 1; s = \"v\";";
    let (protected, map) = protect(source).unwrap();
    assert!(protected.starts_with("int __LIT_0__ = 1;"));
    assert_eq!(restore(&protected, &map), source);
}
