use super::*;
use crate::parser::{SyntaxElement, SyntaxKind, parse};

#[test]
fn test_name_splits_on_spaces() {
    let node = TreeNode::name(Rule::ClassName, "Bank Teller");
    let children = node.children();
    let rules: Vec<_> = children.iter().map(ParseTree::rule).collect();
    assert_eq!(rules, vec![Rule::Word, Rule::Delimiter, Rule::Word]);
    assert_eq!(node.text(), "Bank Teller");
}

#[test]
fn test_node_text_comes_from_children() {
    let node = TreeNode::node(Rule::Rname, [TreeNode::leaf(Rule::Rnum, "R1")])
        .with(TreeNode::leaf(Rule::Nl, "\n"));
    assert_eq!(node.text(), "R1\n");
    assert_eq!(TreeNode::wrap(Rule::Keyletter, Rule::Acword, "B").text(), "B");
}

#[test]
fn test_rule_from_syntax_kind() {
    assert_eq!(Rule::from(SyntaxKind::CLASS_KW), Rule::Keyword);
    assert_eq!(Rule::from(SyntaxKind::COMMA), Rule::Punct);
    assert_eq!(Rule::from(SyntaxKind::NUMBER), Rule::Word);
    assert_eq!(Rule::from(SyntaxKind::T_SIDE), Rule::TSide);
    assert_eq!(Rule::from(SyntaxKind::ERROR), Rule::Error);
    assert!(Rule::Sp.is_silent());
    assert!(!Rule::Delimiter.is_silent());
}

#[test]
fn test_rule_path_display() {
    let path = RulePath(vec![Rule::Subsystem, Rule::RelSection, Rule::Rel, Rule::GenRel]);
    assert_eq!(path.to_string(), "subsystem > rel_section > rel > gen_rel");
    assert_eq!(path.last(), Some(Rule::GenRel));
    assert_eq!(RulePath::default().to_string(), "");
}

#[test]
fn test_cst_view() {
    let parse = parse("domain Lifts\nsubsystem Cabin Control, CC\n");
    let root = SyntaxElement::Node(parse.syntax());
    assert_eq!(root.rule(), Rule::Subsystem);

    let header = root
        .children()
        .into_iter()
        .find(|c| c.rule() == Rule::SubsystemHeader)
        .unwrap();
    let name = header
        .children()
        .into_iter()
        .find(|c| c.rule() == Rule::SubsystemName)
        .unwrap();
    assert_eq!(name.text(), "Cabin Control");

    let fragments: Vec<_> = name.children().iter().map(ParseTree::rule).collect();
    assert_eq!(fragments, vec![Rule::Word, Rule::Delimiter, Rule::Word]);
}
