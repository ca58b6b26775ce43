//! Integration test: the built-in table end-to-end via `Checker`.

use write_guard_rules::{default_checker, Checker, Config};

fn checker() -> Checker {
    default_checker(Config::default())
}

fn codes(path: &str, content: &str) -> Vec<String> {
    checker()
        .check(path, content)
        .violations
        .into_iter()
        .map(|v| v.code)
        .collect()
}

const DIRECT_QUERY: &str = "const { data } = await supabase.from('users').select()";

#[test]
fn markdown_is_never_checked() {
    assert!(codes("docs/actions/database.types.md", DIRECT_QUERY).is_empty());
}

#[test]
fn direct_query_in_action_reports_line_and_text() {
    let result = checker().check(
        "app/actions/foo.actions.ts",
        &format!("'use server'\n\n{DIRECT_QUERY}\n"),
    );
    assert_eq!(result.violations.len(), 1);
    let text = result.violations[0].describe();
    assert!(text.starts_with("Line 3: "));
    assert!(text.contains(DIRECT_QUERY));
}

#[test]
fn repository_path_suppresses_direct_query() {
    assert!(codes("app/actions/repository/foo.actions.ts", DIRECT_QUERY).is_empty());
}

#[test]
fn column_picking_in_repository() {
    let path = "lib/user.repository.ts";
    assert_eq!(codes(path, ".select('id, name')"), vec!["WG003"]);
    assert!(codes(path, ".select('*')").is_empty());
    assert!(codes(path, ".select(`*, profiles(*)`)").is_empty());
}

#[test]
fn raw_button_in_component() {
    let result = checker().check("components/Card.tsx", "<button onClick={() => go()}>");
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0]
        .describe()
        .contains("<Button> from @/components/ui/button"));
}

#[test]
fn generated_types_always_protected() {
    assert_eq!(codes("src/lib/database.types.ts", "export {}"), vec!["WG006"]);
}

#[test]
fn violations_follow_rule_order() {
    let content = "\
await supabase.from('posts').delete().eq('id', id)
await supabase.from('posts').insert(post)";
    assert_eq!(
        codes("app/actions/posts.actions.ts", content),
        vec!["WG001", "WG001", "WG002"]
    );
}

#[test]
fn component_rules_accumulate() {
    let content = r#"<div className="bg-gray-100">
  <input className="text-red-600" />
</div>"#;
    let result = checker().check("app/components/Form.tsx", content);
    let summary: Vec<(String, usize)> = result
        .violations
        .iter()
        .map(|v| (v.code.clone(), v.location.line))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("WG004".to_string(), 1),
            ("WG004".to_string(), 2),
            ("WG005".to_string(), 2),
        ]
    );
}

#[test]
fn compact_rendering() {
    let result = checker().check("lib/user.repository.ts", "  .select('id')");
    insta::assert_snapshot!(
        result.violations[0].to_string(),
        @"lib/user.repository.ts:1: [WG003] Column picking detected. Use select('*') instead."
    );
}

#[test]
fn identical_inputs_identical_results() {
    let content = "<button type=\"submit\" className=\"bg-blue-600\">";
    let first = checker().check("components/Submit.tsx", content);
    let second = checker().check("components/Submit.tsx", content);
    assert_eq!(first, second);
}
