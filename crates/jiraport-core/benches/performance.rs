// Rust guideline compliant 2026-10-15

use chrono::{DateTime, FixedOffset};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jiraport_core::fields::{SPRINT, STORY_POINTS};
use jiraport_core::sanitize::html_to_text;
use jiraport_core::{
    convert, ConversionContext, CustomFields, SourceComment, SourceItem, UserMap, UserMapping,
};

fn build_context() -> ConversionContext {
    let users = (0..50)
        .map(|i| UserMapping {
            jira_username: format!("user{}", i),
            ch_id: format!("ch-{}", i),
            ch_project_id: 0,
        })
        .collect();
    let users = UserMap::new(users).expect("Failed to build user map");
    let now = DateTime::<FixedOffset>::parse_from_rfc3339("2024-06-01T12:00:00+00:00")
        .expect("valid timestamp");
    ConversionContext::new(users, "user0", "group", "https://jira/browse/", "jira-", now)
        .expect("Failed to build context")
}

fn build_items(count: usize) -> Vec<SourceItem> {
    let mut items = Vec::with_capacity(count * 2);
    for i in 0..count {
        let custom_fields: CustomFields = [
            (STORY_POINTS, vec![format!("{}.5", i % 8)]),
            (SPRINT, vec!["Sprint 1".to_string(), "Sprint 2".to_string()]),
        ]
        .into_iter()
        .collect();
        items.push(SourceItem {
            key: format!("PROJ-{}", i),
            issue_type: if i % 3 == 0 { "Bug" } else { "Story" }.to_string(),
            summary: format!("Story {}", i),
            description: "<p>Some <b>rich</b> text &amp; more</p>".to_string(),
            status: "In Progress".to_string(),
            assignee: format!("user{}", i % 60),
            reporter: format!("user{}", i % 50),
            labels: vec!["Backend".to_string()],
            components: vec!["Core".to_string()],
            custom_fields,
            comments: vec![SourceComment {
                author: format!("user{}", i % 70),
                created: "Thu, 5 Mar 2020 10:11:12 -0500".to_string(),
                body: "<p>Comment</p>".to_string(),
                ..SourceComment::default()
            }],
            created: "Thu, 5 Mar 2020 10:11:12 -0500".to_string(),
            updated: "Thu, 5 Mar 2020 10:11:12 -0500".to_string(),
            resolved: "Thu, 5 Mar 2020 10:11:12 -0500".to_string(),
            ..SourceItem::default()
        });
        items.push(SourceItem {
            key: format!("PROJ-SUB{}", i),
            issue_type: "Sub-task".to_string(),
            summary: format!("Sub-task {}", i),
            parent: Some(format!("PROJ-{}", i)),
            ..SourceItem::default()
        });
    }
    items
}

fn bench_convert(c: &mut Criterion) {
    let ctx = build_context();
    let items = build_items(1000);
    c.bench_function("convert_1000", |b| {
        b.iter(|| black_box(convert(&items, &ctx)))
    });
}

fn bench_sanitize(c: &mut Criterion) {
    let html = "<p>First paragraph with <a href=\"x\">a link</a> &amp; entities &#8220;quoted&#8221;</p>"
        .repeat(50);
    c.bench_function("html_to_text", |b| b.iter(|| black_box(html_to_text(&html))));
}

criterion_group!(benches, bench_convert, bench_sanitize);
criterion_main!(benches);
