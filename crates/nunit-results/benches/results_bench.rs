// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nunit_results::{parse_test_run, parse_utp, sanitize_log};

/// Build a result document with `fixtures` fixtures of `cases` cases each
fn synthetic_run(fixtures: usize, cases: usize) -> String {
    let mut xml = String::from(r#"<test-run result="Passed"><test-suite name="root">"#);
    for f in 0..fixtures {
        xml.push_str(&format!(
            r#"<test-suite type="TestFixture" name="Fixture{f}">"#
        ));
        for c in 0..cases {
            xml.push_str(&format!(
                r#"<test-case fullname="Fixture{f}.Case{c}" result="Passed" duration="0.01"><output><![CDATA[line one
##utp:{{"type":"TestStatus","phase":"End","state":4}}
]]></output></test-case>"#
            ));
        }
        xml.push_str("</test-suite>");
    }
    xml.push_str("</test-suite></test-run>");
    xml
}

fn results_benchmark(c: &mut Criterion) {
    let xml = synthetic_run(20, 50);
    c.bench_function("parse_test_run_1000_cases", |b| {
        b.iter(|| parse_test_run(black_box(&xml)))
    });

    let output = "\x1b[33mwarming up\x1b[0m\n".repeat(50)
        + r#"##utp:{"type":"TestStatus","phase":"End","state":5,"fileName":"Tests/Foo.cs","lineNumber":42,"message":"boom"}"#;
    c.bench_function("parse_utp", |b| b.iter(|| parse_utp(black_box(&output))));
    c.bench_function("sanitize_log", |b| {
        b.iter(|| sanitize_log(black_box(&output)))
    });
}

criterion_group!(benches, results_benchmark);
criterion_main!(benches);
