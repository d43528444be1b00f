use criterion::{criterion_group, criterion_main, Criterion};

use outboxshell::convert::html_to_markup;
use outboxshell::model::blob::FileBlob;
use outboxshell::model::composition::Composition;
use outboxshell::submit::Payload;

/// A body of realistic size: headings, emphasis, links and lists.
fn sample_body() -> String {
    let mut html = String::from("<h1>Status update</h1>");
    for i in 0..50 {
        html.push_str(&format!(
            "<p>Item {i}: a <strong>bold</strong> claim with an \
             <em>aside</em> and a <a href=\"https://example.com/{i}\">link</a>.</p>"
        ));
    }
    html.push_str("<ul><li>first</li><li>second</li><li>third</li></ul>");
    html
}

fn bench_html_conversion(c: &mut Criterion) {
    let body = sample_body();

    c.bench_function("html_to_markup_50_paragraphs", |b| {
        b.iter(|| html_to_markup(&body))
    });
}

fn bench_payload_snapshot(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let mut composition = Composition::new(dir.path().to_path_buf());
    composition.subject = "Status update".to_string();
    composition.recipients = "a@x.com,b@x.com,c@x.com".to_string();
    composition.body_html = sample_body();
    composition.attachments.append(
        (0..5)
            .map(|i| FileBlob::new(format!("file{i}.bin"), "application/octet-stream", vec![0u8; 64 * 1024]))
            .collect(),
    );

    c.bench_function("payload_snapshot_5_attachments", |b| {
        b.iter(|| Payload::snapshot(&composition))
    });
}

criterion_group!(benches, bench_html_conversion, bench_payload_snapshot);
criterion_main!(benches);
