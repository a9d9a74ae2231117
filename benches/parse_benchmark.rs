//! Benchmarks for wordparser extraction performance.
//!
//! Run with: cargo bench
//!
//! Each accessor re-reads and re-parses its part, so these measure the full
//! read + parse + walk path at various document sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;
use wordparser::DocumentReader;

/// Creates a synthetic DOCX with the given number of paragraphs, plus one
/// table after every tenth paragraph.
fn create_test_docx(paragraph_count: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>"#,
    );

    for i in 0..paragraph_count {
        content.push_str(&format!(
            r#"
    <w:p>
      <w:r>
        <w:t>This is paragraph {} with some test content for benchmarking purposes.</w:t>
      </w:r>
    </w:p>"#,
            i
        ));
        if i % 10 == 9 {
            content.push_str(
                r#"
    <w:tbl>
      <w:tr><w:tc><w:p><w:r><w:t>Name</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>Value</w:t></w:r></w:p></w:tc></w:tr>
      <w:tr><w:tc><w:p><w:r><w:t>alpha</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>1</w:t></w:r></w:p></w:tc></w:tr>
    </w:tbl>"#,
            );
        }
    }

    content.push_str(
        r#"
  </w:body>
</w:document>"#,
    );

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();

    zip.start_file("docProps/core.xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <dc:title>Benchmark</dc:title>
  <dc:creator>bench</dc:creator>
</cp:coreProperties>"#,
    )
    .unwrap();

    zip.finish().unwrap();
    buffer
}

/// Benchmark plain text extraction.
fn bench_text_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_extraction");

    for para_count in [10, 100, 500, 1000].iter() {
        let data = create_test_docx(*para_count);
        let reader = DocumentReader::from_bytes(data.clone()).unwrap();

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &reader,
            |b, reader| {
                b.iter(|| {
                    let _ = black_box(reader).get_text();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark table extraction.
fn bench_table_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_extraction");

    for para_count in [10, 100, 500, 1000].iter() {
        let reader = DocumentReader::from_bytes(create_test_docx(*para_count)).unwrap();

        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &reader,
            |b, reader| {
                b.iter(|| {
                    let _ = black_box(reader).get_tables();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark opening a package and reading its metadata.
fn bench_open_and_properties(c: &mut Criterion) {
    let data = create_test_docx(100);

    c.bench_function("open_and_properties", |b| {
        b.iter(|| {
            let reader = DocumentReader::from_bytes(black_box(data.clone())).unwrap();
            let _ = reader.get_core_properties();
        });
    });
}

criterion_group!(
    benches,
    bench_text_extraction,
    bench_table_extraction,
    bench_open_and_properties,
);
criterion_main!(benches);
