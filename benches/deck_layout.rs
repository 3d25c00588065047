//! Deck composition and PDF serialization benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use deckline::{Campaign, GeneratorConfig, IcpDeckGenerator};
use serde_json::json;
use std::hint::black_box;

fn campaign(icps: usize) -> Campaign {
    let records: Vec<_> = (1..=icps)
        .map(|i| {
            json!({
                "icp_number": i,
                "title": format!("Segment {i}: mid-market security teams"),
                "industries": ["Financial Services", "Healthcare"],
                "departments_and_functions": "Security Operations, IT Infrastructure, Risk",
                "key_roles": ["CISO", "SOC Manager", "Director of IT", "Security Architect",
                              "Threat Intel Lead", "CIO", "Compliance Officer"],
                "technographic_fit": {
                    "displacement_signals": [
                        { "pain_explanation": "Legacy SIEM with rising ingest costs",
                          "vendor_products": ["IBM QRadar"] },
                        { "pain_explanation": "On-prem log retention limits",
                          "vendor_products": ["Splunk"] }
                    ],
                    "expansion_signals": [
                        { "readiness_explanation": "Cloud migration underway",
                          "vendor_products": ["AWS Security Hub"] }
                    ]
                }
            })
        })
        .collect();
    serde_json::from_value(json!({
        "customer_name": "Acme",
        "solution_name": "Widgets",
        "icps": records
    }))
    .expect("benchmark campaign is valid")
}

fn bench_compose(c: &mut Criterion) {
    let generator = IcpDeckGenerator::new(GeneratorConfig::default().without_logo());
    let mut group = c.benchmark_group("compose_deck");
    for icps in [2, 10, 50] {
        let campaign = campaign(icps);
        group.bench_with_input(BenchmarkId::from_parameter(icps), &campaign, |b, campaign| {
            b.iter(|| black_box(generator.build_deck(campaign)))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let generator = IcpDeckGenerator::new(GeneratorConfig::default().without_logo());
    let mut group = c.benchmark_group("render_pdf");
    for icps in [2, 10] {
        let deck = generator.build_deck(&campaign(icps));
        group.bench_with_input(BenchmarkId::from_parameter(icps), &deck, |b, deck| {
            b.iter(|| black_box(deck.to_pdf_bytes().expect("render succeeds")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose, bench_render);
criterion_main!(benches);
