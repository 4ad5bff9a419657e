use criterion::{black_box, criterion_group, criterion_main, Criterion};

use labelkit_designer::model::{Element, ElementKind, TextElement, Transform};
use labelkit_designer::overrides::{ElementPatch, LabelOverride};
use labelkit_designer::{resolve, MasterLabel};

fn populated_master(elements: usize) -> MasterLabel {
    let mut master = MasterLabel::new();
    for i in 0..elements {
        master
            .add(Element::new(
                ElementKind::Text(TextElement::new(format!("line {i}"))),
                Transform::new(0.0, i as f64 * 5.0, 60.0, 4.0),
            ))
            .unwrap();
    }
    master
}

fn bench_resolve(c: &mut Criterion) {
    let master = populated_master(100);

    let mut ovr = LabelOverride::new();
    for element in master.elements().iter().step_by(3) {
        ovr.set_patch(
            element.id,
            ElementPatch::with_transform(Transform::new(1.0, 1.0, 50.0, 4.0)),
        );
    }
    for element in master.elements().iter().step_by(7) {
        ovr.hide(element.id);
    }

    c.bench_function("resolve_pure_master_100", |b| {
        b.iter(|| resolve(black_box(&master), None))
    });

    c.bench_function("resolve_with_override_100", |b| {
        b.iter(|| resolve(black_box(&master), black_box(Some(&ovr))))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
