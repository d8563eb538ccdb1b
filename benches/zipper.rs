use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use kindling::{unfold, unzip, zip, Location, Zippable};

#[derive(Clone, Debug)]
struct Node {
    id: u32,
    children: Option<Vec<Node>>,
}
impl Zippable for Node {
    type Children = Vec<Node>;

    fn children(&self) -> Option<Vec<Node>> {
        self.children.clone()
    }
    fn rebuild(&self, children: Vec<Node>) -> Node {
        Node {
            id: self.id,
            children: Some(children),
        }
    }
}

/// Full tree with the specified branching factor and depth, numbered in pre-order.
fn full_tree(width: u32, depth: u32, next_id: &mut u32) -> Node {
    let id = *next_id;
    *next_id += 1;
    let children = if depth == 0 {
        None
    } else {
        Some(
            (0..width)
                .map(|_| full_tree(width, depth - 1, next_id))
                .collect(),
        )
    };
    Node { id, children }
}

fn wide() -> Node {
    full_tree(1000, 1, &mut 0)
}
fn deep() -> Node {
    full_tree(4, 6, &mut 0)
}

fn last_leaf(location: &Location<Node>) -> Location<Node> {
    let mut location = location.clone();
    while let Ok(child) = location.down() {
        location = child.right_most();
    }
    location
}

fn navigation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("navigation");

    let root = zip(wide());
    group.throughput(Throughput::Elements(1000));
    group.bench_function("wide-sweep", |bencher| {
        bencher.iter(|| black_box(root.down().unwrap().right_most()).source().id);
    });

    let root = zip(deep());
    let path = last_leaf(&root).path();
    group.throughput(Throughput::Elements(path.len() as u64));
    group.bench_function("deep-path", |bencher| {
        bencher.iter(|| root.location(black_box(&path)).unwrap().source().id);
    });
    group.bench_function("deep-pre-order", |bencher| {
        bencher.iter(|| black_box(&root).pre_order().count());
    });

    group.finish();
}

fn edits(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("edits");
    group.throughput(Throughput::Elements(1));

    let middle = zip(wide()).down_at(500).unwrap();
    group.bench_function("wide-insert-up", |bencher| {
        bencher.iter(|| {
            middle
                .insert_right(black_box(vec![Node { id: 0, children: None }]))
                .unwrap()
                .up()
                .unwrap()
                .child_count()
        });
    });

    let leaf = last_leaf(&zip(deep()));
    group.bench_function("deep-replace-root", |bencher| {
        bencher.iter(|| leaf.replace(black_box(Node { id: 0, children: None })).root());
    });

    group.finish();
}

fn whole_tree(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("whole-tree");

    for (name, tree) in vec![("wide", wide()), ("deep", deep())] {
        let root = zip(tree);
        group.bench_function(format!("unfold-{}", name), |bencher| {
            bencher.iter(|| unfold(black_box(&root)));
        });
        group.bench_function(format!("unzip-untouched-{}", name), |bencher| {
            bencher.iter(|| unzip(black_box(&root)));
        });
        group.bench_function(format!("unzip-unfolded-{}", name), |bencher| {
            bencher.iter_batched(
                || unfold(&root),
                |unfolded| unzip(black_box(&unfolded)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, navigation, edits, whole_tree);
criterion_main!(benches);
