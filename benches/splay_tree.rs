use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use splay_collections::splay_tree::SplayTree;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100;

fn random_pairs() -> Vec<(u32, u32)> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| (rng.next_u32(), rng.next_u32())).collect()
}

fn bench_btreemap_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench btreemap insert", move |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &(key, value) in &pairs {
                map.insert(key, value);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let pairs = random_pairs();
    let map: BTreeMap<u32, u32> = pairs.iter().cloned().collect();

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_splay_tree_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench splay_tree insert", move |b| {
        b.iter(|| {
            let mut tree = SplayTree::new();
            for &(key, value) in &pairs {
                tree.insert(key, value);
            }
        })
    });
}

fn bench_splay_tree_find(c: &mut Criterion) {
    let pairs = random_pairs();
    let mut tree: SplayTree<u32, u32> = pairs.iter().cloned().collect();

    c.bench_function("bench splay_tree find", move |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(tree.find(key));
            }
        })
    });
}

// repeatedly touching a small working set is where splaying pays off
fn bench_splay_tree_find_hot(c: &mut Criterion) {
    let pairs = random_pairs();
    let mut tree: SplayTree<u32, u32> = pairs.iter().cloned().collect();
    let hot: Vec<u32> = pairs.iter().take(4).map(|&(key, _)| key).collect();

    c.bench_function("bench splay_tree find hot keys", move |b| {
        b.iter(|| {
            for _ in 0..NUM_OF_OPERATIONS / hot.len() {
                for key in &hot {
                    black_box(tree.find(key));
                }
            }
        })
    });
}

fn bench_splay_tree_delete(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench splay_tree delete", move |b| {
        b.iter(|| {
            let mut tree: SplayTree<u32, u32> = pairs.iter().cloned().collect();
            for (key, _) in &pairs {
                black_box(tree.delete(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreemap_get,
    bench_btreemap_insert,
    bench_splay_tree_insert,
    bench_splay_tree_find,
    bench_splay_tree_find_hot,
    bench_splay_tree_delete,
);
criterion_main!(benches);
