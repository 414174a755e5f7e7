use commitgen::{CommitGen, attribute_changes, attribute_changes_parallel};
use divan::{Bencher, black_box};
use gumleaf::{Classification, ClassificationMap, NodeData, Side, SyntaxTree, Tree};

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[10, 100, 1000];

/// A class with `methods` methods of 8 statements each, every statement
/// holding a small expression.
fn synthetic_class(methods: usize) -> Tree {
    let mut tree = Tree::new(NodeData::new("CompilationUnit"));
    tree.add_child(tree.root, NodeData::labeled("PackageDeclaration", "bench"));
    let ty = tree.add_child(tree.root, NodeData::new("TypeDeclaration"));
    tree.add_child(ty, NodeData::labeled("SimpleName", "Synthetic"));

    for m in 0..methods {
        let method = tree.add_child(ty, NodeData::new("MethodDeclaration"));
        tree.add_child(method, NodeData::new("Javadoc"));
        tree.add_child(method, NodeData::labeled("SimpleName", format!("method{m}")));
        let block = tree.add_child(method, NodeData::new("Block"));
        for s in 0..8 {
            let stmt = tree.add_child(block, NodeData::new("ExpressionStatement"));
            let call = tree.add_child(stmt, NodeData::new("MethodInvocation"));
            tree.add_child(call, NodeData::labeled("SimpleName", format!("call{s}")));
            tree.add_child(call, NodeData::labeled("NumberLiteral", s.to_string()));
        }
    }
    tree
}

/// Classify roughly one statement in seven on each side.
fn classify(src: &Tree, dst: &Tree) -> ClassificationMap {
    let mut classes = ClassificationMap::new();
    let statements = |tree: &Tree| -> Vec<_> {
        tree.pre_order()
            .filter(|&n| tree.kind(n) == "ExpressionStatement")
            .collect()
    };
    for (i, node) in statements(src).into_iter().enumerate() {
        if i % 7 == 0 {
            classes.set(Side::Source, node, Classification::DeletedFromSource);
        }
    }
    for (i, node) in statements(dst).into_iter().enumerate() {
        match i % 7 {
            3 => classes.set(Side::Destination, node, Classification::InsertedIntoDestination),
            5 => classes.set(Side::Destination, node, Classification::UpdatedInDestination),
            _ => {}
        }
    }
    classes
}

#[divan::bench(args = SIZES)]
fn sequential(bencher: Bencher, methods: usize) {
    let src = synthetic_class(methods);
    let dst = synthetic_class(methods);
    let classes = classify(&src, &dst);
    bencher.bench_local(|| {
        let changes = attribute_changes(black_box(&src), black_box(&dst), &classes);
        black_box(changes);
    });
}

#[divan::bench(args = SIZES)]
fn parallel(bencher: Bencher, methods: usize) {
    let src = synthetic_class(methods);
    let dst = synthetic_class(methods);
    let classes = classify(&src, &dst);
    bencher.bench_local(|| {
        let changes = attribute_changes_parallel(black_box(&src), black_box(&dst), &classes);
        black_box(changes);
    });
}

// Nothing classified: the walk visits every non-documentation node.
#[divan::bench(args = SIZES)]
fn full_walk(bencher: Bencher, methods: usize) {
    let src = synthetic_class(methods);
    let dst = synthetic_class(methods);
    let classes = ClassificationMap::new();
    let generator = CommitGen::new();
    bencher.bench_local(|| {
        let report = generator.run(black_box(&src), black_box(&dst), &classes);
        black_box(report);
    });
}

// Dump parsing is how fixtures get in; keep an eye on it too.
#[divan::bench(args = SIZES)]
fn dump_roundtrip(bencher: Bencher, methods: usize) {
    let dump = synthetic_class(methods).to_dump();
    bencher.bench_local(|| {
        let tree = Tree::from_dump(black_box(&dump)).unwrap();
        black_box(tree.node_count());
    });
}
