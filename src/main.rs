use anyhow::Result;
use indexed_graph::graph::{
    AutoIndexedGraph, GraphRead, GraphWrite, IndexLookup, IndexedGraph, Incremental, KeyComparer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Indexed Graph v{}", indexed_graph::version());
    println!("==========================================");
    println!();

    demo_indexed_graph()?;
    demo_comparer()?;
    demo_conversions()?;

    Ok(())
}

fn demo_indexed_graph() -> Result<()> {
    println!("=== Demo 1: Indexed Graph ===");
    let mut graph: IndexedGraph<String, u32, &str> = IndexedGraph::new();

    for (name, age) in [("alice", 30), ("bob", 25), ("charlie", 35)] {
        graph.add_node(name.to_string(), age)?;
        println!("✓ Added {} (age {})", name, age);
    }

    graph.add_edge(&"alice".to_string(), &"bob".to_string(), "KNOWS")?;
    graph.add_edge(&"bob".to_string(), &"charlie".to_string(), "KNOWS")?;
    graph.add_edge(&"charlie".to_string(), &"alice".to_string(), "FOLLOWS")?;
    println!("✓ Order {}, size {}", graph.order(), graph.size());

    let bob = graph.get_node(&"bob".to_string())?;
    bob.update_data(|age| *age += 1)?;
    println!("✓ Bob is now {}", bob.data());

    graph.remove_node(&"bob".to_string());
    info!(order = graph.order(), size = graph.size(), "removed bob");
    println!(
        "✓ Removed bob: order {}, size {}, handle valid: {}",
        graph.order(),
        graph.size(),
        bob.is_valid()
    );
    println!("  Stale handle still reads age {}", bob.data());
    if let Err(e) = bob.set_data(99) {
        println!("  Writing to it fails: {}", e);
    }
    println!();
    Ok(())
}

fn demo_comparer() -> Result<()> {
    println!("=== Demo 2: Case-insensitive indices ===");
    let mut graph: IndexedGraph<String, &str, ()> =
        IndexedGraph::with_comparer(KeyComparer::new(|name: &String| name.to_lowercase()));

    graph.add_node("Alice".to_string(), "first")?;
    match graph.add_node("ALICE".to_string(), "second") {
        Ok(_) => println!("✗ Unexpectedly accepted ALICE"),
        Err(e) => println!("✓ Rejected ALICE: {}", e),
    }
    let found = graph.get_node(&"alice".to_string())?;
    println!("✓ Lookup of 'alice' finds {:?}", found.index()?);
    println!();
    Ok(())
}

fn demo_conversions() -> Result<()> {
    println!("=== Demo 3: Auto indexing and conversions ===");
    let mut graph = AutoIndexedGraph::new(Incremental::sequential(100));
    let a = graph.add_node("a")?;
    let b = graph.add_node("b")?;
    graph.connect(&a, &b, 1.5)?;
    println!("✓ Assigned indices {:?} and {:?}", a.index()?, b.index()?);

    let copy = graph.clone_with(|d| *d, |w| w * 2.0);
    println!(
        "✓ Clone has {} nodes, weight {}",
        copy.order(),
        copy.edges()[0].data()
    );

    let mut unindexed = graph.to_unindexed();
    let c = unindexed.add_node("c");
    println!(
        "✓ Unindexed copy: order {}, new node '{}'",
        unindexed.order(),
        c.data()
    );
    let cleared = unindexed.remove_nodes_where(|d| *d != "c");
    info!(cleared, remaining = unindexed.order(), "pruned unindexed copy");
    println!("✓ Pruned {} nodes, {} left", cleared, unindexed.order());

    Ok(())
}
