use nearthree::SpatialIndex;
use rand::Rng;

struct Entity {
    id: u32,
    name: String,
    position: [f64; 3],
}

fn main() {
    // RUST_LOG=debug shows the build summary
    env_logger::init();

    let mut rng = rand::thread_rng();
    let entities: Vec<Entity> = (0..100_000)
        .map(|i| Entity {
            id: i,
            name: format!("entity-{i}"),
            position: [rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)],
        })
        .collect();

    let index = SpatialIndex::from_items(&entities, |e| (e.id, e.position));

    let selected = &entities[rng.gen_range(0..entities.len())];
    println!("Nearest to {} at {:?}:", selected.name, selected.position);
    for n in index.k_nearest(selected.position, 5, Some(&selected.id)) {
        println!("  {:>14}  {:.3}", n.payload.name, n.distance);
    }
}
