use policy_foreach::{
    generate_sequences, partition_sweep, policy_comparison, sequential_baseline, Config,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let config = Config::default();
    let mut rng = StdRng::from_entropy();
    let sequences = generate_sequences(&config, &mut rng);

    sequential_baseline(&sequences);
    policy_comparison(&sequences);
    let best = partition_sweep(&sequences, &config);

    println!("{}", "-".repeat(35));
    println!(
        "Best worker count = {} (avg time = {:.4} ms)",
        best.best_workers, best.best_avg_ms
    );
    println!("Hardware threads : {}", num_cpus::get());
}
