//! Trains a 2 -> 16 -> 16 -> 1 perceptron on 100 noisy two-moons samples.
//!
//! Run with `RUST_LOG=info` to see the per-epoch loss and accuracy.

use neuragrad_core::nn::{Mlp, Module};
use neuragrad_core::train::{TrainConfig, Trainer};
use neuragrad_core::Graph;
use neuragrad_data::make_moons;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = rand::thread_rng();
    let moons = make_moons(100, 0.1, &mut rng);

    let mut graph = Graph::new();
    let model = Mlp::new(&mut graph, 2, &[16, 16, 1], &mut rng)?;
    println!(
        "Model: {} parameters over {} layers",
        model.parameters().len(),
        model.layers().len()
    );

    let trainer = Trainer::new(TrainConfig::default());
    let reports = trainer.fit(&mut graph, &model, &moons.features, &moons.labels)?;

    if let (Some(first), Some(last)) = (reports.first(), reports.last()) {
        println!(
            "Epoch {}: loss {:.4}, accuracy {:.2}  ->  epoch {}: loss {:.4}, accuracy {:.2}",
            first.epoch, first.loss, first.accuracy, last.epoch, last.loss, last.accuracy
        );
    }
    Ok(())
}
