use std::time::{Duration, Instant};

use rbfopt::{
    dataset, distance,
    rbf::{Bias, Network, Node, Unit},
    training::{
        self, Algorithm, RandomGreedy, StopAtDeadline, StopWhenErrorBelow, Trainee,
    },
};

fn main() -> rbfopt::Result<()> {
    let mut rng = rand::thread_rng();
    let samples = dataset::xor();

    let mut units: Vec<Box<dyn Unit>> = Vec::new();
    for _ in 0..5 {
        units.push(Box::new(Node::uniform(&mut rng, 2, 1)));
    }
    units.push(Box::new(Bias::new(1)));
    let mut network = Network::new(units)?;

    let mut algorithm = RandomGreedy::new(network.memory(), rng);
    let start = Instant::now();
    let iterations = training::complete(
        &mut network,
        &samples,
        &mut algorithm,
        distance::euclidean,
        &[
            &StopWhenErrorBelow(0.1),
            &StopAtDeadline::after(Duration::from_secs(30)),
        ],
    )?;
    if let Some(best) = algorithm.best_memory() {
        network.set_memory(best)?;
    }

    println!("Time: {:?}", start.elapsed());
    println!("Iterations: {}", iterations);
    println!("Output error: {}", algorithm.best_error());
    println!("{}", network);
    for sample in &samples {
        let actual = network.calculate(&sample.input)?;
        println!(
            "input: {:?}, expected: {:?}, actual: {:?}",
            sample.input, sample.expected, actual
        );
    }
    Ok(())
}
