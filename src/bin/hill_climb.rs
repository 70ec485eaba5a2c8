use rbfopt::{
    dataset::Sample,
    distance,
    rbf::function::isotropic_gaussian,
    training::{self, Algorithm, HillClimbing, Trainee},
};

/// A point walking over a terrain made of Gaussian hills. Its memory is its position.
struct Walker {
    x: f64,
    y: f64,
}

fn terrain(x: f64, y: f64) -> rbfopt::Result<f64> {
    let hills = [
        isotropic_gaussian(1.0, vec![-0.5, -0.25], 0.25),
        isotropic_gaussian(0.75, vec![0.25, -0.25], 0.5),
        isotropic_gaussian(0.5, vec![-0.25, 0.25], 0.4),
        isotropic_gaussian(0.8, vec![0.5, 0.25], 0.3),
    ];
    let mut z: f64 = 0.0;
    for hill in &hills {
        z = z.max(hill(&[x, y])?);
    }
    Ok(z)
}

impl Trainee for Walker {
    fn calculate(&self, _input: &[f64]) -> rbfopt::Result<Vec<f64>> {
        Ok(vec![terrain(self.x, self.y)?])
    }

    fn memory_size(&self) -> usize {
        2
    }

    fn memory(&self) -> Vec<f64> {
        vec![self.x, self.y]
    }

    fn set_memory(&mut self, memory: &[f64]) -> rbfopt::Result<()> {
        match memory {
            [x, y] => {
                self.x = *x;
                self.y = *y;
                Ok(())
            }
            _ => Err(rbfopt::Error::MemoryLengthMismatch {
                expected: 2,
                actual: memory.len(),
            }),
        }
    }
}

fn main() -> rbfopt::Result<()> {
    // The walker wants to be as high as the highest hill.
    let samples = [Sample::new(Vec::new(), vec![1.0])];
    let mut walker = Walker { x: 1.0, y: 1.0 };
    let mut algorithm = HillClimbing::new(walker.memory(), 0.2, 0.1)?;

    for step in 0..32 {
        let position = algorithm
            .next(&mut |candidate: &[f64]| {
                walker.set_memory(candidate)?;
                training::evaluate(&walker, &samples, &distance::euclidean)
            })?
            .to_vec();
        walker.set_memory(&position)?;
        println!(
            "step {:2}: position {:?}, height {:.4}",
            step,
            position,
            terrain(walker.x, walker.y)?
        );
    }
    Ok(())
}
