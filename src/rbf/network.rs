use std::{fmt, ops::Range};

use crate::{rbf::Unit, training::Trainee, Error, Result};

/// A radial basis function network: the element-wise sum of its units' outputs.
///
/// Every unit must produce the same number of outputs. The memory of the network is each unit's
/// memory in unit order, see [`Network::memory_ranges`]. A failed `set_memory` leaves every unit as
/// it was.
#[derive(Debug)]
pub struct Network {
    units: Vec<Box<dyn Unit>>,
    output_count: usize,
}

impl Network {
    /// Create a network from at least one unit, all with the same number of outputs.
    pub fn new(units: Vec<Box<dyn Unit>>) -> Result<Self> {
        let output_count = match units.first() {
            Some(unit) => unit.output_count(),
            None => {
                return Err(Error::Configuration(
                    "a network needs at least one unit".to_string(),
                ))
            }
        };
        for (i, unit) in units.iter().enumerate().skip(1) {
            check_unit(i, output_count, unit.output_count())?;
        }
        Ok(Self {
            units,
            output_count,
        })
    }

    /// Append a unit, failing if its number of outputs differs from the network's.
    pub fn push(&mut self, unit: Box<dyn Unit>) -> Result<()> {
        check_unit(self.units.len(), self.output_count, unit.output_count())?;
        self.units.push(unit);
        Ok(())
    }

    /// The units in order.
    pub fn units(&self) -> &[Box<dyn Unit>] {
        &self.units
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false, a network holds at least one unit.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The range of the network's memory owned by each unit, in unit order.
    pub fn memory_ranges(&self) -> Vec<Range<usize>> {
        let mut offset = 0;
        self.units
            .iter()
            .map(|unit| {
                let start = offset;
                offset += unit.memory_size();
                start..offset
            })
            .collect()
    }
}

fn check_unit(unit: usize, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Configuration(format!(
            "unit {} has {} outputs, expected {}",
            unit, actual, expected
        )));
    }
    Ok(())
}

fn check_output_count(unit: usize, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::OutputCountMismatch {
            unit,
            expected,
            actual,
        });
    }
    Ok(())
}

impl Trainee for Network {
    fn calculate(&self, input: &[f64]) -> Result<Vec<f64>> {
        let mut output = vec![0.0; self.output_count];
        for (i, unit) in self.units.iter().enumerate() {
            let values = unit.calculate(input)?;
            check_output_count(i, self.output_count, values.len())?;
            output.iter_mut().zip(values).for_each(|(o, v)| *o += v);
        }
        Ok(output)
    }

    fn memory_size(&self) -> usize {
        self.units.iter().map(|unit| unit.memory_size()).sum()
    }

    fn memory(&self) -> Vec<f64> {
        let mut memory = Vec::with_capacity(self.memory_size());
        for unit in &self.units {
            memory.extend(unit.memory());
        }
        memory
    }

    fn set_memory(&mut self, memory: &[f64]) -> Result<()> {
        let ranges = self.memory_ranges();
        let size = ranges.last().map_or(0, |r| r.end);
        if memory.len() != size {
            return Err(Error::MemoryLengthMismatch {
                expected: size,
                actual: memory.len(),
            });
        }
        let previous = self.memory();
        for (i, range) in ranges.iter().enumerate() {
            if let Err(err) = self.units[i].set_memory(&memory[range.clone()]) {
                // Put back the units written so far, they accepted slices of these lengths.
                for (unit, range) in self.units[..i].iter_mut().zip(&ranges) {
                    let _ = unit.set_memory(&previous[range.clone()]);
                }
                return Err(err);
            }
        }
        Ok(())
    }
}

impl Unit for Network {
    fn output_count(&self) -> usize {
        self.output_count
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network ({} outputs)", self.output_count)?;
        for (i, unit) in self.units.iter().enumerate() {
            writeln!(f, "  {}: {:?}", i, unit)?;
        }
        Ok(())
    }
}
