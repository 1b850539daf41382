//! Loading and splitting of the hand-drawn digits dataset.

use std::io::BufRead;

use crate::data::reader::NumberReader;
use crate::error::DataError;

/// Number of pixel values per sample (an 8x8 bitmap).
pub const SAMPLE_WIDTH: usize = 64;
/// Largest legal pixel intensity.
pub const MAX_PIXEL: u32 = 16;

/// A fully validated digits dataset.
///
/// Inputs keep the raw pixel magnitudes (`0.0 ..= 16.0`); targets are
/// one-hot vectors of width `n_classes`. Index `i` of `inputs` pairs
/// with index `i` of `targets`. The network only ever borrows these
/// buffers; it never mutates them.
#[derive(Debug, Clone)]
pub struct DigitDataset {
    pub inputs: Vec<Vec<f64>>,
    pub targets: Vec<Vec<f64>>,
    pub n_classes: usize,
}

/// A borrowed run of samples, as produced by [`DigitDataset::split`].
#[derive(Debug, Clone, Copy)]
pub struct SampleSlice<'a> {
    pub inputs: &'a [Vec<f64>],
    pub targets: &'a [Vec<f64>],
}

impl SampleSlice<'_> {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl DigitDataset {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Splits the dataset into a leading training part and a trailing
    /// testing part, in file order and without shuffling. The boundary
    /// is `len * train_ratio`, truncated toward zero.
    pub fn split(&self, train_ratio: f64) -> (SampleSlice<'_>, SampleSlice<'_>) {
        let boundary = ((self.len() as f64) * train_ratio) as usize;
        let boundary = boundary.min(self.len());

        (
            SampleSlice {
                inputs: &self.inputs[..boundary],
                targets: &self.targets[..boundary],
            },
            SampleSlice {
                inputs: &self.inputs[boundary..],
                targets: &self.targets[boundary..],
            },
        )
    }
}

/// Parses a digits data stream.
///
/// The first two numbers declare the sample count and the class count.
/// Every sample is then one class index (below the class count)
/// followed by exactly [`SAMPLE_WIDTH`] pixel values, each at most
/// [`MAX_PIXEL`]. Anything after the declared samples is rejected, as
/// is a stream that ends early. All failures carry the position the
/// reader had reached.
pub fn load_digits<R: BufRead>(reader: R) -> Result<DigitDataset, DataError> {
    let mut numbers = NumberReader::new(reader);

    let n_samples = numbers
        .next_number()?
        .ok_or(DataError::MissingSampleCount {
            position: numbers.position(),
        })?;
    if n_samples == 0 {
        return Err(DataError::NoSamples {
            position: numbers.position(),
        });
    }

    let n_classes = numbers
        .next_number()?
        .ok_or(DataError::MissingClassCount {
            position: numbers.position(),
        })?;
    if n_classes == 0 {
        return Err(DataError::NoClasses {
            position: numbers.position(),
        });
    }

    let n_samples = n_samples as usize;
    let mut inputs = Vec::with_capacity(n_samples);
    let mut targets = Vec::with_capacity(n_samples);

    for sample in 0..n_samples {
        let class = match numbers.next_number()? {
            Some(class) => class,
            None => {
                return Err(DataError::TooFewSamples {
                    got: sample,
                    expected: n_samples,
                    position: numbers.position(),
                });
            }
        };
        if class >= n_classes {
            return Err(DataError::ClassOutOfRange {
                class,
                limit: n_classes,
                position: numbers.position(),
            });
        }

        let mut target = vec![0.0; n_classes as usize];
        target[class as usize] = 1.0;

        let mut pixels = Vec::with_capacity(SAMPLE_WIDTH);
        for read in 0..SAMPLE_WIDTH {
            let value = match numbers.next_number()? {
                Some(value) => value,
                None => {
                    return Err(DataError::IncompleteSample {
                        got: read,
                        expected: SAMPLE_WIDTH,
                        position: numbers.position(),
                    });
                }
            };
            if value > MAX_PIXEL {
                return Err(DataError::PixelOutOfRange {
                    value,
                    limit: MAX_PIXEL,
                    position: numbers.position(),
                });
            }
            pixels.push(f64::from(value));
        }

        inputs.push(pixels);
        targets.push(target);
    }

    if numbers.next_number()?.is_some() {
        return Err(DataError::TrailingData {
            position: numbers.position(),
        });
    }

    Ok(DigitDataset {
        inputs,
        targets,
        n_classes: n_classes as usize,
    })
}
