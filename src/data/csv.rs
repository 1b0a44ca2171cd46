//! MNIST-style CSV loading.
//!
//! Format, one sample per line, no header:
//! ```text
//! label,p0,p1,...,p{n-1}
//! ```
//! where `label` is a class index in `[0, n_classes)` and every `p` is an
//! integer pixel intensity in `[0, 255]`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, Trim};
use log::{debug, warn};

use crate::data::sample::Sample;
use crate::error::{Error, Result};

/// Opens `path` and reads every sample from it.
pub fn load_samples(
    path: &Path,
    input_nodes: usize,
    output_nodes: usize,
) -> Result<Vec<Sample>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let samples = read_samples(file, input_nodes, output_nodes)?;

    if samples.is_empty() {
        warn!("no samples found in {}", path.display());
    } else {
        debug!("loaded {} samples from {}", samples.len(), path.display());
    }

    Ok(samples)
}

/// Reads samples from any CSV source. Each record must hold exactly
/// `input_nodes + 1` fields and a label below `output_nodes`.
pub fn read_samples<R: Read>(
    reader: R,
    input_nodes: usize,
    output_nodes: usize,
) -> Result<Vec<Sample>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();

    for (idx, record) in csv.records().enumerate() {
        let record = record?;
        let record_no = idx + 1;

        if record.len() != input_nodes + 1 {
            return Err(Error::InvalidSample {
                record: record_no,
                reason: format!(
                    "expected {} fields (label + pixels), got {}",
                    input_nodes + 1,
                    record.len()
                ),
            });
        }

        let label_cell = &record[0];
        let label: usize = label_cell.parse().map_err(|_| Error::InvalidSample {
            record: record_no,
            reason: format!("label '{}' is not a non-negative integer", label_cell),
        })?;
        if label >= output_nodes {
            return Err(Error::InvalidSample {
                record: record_no,
                reason: format!("label {} >= {} classes", label, output_nodes),
            });
        }

        let pixels = record
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, cell)| {
                cell.parse::<u8>().map_err(|_| Error::InvalidSample {
                    record: record_no,
                    reason: format!("pixel {} value '{}' is not an integer in [0, 255]", i, cell),
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        samples.push(Sample::new(label, pixels));
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_label_and_pixels() {
        let data = "5,0,128,255\n0, 1, 2, 3\n";
        let samples = read_samples(data.as_bytes(), 3, 10).unwrap();
        assert_eq!(samples, vec![Sample::new(5, vec![0, 128, 255]), Sample::new(0, vec![1, 2, 3])]);
    }

    #[test]
    fn skips_blank_lines() {
        let data = "1,0,0\n\n2,3,4\n";
        let samples = read_samples(data.as_bytes(), 2, 10).unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_samples() {
        assert!(read_samples("".as_bytes(), 4, 10).unwrap().is_empty());
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = read_samples("1,0,0\n2,3\n".as_bytes(), 2, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidSample { record: 2, .. }));
    }

    #[test]
    fn rejects_label_outside_classes() {
        let err = read_samples("10,0,0\n".as_bytes(), 2, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidSample { record: 1, .. }));
    }

    #[test]
    fn rejects_out_of_range_pixel() {
        let err = read_samples("1,0,256\n".as_bytes(), 2, 10).unwrap_err();
        assert!(err.to_string().contains("pixel 1"));
    }

    #[test]
    fn rejects_non_numeric_label() {
        let err = read_samples("x,0,0\n".as_bytes(), 2, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidSample { record: 1, .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_samples(Path::new("/nonexistent/mnist_train.csv"), 784, 10).unwrap_err();
        assert!(err.to_string().contains("mnist_train.csv"));
    }
}
