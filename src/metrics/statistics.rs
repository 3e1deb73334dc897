use ndarray::ArrayView1;

/// Statistics for a collection of loss values
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub mean: f32,
    pub std: f32,
    pub min: f32,
    pub max: f32,
    pub count: usize,
}

impl Statistics {
    /// Compute statistics from a slice of values
    pub fn from_slice(values: &[f32]) -> Self {
        if values.is_empty() {
            return Statistics {
                mean: 0.0,
                std: 0.0,
                min: 0.0,
                max: 0.0,
                count: 0,
            };
        }

        let count = values.len();
        let sum: f32 = values.iter().sum();
        let mean = sum / count as f32;

        let variance = values.iter()
            .map(|&x| (x - mean).powi(2))
            .sum::<f32>() / count as f32;
        let std = variance.sqrt();

        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        Statistics {
            mean,
            std,
            min,
            max,
            count,
        }
    }

    /// Compute statistics from an array view
    pub fn from_array(array: ArrayView1<f32>) -> Self {
        Self::from_slice(array.as_slice().unwrap_or(&[]))
    }
}
