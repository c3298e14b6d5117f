//! Helpers for looking inside an array: [explain], [visualize] and [benchmark].
//!
//! None of these modify the array they are given.

use std::{
    fmt::Write,
    time::{Duration, Instant},
};

use vectopy_core::array::VectoPyArray;

/// Describes the array's metadata, one property per line.
///
/// Strides, base and memory size describe the simulated layout of a
/// contiguous, self owning array, computed from [VectoPyArray::itemsize].
///
/// ```rust
/// # use vectopy::prelude::*;
/// let a = array([1, 2, 3]).unwrap();
/// let text = explain(&a);
/// assert!(text.contains("Shape: (3,)"));
/// assert!(text.contains("Memory Size: 12 bytes"));
/// ```
pub fn explain(array: &VectoPyArray) -> String {
    let itemsize = array.itemsize();
    let dtype = array.dtype();
    let mut out = String::from("VectoPyArray Metadata Explanation:\n");
    let _ = writeln!(
        out,
        "  * Shape: ({},) - A 1-dimensional array with {} elements.",
        array.len(),
        array.len()
    );
    let _ = writeln!(out, "  * Dtype: {dtype} - Elements are stored as {}.", element_kind(array));
    let _ = writeln!(
        out,
        "  * Strides: ({itemsize},) - To move to the next element, step {itemsize} bytes in memory (simulated)."
    );
    let _ = writeln!(out, "  * Base: None - This array owns its data (simulated).");
    let _ = writeln!(out, "  * Underlying Data: {}", data_list(array));
    let _ = writeln!(out, "  * Memory Size: {} bytes (simulated)", array.nbytes());
    out
}

fn element_kind(array: &VectoPyArray) -> &'static str {
    match array.dtype() {
        vectopy_core::dtypes::Dtype::Integer => "signed integers",
        vectopy_core::dtypes::Dtype::Float => "floating point numbers",
    }
}

fn data_list(array: &VectoPyArray) -> String {
    let items: Vec<String> = array.iter().map(|x| x.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Options for [visualize_with].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChart {
    /// Number of glyphs the largest value maps to, bars are padded to this
    /// width.
    pub width: usize,
    pub glyph: char,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            width: 10,
            glyph: '█',
        }
    }
}

/// Draws the array as a horizontal bar chart with the default [BarChart].
///
/// ```rust
/// # use vectopy::prelude::*;
/// let a = array([0, 5, 10]).unwrap();
/// let lines: Vec<String> = visualize(&a).lines().map(String::from).collect();
/// assert_eq!(lines[0], "█          (0)");
/// assert_eq!(lines[2], "███████████ (10)");
/// ```
pub fn visualize(array: &VectoPyArray) -> String {
    visualize_with(array, &BarChart::default())
}

/// Draws the array as a horizontal bar chart.
///
/// Each element gets one line: a bar of `floor((x - min) / (max - min) * width) + 1`
/// glyphs, left aligned in a field of `width` characters, then the value in
/// parentheses. An array whose elements are all equal is drawn as a single
/// line with one glyph per element.
pub fn visualize_with(array: &VectoPyArray, chart: &BarChart) -> String {
    if array.is_empty() {
        return String::from("Empty array\n");
    }
    let values = array.to_f64_vec();
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = hi - lo;

    let mut out = String::new();
    if range == 0.0 {
        out.extend(std::iter::repeat(chart.glyph).take(values.len()));
        out.push('\n');
        return out;
    }
    for (x, value) in values.iter().zip(array.iter()) {
        let scaled = ((x - lo) / range * chart.width as f64).floor() as usize;
        let bar: String = std::iter::repeat(chart.glyph).take(scaled + 1).collect();
        let _ = writeln!(out, "{bar:<width$} ({value})", width = chart.width);
    }
    out
}

/// The result of an operation together with how long it took.
#[derive(Debug, Clone)]
pub struct Timed<R> {
    pub name: String,
    pub result: R,
    pub elapsed: Duration,
}

impl<R> std::fmt::Display for Timed<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Operation {} took {:.6} seconds",
            self.name,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Runs `op` on `array` once and measures the wall clock time it takes.
///
/// The timing is also reported as a `tracing` event at the `INFO` level.
///
/// ```rust
/// # use vectopy::prelude::*;
/// let a = arange(1000).unwrap();
/// let timed = benchmark("sum", &a, |a| a.sum());
/// assert_eq!(timed.result, Ok(Scalar::Int(499500)));
/// assert!(timed.to_string().starts_with("Operation sum took"));
/// ```
pub fn benchmark<R>(
    name: &str,
    array: &VectoPyArray,
    op: impl FnOnce(&VectoPyArray) -> R,
) -> Timed<R> {
    let start = Instant::now();
    let result = op(array);
    let elapsed = start.elapsed();
    tracing::info!(
        op = name,
        size = array.len(),
        elapsed_secs = elapsed.as_secs_f64(),
        "benchmark finished"
    );
    Timed {
        name: name.to_string(),
        result,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectopy_core::dtypes::Dtype;

    #[test]
    fn test_explain_float() {
        let a = VectoPyArray::from_vec_f64(vec![1.5, 2.0]);
        let text = explain(&a);
        assert!(text.contains("Dtype: float"));
        assert!(text.contains("Strides: (8,)"));
        assert!(text.contains("Underlying Data: [1.5, 2.0]"));
        assert!(text.contains("Memory Size: 16 bytes"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_visualize_empty() {
        let a = VectoPyArray::zeros(0, Dtype::Integer);
        assert_eq!(visualize(&a), "Empty array\n");
    }

    #[test]
    fn test_visualize_constant() {
        let a = VectoPyArray::from_vec_i64(vec![3, 3, 3]);
        assert_eq!(visualize(&a), "███\n");
    }

    #[test]
    fn test_visualize_custom_chart() {
        let chart = BarChart {
            width: 4,
            glyph: '#',
        };
        let a = VectoPyArray::from_vec_f64(vec![0.0, 0.5, 1.0]);
        assert_eq!(
            visualize_with(&a, &chart),
            "#    (0.0)\n###  (0.5)\n##### (1.0)\n"
        );
    }

    #[test]
    fn test_visualize_keeps_array() {
        let a = VectoPyArray::from_vec_i64(vec![2, 1]);
        let _ = visualize(&a);
        assert_eq!(a, VectoPyArray::from_vec_i64(vec![2, 1]));
    }

    #[test]
    fn test_benchmark_returns_result() {
        let a = VectoPyArray::from_vec_i64(vec![1, 2, 3]);
        let timed = benchmark("reverse", &a, VectoPyArray::reverse);
        assert_eq!(timed.result, VectoPyArray::from_vec_i64(vec![3, 2, 1]));
        assert_eq!(timed.name, "reverse");
        let text = timed.to_string();
        assert!(text.starts_with("Operation reverse took "));
        assert!(text.ends_with(" seconds"));
    }
}
