use egui_plot::PlotPoint;

use crate::config::DisplayParameters;
use crate::data::loader::{Ingestion, Rejection};
use crate::data::model::SampleSequence;

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// Everything the window renders.
pub struct ChartState {
    pub samples: SampleSequence,

    pub display: DisplayParameters,

    /// Number of input lines that did not yield a sample.
    pub rejected_lines: usize,

    /// The earliest rejected line, shown as an example in the status bar.
    pub first_rejection: Option<Rejection>,

    /// Set when reading stopped on an I/O error instead of end-of-stream.
    pub status_message: Option<String>,

    /// Plot points, built once from `samples` and borrowed by every frame.
    points: Vec<PlotPoint>,
}

impl ChartState {
    pub fn new(samples: SampleSequence, display: DisplayParameters) -> Self {
        let points = samples.indexed_points().map(PlotPoint::from).collect();
        Self {
            samples,
            display,
            rejected_lines: 0,
            first_rejection: None,
            status_message: None,
            points,
        }
    }

    /// Build the state from a finished ingestion pass.
    pub fn from_ingestion(ingestion: Ingestion, display: DisplayParameters) -> Self {
        let mut state = Self::new(ingestion.samples, display);
        state.rejected_lines = ingestion.rejected.len();
        state.first_rejection = ingestion.rejected.into_iter().next();
        state.status_message = ingestion.read_error.map(|e| {
            format!(
                "Input ended early after line {}: {e}",
                ingestion.lines_read
            )
        });
        state
    }

    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::data::loader::read_samples;

    #[test]
    fn points_follow_sample_indices() {
        let mut samples = SampleSequence::new();
        samples.push(1.5);
        samples.push(-2.0);
        let state = ChartState::new(samples, DisplayParameters::default());
        let xy: Vec<[f64; 2]> = state.points().iter().map(|p| [p.x, p.y]).collect();
        assert_eq!(xy, vec![[0.0, 0.0], [1.0, 1.5], [2.0, -2.0]]);
        assert_eq!(state.display.title, "Filter");
        assert!(state.status_message.is_none());
    }

    #[test]
    fn ingestion_summary_carries_rejections() {
        let ingestion = read_samples(Cursor::new(b"1\nx\ny\n2\n".to_vec()));
        let state = ChartState::from_ingestion(ingestion, DisplayParameters::default());
        assert_eq!(state.rejected_lines, 2);
        let first = state.first_rejection.as_ref().unwrap();
        assert_eq!((first.line_no, first.text.as_str()), (2, "x"));
        assert_eq!(state.samples.parsed_count(), 2);
        assert_eq!(state.points().len(), 3);
    }

    #[test]
    fn read_error_becomes_a_status_message() {
        let ingestion = Ingestion {
            samples: SampleSequence::new(),
            rejected: Vec::new(),
            lines_read: 7,
            read_error: Some(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
        };
        let state = ChartState::from_ingestion(ingestion, DisplayParameters::default());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Input ended early after line 7: boom")
        );
    }
}
